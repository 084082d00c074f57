use serde::{Deserialize, Serialize};
use crate::structs::upgrade_request::UpgradeRequest;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDiffRequest {
    #[serde(flatten)]
    pub upgrade: UpgradeRequest,
    pub file_name: String,
}
