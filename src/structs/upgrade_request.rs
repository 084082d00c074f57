use serde::{Deserialize, Serialize};

/// Inputs of one upgrade extraction. Immutable for the duration of the call;
/// nothing is persisted between calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeRequest {
    pub from_version: String,
    pub to_version: String,
    pub package_name: String,
    pub project_name: String,
}
