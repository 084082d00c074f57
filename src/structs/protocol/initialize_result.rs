use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::structs::protocol::server_info::ServerInfo;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    pub protocol_version: String,
    pub capabilities: Value,
    pub server_info: ServerInfo,
}
