use serde::{Deserialize, Serialize};
use crate::enums::change_type::ChangeType;
use crate::structs::file_diff_request::FileDiffRequest;

/// Outcome of a single-file lookup. A missing file is a normal result with
/// `found: false`, never an error. When found, `file_name` carries the name
/// resolved from the page, which may differ from the requested one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDiffResult {
    pub from_version: String,
    pub to_version: String,
    pub file_name: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_type: Option<ChangeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FileDiffResult {
    pub fn found(request: &FileDiffRequest, file_name: String, change_type: ChangeType, diff: String) -> Self {
        Self {
            from_version: request.upgrade.from_version.clone(),
            to_version: request.upgrade.to_version.clone(),
            file_name,
            found: true,
            change_type: Some(change_type),
            diff: Some(diff),
            message: None,
        }
    }

    pub fn not_found(request: &FileDiffRequest) -> Self {
        Self {
            from_version: request.upgrade.from_version.clone(),
            to_version: request.upgrade.to_version.clone(),
            file_name: request.file_name.clone(),
            found: false,
            change_type: None,
            diff: None,
            message: Some(format!(
                "File \"{}\" not found in the upgrade diff. Available files can be retrieved using get_upgrade_info.",
                request.file_name
            )),
        }
    }
}
