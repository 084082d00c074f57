use serde::{Deserialize, Serialize};
use crate::enums::change_type::ChangeType;

/// One extracted file-change record, derived from a single DOM element
/// snapshot at scrape time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileChange {
    pub file_name: String,
    pub change_type: ChangeType,
    pub has_changes: bool,
    pub content: String,
}
