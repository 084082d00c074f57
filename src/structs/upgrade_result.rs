use serde::{Deserialize, Serialize};
use crate::enums::change_type::ChangeType;
use crate::structs::file_change::FileChange;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeResult {
    pub from_version: String,
    pub to_version: String,
    pub package_name: String,
    pub project_name: String,
    pub url: String,
    pub summary: String,
    pub breaking_changes: Vec<String>,
    pub file_changes: Vec<FileChange>,
    pub total_files: usize,
    pub modified_files: usize,
    pub added_files: usize,
    pub deleted_files: usize,
}

impl UpgradeResult {
    /// Counter buckets only cover the three recognized change kinds; records
    /// with any other badge label count toward the total alone.
    pub fn count_of(changes: &[FileChange], kind: &ChangeType) -> usize {
        changes.iter().filter(|c| c.change_type == *kind).count()
    }
}
