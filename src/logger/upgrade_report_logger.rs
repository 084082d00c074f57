use crate::enums::change_type::ChangeType;
use crate::structs::file_diff_result::FileDiffResult;
use crate::structs::upgrade_result::UpgradeResult;

pub struct UpgradeReportLogger {}

impl UpgradeReportLogger {

    pub fn print_upgrade_report(result: &UpgradeResult) {
        println!("🔍 UPGRADE REPORT: {} -> {}", result.from_version, result.to_version);
        println!("======================");
        println!("{}\n", result.summary);

        println!(
            "📊 {} files changed ({} modified, {} added, {} deleted)",
            result.total_files, result.modified_files, result.added_files, result.deleted_files
        );

        if !result.breaking_changes.is_empty() {
            println!("\n⚠️ BREAKING CHANGES ({} total):", result.breaking_changes.len());
            for (i, change) in result.breaking_changes.iter().enumerate() {
                println!("  {}. {}", i + 1, change);
            }
        }

        if !result.file_changes.is_empty() {
            println!("\n🔧 FILE CHANGES:");
            for change in &result.file_changes {
                println!("  {} {}", Self::change_marker(&change.change_type), change.file_name);
            }
        }
    }

    pub fn print_file_diff_report(result: &FileDiffResult) {
        if !result.found {
            println!("⚠️ {}", result.message.as_deref().unwrap_or("File not found"));
            return;
        }

        let change_type = result
            .change_type
            .as_ref()
            .map(ChangeType::as_str)
            .unwrap_or("modified");

        println!("📄 Diff for {} ({}):", result.file_name, change_type);
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("{}", result.diff.as_deref().unwrap_or(""));
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    }

    fn change_marker(change_type: &ChangeType) -> &'static str {
        match change_type {
            ChangeType::Added => "➕",
            ChangeType::Deleted => "➖",
            ChangeType::Modified => "✏️",
            ChangeType::Other(_) => "❔",
        }
    }
}
