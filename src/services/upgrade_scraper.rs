use std::sync::Arc;
use crate::errors::UpgradeHelperResult;
use crate::services::diff_extractor::DiffExtractor;
use crate::structs::file_diff_request::FileDiffRequest;
use crate::structs::file_diff_result::FileDiffResult;
use crate::structs::upgrade_request::UpgradeRequest;
use crate::structs::upgrade_result::UpgradeResult;
use crate::traits::upgrade_page::UpgradePage;

/// Ties a page driver to the extractor. Every operation drives exactly one
/// page fetch; there is no caching or reuse between calls.
pub struct UpgradeScraper {
    page: Arc<dyn UpgradePage>,
    base_url: String,
}

impl UpgradeScraper {
    pub fn new(page: Arc<dyn UpgradePage>, base_url: String) -> Self {
        Self { page, base_url }
    }

    pub async fn get_upgrade_info(&self, request: &UpgradeRequest) -> UpgradeHelperResult<UpgradeResult> {
        log::info!(
            "🔍 Scraping upgrade info {} -> {}",
            request.from_version,
            request.to_version
        );

        let html = self.page.fetch_rendered_diff(request).await?;
        let result = DiffExtractor::extract_full(&html, request, &self.base_url);

        log::info!(
            "✅ Extracted {} file changes ({} modified, {} added, {} deleted)",
            result.total_files,
            result.modified_files,
            result.added_files,
            result.deleted_files
        );

        Ok(result)
    }

    pub async fn get_file_diff(&self, request: &FileDiffRequest) -> UpgradeHelperResult<FileDiffResult> {
        log::info!(
            "🔍 Looking up \"{}\" in the {} -> {} diff",
            request.file_name,
            request.upgrade.from_version,
            request.upgrade.to_version
        );

        let html = self.page.fetch_rendered_diff(&request.upgrade).await?;
        let result = DiffExtractor::extract_single(&html, request);

        if result.found {
            log::info!("✅ Found \"{}\"", result.file_name);
        } else {
            log::info!("📭 \"{}\" is not part of this upgrade diff", request.file_name);
        }

        Ok(result)
    }
}
