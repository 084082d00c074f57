use async_trait::async_trait;
use crate::errors::UpgradeHelperResult;
use crate::structs::upgrade_request::UpgradeRequest;

/// The browser seam. A page driver takes one request through the full page
/// flow (navigate, fill, submit, wait) and returns the rendered HTML the
/// extractor works on. One invocation equals one browser session.
#[async_trait]
pub trait UpgradePage: Send + Sync {

    async fn fetch_rendered_diff(&self, request: &UpgradeRequest) -> UpgradeHelperResult<String>;
}
