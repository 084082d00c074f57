use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use async_trait::async_trait;
use rn_upgrade_helper::config::constants::{DEFAULT_PACKAGE_NAME, DEFAULT_PROJECT_NAME, UPGRADE_HELPER_URL};
use rn_upgrade_helper::errors::{UpgradeHelperError, UpgradeHelperResult};
use rn_upgrade_helper::services::mcp_server::McpServer;
use rn_upgrade_helper::services::upgrade_scraper::UpgradeScraper;
use rn_upgrade_helper::structs::file_diff_request::FileDiffRequest;
use rn_upgrade_helper::structs::upgrade_request::UpgradeRequest;
use rn_upgrade_helper::traits::upgrade_page::UpgradePage;

/// Stand-in page driver: serves a fixed snapshot and counts invocations,
/// which is how the one-fetch-per-call property is asserted.
pub struct MockPage {
    html: String,
    calls: AtomicUsize,
}

impl MockPage {
    pub fn new(html: String) -> Self {
        Self {
            html,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpgradePage for MockPage {
    async fn fetch_rendered_diff(&self, _request: &UpgradeRequest) -> UpgradeHelperResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.html.clone())
    }
}

/// Page driver that always fails the diff wait, after counting the call.
pub struct FailingPage {
    calls: AtomicUsize,
}

impl FailingPage {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpgradePage for FailingPage {
    async fn fetch_rendered_diff(&self, _request: &UpgradeRequest) -> UpgradeHelperResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(UpgradeHelperError::wait_timeout(
            r#"[data-testid="file-diff"], .diff-container, .file-diff"#,
            15,
        ))
    }
}

pub fn server_with_page(page: Arc<dyn UpgradePage>) -> McpServer {
    McpServer::new(UpgradeScraper::new(page, UPGRADE_HELPER_URL.to_string()))
}

pub fn upgrade_request(from: &str, to: &str) -> UpgradeRequest {
    UpgradeRequest {
        from_version: from.to_string(),
        to_version: to.to_string(),
        package_name: DEFAULT_PACKAGE_NAME.to_string(),
        project_name: DEFAULT_PROJECT_NAME.to_string(),
    }
}

pub fn file_diff_request(from: &str, to: &str, file_name: &str) -> FileDiffRequest {
    FileDiffRequest {
        upgrade: upgrade_request(from, to),
        file_name: file_name.to_string(),
    }
}

/// A rendered diff list with one file per change kind plus one record with
/// an unrecognized badge, a summary block, and breaking-change notices
/// (one of them duplicated across two strategy positions).
pub fn full_page_html() -> String {
    r#"<html>
  <body>
    <div class="upgrade-summary">4 files need attention for this upgrade</div>
    <div class="breaking-change">Minimum iOS version raised</div>
    <p>Some breaking APIs were removed</p>
    <div class="warning">Minimum iOS version raised</div>
    <div class="warning">Hermes is now the default engine</div>
    <div data-testid="file-diff" class="file-diff added">
      <strong class="file-name">package.json</strong>
      <pre class="diff-content">+ "react-native": "0.74.0"</pre>
    </div>
    <div data-testid="file-diff" class="file-diff deleted">
      <strong class="file-name">android/app/build.gradle</strong>
      <pre class="diff-content">removed jetifier flags</pre>
    </div>
    <div data-testid="file-diff" class="file-diff">
      <strong class="file-name">ios/Podfile</strong>
      <span class="badge">modified</span>
      <pre class="diff-content">pod config updated to the new format</pre>
    </div>
    <div data-testid="file-diff" class="file-diff">
      <strong class="file-name">app.json</strong>
      <span class="badge">renamed</span>
      <pre class="diff-content">same content under a new key</pre>
    </div>
  </body>
</html>"#
        .to_string()
}

/// Blocks reachable only through the `.diff-container` cascade entry; one
/// carries "file" in its class string, the other does not.
pub fn unnamed_blocks_html() -> String {
    r#"<html>
  <body>
    <div class="diff-container">
      <pre>raw block with no name anywhere</pre>
    </div>
    <div class="diff-container file-card">
      <pre>block marked as a file by its class only</pre>
    </div>
  </body>
</html>"#
        .to_string()
}

/// Three named files for single-file lookups.
pub fn multi_file_html() -> String {
    r#"<html>
  <body>
    <div data-testid="file-diff" class="file-diff">
      <strong class="file-name">android/app/build.gradle</strong>
      <pre class="diff-content">applied new gradle plugin</pre>
    </div>
    <div data-testid="file-diff" class="file-diff">
      <strong class="file-name">package.json</strong>
      <pre class="diff-content">bumped react dependencies</pre>
    </div>
    <div data-testid="file-diff" class="file-diff">
      <strong class="file-name">ios/Podfile</strong>
      <pre class="diff-content">regenerated pods</pre>
    </div>
  </body>
</html>"#
        .to_string()
}

/// One file whose diff body exceeds the full-page truncation limit.
pub fn oversized_content_html(char_count: usize) -> String {
    let body = "x".repeat(char_count);
    format!(
        r#"<html>
  <body>
    <div data-testid="file-diff" class="file-diff">
      <strong class="file-name">huge.txt</strong>
      <pre class="diff-content">{}</pre>
    </div>
  </body>
</html>"#,
        body
    )
}

/// A diff list with no summary or breaking-change elements at all.
pub fn bare_html() -> String {
    r#"<html>
  <body>
    <div data-testid="file-diff" class="file-diff">
      <strong class="file-name">ios/Podfile</strong>
      <pre class="diff-content">regenerated pods</pre>
    </div>
  </body>
</html>"#
        .to_string()
}
