use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use headless_chrome::{Browser, LaunchOptions, Tab};
use crate::errors::{UpgradeHelperError, UpgradeHelperResult};
use crate::structs::config::scraper_config::ScraperConfig;

/// One headless Chrome session with a single tab. Sessions are not reused
/// across requests; dropping the session ends the Chrome process, and
/// `close` makes that hand-off explicit at the end of the page flow.
pub struct BrowserSession {
    browser: Browser,
    tab: Arc<Tab>,
}

impl BrowserSession {

    pub fn launch(config: &ScraperConfig) -> UpgradeHelperResult<Self> {
        let mut builder = LaunchOptions::default_builder();
        builder
            .headless(config.headless)
            .idle_browser_timeout(Duration::from_secs(config.idle_browser_timeout_secs));

        if let Some(chrome_path) = &config.chrome_path {
            builder.path(Some(PathBuf::from(chrome_path)));
        }

        let options = builder
            .build()
            .map_err(|e| UpgradeHelperError::browser_error("launch options", &e.to_string()))?;

        let browser = Browser::new(options)
            .map_err(|e| UpgradeHelperError::browser_error("launch", &e.to_string()))?;

        let tab = browser
            .new_tab()
            .map_err(|e| UpgradeHelperError::browser_error("tab creation", &e.to_string()))?;

        log::debug!("🌐 Browser session started (pid {:?})", browser.get_process_id());

        Ok(Self { browser, tab })
    }

    pub fn navigate(&self, url: &str) -> UpgradeHelperResult<()> {
        self.tab
            .navigate_to(url)
            .map_err(|e| UpgradeHelperError::navigation_error(url, &e.to_string()))?;
        self.tab
            .wait_until_navigated()
            .map_err(|e| UpgradeHelperError::navigation_error(url, &e.to_string()))?;
        Ok(())
    }

    /// Bounded wait for a selector; exceeding the bound fails the request.
    pub fn wait_for(&self, selector: &str, timeout: Duration) -> UpgradeHelperResult<()> {
        self.tab
            .wait_for_element_with_custom_timeout(selector, timeout)
            .map(|_| ())
            .map_err(|_| UpgradeHelperError::wait_timeout(selector, timeout.as_secs()))
    }

    /// Evaluate a JavaScript expression in the page; primitive results come
    /// back as JSON values.
    pub fn evaluate(&self, script: &str) -> UpgradeHelperResult<Option<serde_json::Value>> {
        let object = self
            .tab
            .evaluate(script, false)
            .map_err(|e| UpgradeHelperError::browser_error("script evaluation", &e.to_string()))?;
        Ok(object.value)
    }

    /// Snapshot of the rendered document.
    pub fn content(&self) -> UpgradeHelperResult<String> {
        self.tab
            .get_content()
            .map_err(|e| UpgradeHelperError::browser_error("page snapshot", &e.to_string()))
    }

    pub fn close(self) {
        log::debug!("🧹 Closing browser session (pid {:?})", self.browser.get_process_id());
    }
}
