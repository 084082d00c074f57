use serde::{Deserialize, Serialize};
use crate::config::constants::{
    DEFAULT_DIFF_WAIT_TIMEOUT_SECS, DEFAULT_FORM_WAIT_TIMEOUT_SECS,
    DEFAULT_IDLE_BROWSER_TIMEOUT_SECS, DEFAULT_RENDER_GRACE_MS, UPGRADE_HELPER_URL,
};

/// Tunables for the browser-driven scrape: 10s for the form, a fixed 2s
/// render grace, 15s for the diff list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    pub base_url: String,
    pub headless: bool,
    /// Explicit Chrome/Chromium binary; auto-detected when unset.
    pub chrome_path: Option<String>,
    pub form_wait_timeout_secs: u64,
    pub render_grace_ms: u64,
    pub diff_wait_timeout_secs: u64,
    pub idle_browser_timeout_secs: u64,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: UPGRADE_HELPER_URL.to_string(),
            headless: true,
            chrome_path: None,
            form_wait_timeout_secs: DEFAULT_FORM_WAIT_TIMEOUT_SECS,
            render_grace_ms: DEFAULT_RENDER_GRACE_MS,
            diff_wait_timeout_secs: DEFAULT_DIFF_WAIT_TIMEOUT_SECS,
            idle_browser_timeout_secs: DEFAULT_IDLE_BROWSER_TIMEOUT_SECS,
        }
    }
}
