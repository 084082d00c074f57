use async_trait::async_trait;
use crate::errors::{UpgradeHelperError, UpgradeHelperResult};
use crate::services::browser_session::BrowserSession;
use crate::services::form_filler::FormFiller;
use crate::services::page_waiter::PageWaiter;
use crate::structs::config::scraper_config::ScraperConfig;
use crate::structs::upgrade_request::UpgradeRequest;
use crate::traits::upgrade_page::UpgradePage;

/// `UpgradePage` implementation backed by headless Chrome. Each call runs
/// the whole sequential page flow on the blocking pool: navigate, wait for
/// the form, fill it, grace delay, submit, wait for the diff, snapshot.
pub struct ChromeDriver {
    config: ScraperConfig,
}

impl ChromeDriver {
    pub fn new(config: ScraperConfig) -> Self {
        Self { config }
    }

    fn fetch_blocking(config: &ScraperConfig, request: &UpgradeRequest) -> UpgradeHelperResult<String> {
        let session = BrowserSession::launch(config)?;
        let outcome = Self::drive(&session, config, request);
        // The session comes down before the outcome propagates, on every path.
        session.close();
        outcome
    }

    fn drive(
        session: &BrowserSession,
        config: &ScraperConfig,
        request: &UpgradeRequest,
    ) -> UpgradeHelperResult<String> {
        session.navigate(&config.base_url)?;
        PageWaiter::await_form(session, config)?;
        FormFiller::fill(session, request)?;
        PageWaiter::allow_reactive_render(config);

        let submitted = PageWaiter::submit_if_present(session)?;
        if !submitted {
            log::debug!("No submit button found; relying on reactive form updates");
        }

        PageWaiter::await_diff_content(session, config)?;
        session.content()
    }
}

#[async_trait]
impl UpgradePage for ChromeDriver {

    async fn fetch_rendered_diff(&self, request: &UpgradeRequest) -> UpgradeHelperResult<String> {
        let config = self.config.clone();
        let request = request.clone();

        tokio::task::spawn_blocking(move || Self::fetch_blocking(&config, &request))
            .await
            .map_err(|e| UpgradeHelperError::system_error("scrape task", &e.to_string()))?
    }
}
