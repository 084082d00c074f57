use crate::config::constants::{
    grace_duration_millis, wait_timeout_secs, DIFF_READY_SELECTOR, FORM_INPUT_SELECTOR,
};
use crate::errors::UpgradeHelperResult;
use crate::helpers::script_builder;
use crate::services::browser_session::BrowserSession;
use crate::structs::config::scraper_config::ScraperConfig;

/// The page exposes no real readiness signal, so progress is gated on
/// bounded selector waits plus one fixed grace delay for the React re-render.
pub struct PageWaiter;

impl PageWaiter {

    /// The version form is ready once any input exists.
    pub fn await_form(session: &BrowserSession, config: &ScraperConfig) -> UpgradeHelperResult<()> {
        session.wait_for(
            FORM_INPUT_SELECTOR,
            wait_timeout_secs(config.form_wait_timeout_secs),
        )
    }

    /// Fixed delay after filling the form; there is no stable DOM marker for
    /// "reactive update applied" to poll against.
    pub fn allow_reactive_render(config: &ScraperConfig) {
        std::thread::sleep(grace_duration_millis(config.render_grace_ms));
    }

    /// Click a submit-like button when one exists. Absence is normal: some
    /// page revisions update purely reactively.
    pub fn submit_if_present(session: &BrowserSession) -> UpgradeHelperResult<bool> {
        let script = script_builder::build_submit_click_script();
        let value = session.evaluate(&script)?;
        Ok(value.and_then(|v| v.as_bool()).unwrap_or(false))
    }

    /// The diff list is ready once any known diff container exists. Timing
    /// out here fails the whole operation.
    pub fn await_diff_content(session: &BrowserSession, config: &ScraperConfig) -> UpgradeHelperResult<()> {
        session.wait_for(
            DIFF_READY_SELECTOR,
            wait_timeout_secs(config.diff_wait_timeout_secs),
        )
    }
}
