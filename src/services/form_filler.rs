use crate::errors::UpgradeHelperResult;
use crate::helpers::script_builder;
use crate::services::browser_session::BrowserSession;
use crate::structs::upgrade_request::UpgradeRequest;

pub struct FormFiller;

impl FormFiller {

    /// Best-effort fill of the version form. Returns how many inputs were
    /// written; zero or multiple matches per rule are not errors, the page
    /// keeps whatever the last write left behind.
    pub fn fill(session: &BrowserSession, request: &UpgradeRequest) -> UpgradeHelperResult<usize> {
        let script = script_builder::build_form_fill_script(request);
        let value = session.evaluate(&script)?;
        let filled = value.and_then(|v| v.as_u64()).unwrap_or(0) as usize;

        if filled == 0 {
            log::warn!("⚠️ No form input matched any label rule; the page layout may have changed");
        } else {
            log::debug!("📝 Filled {} form inputs", filled);
        }

        Ok(filled)
    }
}
