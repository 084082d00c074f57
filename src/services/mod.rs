pub mod browser_session;
pub mod form_filler;
pub mod page_waiter;
pub mod chrome_driver;
pub mod diff_extractor;
pub mod upgrade_scraper;
pub mod mcp_server;
