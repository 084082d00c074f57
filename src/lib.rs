//! React Native upgrade-helper scraper: drives the upgrade-helper page in
//! headless Chrome, extracts file-level upgrade diffs from the rendered DOM,
//! and exposes the extraction as MCP tools on stdio or as one-shot CLI
//! commands.

pub mod structs;
pub mod services;
pub mod helpers;
pub mod enums;
pub mod errors;
pub mod logger;
pub mod config;
pub mod workers;
pub mod traits;
