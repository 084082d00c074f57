use serde::{Deserialize, Serialize};
use crate::structs::config::scraper_config::ScraperConfig;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub scraper: ScraperConfig,
}
