use std::fs;
use std::path::{Path, PathBuf};
use crate::errors::{UpgradeHelperError, UpgradeHelperResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join("rn-upgrade-helper/config.toml"))
    }

    pub fn load() -> UpgradeHelperResult<Config> {
        match Self::config_path() {
            Some(path) if path.exists() => {
                log::info!("📋 Loading config from: {}", path.display());
                Self::load_from(&path)
            }
            _ => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> UpgradeHelperResult<Config> {
        let content = fs::read_to_string(path).map_err(|e| {
            UpgradeHelperError::ConfigurationFileError {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
        })?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn create_sample_config() -> UpgradeHelperResult<PathBuf> {
        let sample_config = r#"# rn-upgrade-helper configuration

[scraper]
# The upgrade-helper page to automate
base_url = "https://react-native-community.github.io/upgrade-helper/"

# Run Chrome without a visible window
headless = true

# Explicit Chrome/Chromium binary; leave unset to auto-detect
# chrome_path = "/usr/bin/chromium"

# Bounded waits, matching the page's render behavior
form_wait_timeout_secs = 10
render_grace_ms = 2000
diff_wait_timeout_secs = 15
idle_browser_timeout_secs = 60
"#;

        let path = Self::config_path().ok_or_else(|| {
            UpgradeHelperError::config_error(
                "Could not resolve a home directory for the configuration file",
                None,
            )
        })?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, sample_config)?;
        Ok(path)
    }

    pub fn validate_config(config: &Config) -> UpgradeHelperResult<()> {
        if config.scraper.base_url.trim().is_empty() {
            return Err(UpgradeHelperError::config_error(
                "scraper.base_url must not be empty",
                Some("Run 'rn-upgrade-helper init' to restore the defaults"),
            ));
        }

        if !config.scraper.base_url.starts_with("http://") && !config.scraper.base_url.starts_with("https://") {
            return Err(UpgradeHelperError::config_error(
                "scraper.base_url must be an http(s) URL",
                Some("Example: https://react-native-community.github.io/upgrade-helper/"),
            ));
        }

        if config.scraper.form_wait_timeout_secs == 0 || config.scraper.diff_wait_timeout_secs == 0 {
            return Err(UpgradeHelperError::config_error(
                "wait timeouts must be greater than zero",
                Some("Every page wait must stay bounded; use the defaults if unsure"),
            ));
        }

        Ok(())
    }
}
