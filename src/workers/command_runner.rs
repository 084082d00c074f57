use std::sync::Arc;
use std::time::{Duration, Instant};
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::{UpgradeHelperError, UpgradeHelperResult};
use crate::logger::upgrade_report_logger::UpgradeReportLogger;
use crate::services::chrome_driver::ChromeDriver;
use crate::services::mcp_server::McpServer;
use crate::services::upgrade_scraper::UpgradeScraper;
use crate::structs::config::config::Config;
use crate::structs::file_diff_request::FileDiffRequest;
use crate::structs::upgrade_request::UpgradeRequest;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> UpgradeHelperResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command().await,
            Commands::Serve => self.serve_command().await,
            Commands::Upgrade { from, to, package, project, json } => {
                self.upgrade_command(from, to, package, project, json).await
            }
            Commands::Diff { from, to, file, package, project, json } => {
                self.diff_command(from, to, file, package, project, json).await
            }
            Commands::Validate => self.validate_command().await,
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn load_config(&self) -> UpgradeHelperResult<Config> {
        let config = ConfigManager::load()?;
        ConfigManager::validate_config(&config)?;
        Ok(config)
    }

    fn build_scraper(config: &Config) -> UpgradeScraper {
        let driver = Arc::new(ChromeDriver::new(config.scraper.clone()));
        UpgradeScraper::new(driver, config.scraper.base_url.clone())
    }

    fn require_value(field: &str, value: &str) -> UpgradeHelperResult<()> {
        if value.trim().is_empty() {
            return Err(UpgradeHelperError::validation_error(field, "must not be empty"));
        }
        Ok(())
    }

    async fn init_command(&self) -> UpgradeHelperResult<()> {
        log::info!("🚀 Initializing rn-upgrade-helper configuration...");

        match ConfigManager::create_sample_config() {
            Ok(path) => {
                log::info!("✅ Configuration file created at {}", path.display());
                log::info!("🔧 Run 'rn-upgrade-helper validate' to check it.");
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                return Err(e);
            }
        }

        Ok(())
    }

    async fn serve_command(&self) -> UpgradeHelperResult<()> {
        let config = self.load_config()?;
        let server = McpServer::new(Self::build_scraper(&config));
        server.run().await
    }

    async fn upgrade_command(
        &self,
        from: String,
        to: String,
        package: String,
        project: String,
        json: bool,
    ) -> UpgradeHelperResult<()> {
        Self::require_value("from", &from)?;
        Self::require_value("to", &to)?;

        let config = self.load_config()?;
        let scraper = Self::build_scraper(&config);
        let request = UpgradeRequest {
            from_version: from,
            to_version: to,
            package_name: package,
            project_name: project,
        };

        match scraper.get_upgrade_info(&request).await {
            Ok(result) => {
                if json {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                } else {
                    UpgradeReportLogger::print_upgrade_report(&result);
                }
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Upgrade scrape failed: {}", e);
                Err(e)
            }
        }
    }

    async fn diff_command(
        &self,
        from: String,
        to: String,
        file: String,
        package: String,
        project: String,
        json: bool,
    ) -> UpgradeHelperResult<()> {
        Self::require_value("from", &from)?;
        Self::require_value("to", &to)?;
        Self::require_value("file", &file)?;

        let config = self.load_config()?;
        let scraper = Self::build_scraper(&config);
        let request = FileDiffRequest {
            upgrade: UpgradeRequest {
                from_version: from,
                to_version: to,
                package_name: package,
                project_name: project,
            },
            file_name: file,
        };

        match scraper.get_file_diff(&request).await {
            Ok(result) => {
                if json {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                } else {
                    UpgradeReportLogger::print_file_diff_report(&result);
                }
                Ok(())
            }
            Err(e) => {
                log::error!("❌ File diff scrape failed: {}", e);
                Err(e)
            }
        }
    }

    async fn validate_command(&self) -> UpgradeHelperResult<()> {
        log::info!("🔍 Validating rn-upgrade-helper configuration...");

        let config = match ConfigManager::load() {
            Ok(config) => {
                log::info!("✅ Configuration file loaded successfully");
                config
            }
            Err(e) => {
                log::error!("❌ Failed to load configuration: {}", e);
                log::error!("💡 Run 'rn-upgrade-helper init' to create a configuration file.");
                return Err(e);
            }
        };

        ConfigManager::validate_config(&config)?;
        log::info!("✅ Configuration is valid");

        self.probe_upgrade_helper(&config).await
    }

    async fn probe_upgrade_helper(&self, config: &Config) -> UpgradeHelperResult<()> {
        log::info!("🌐 Probing {} ...", config.scraper.base_url);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        let response = client.get(&config.scraper.base_url).send().await?;

        if response.status().is_success() {
            log::info!("✅ Upgrade-helper page is reachable ({})", response.status());
        } else {
            log::warn!("⚠️ Upgrade-helper page answered with {}", response.status());
        }

        Ok(())
    }
}
