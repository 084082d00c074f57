use clap::Subcommand;
use crate::config::constants::{DEFAULT_PACKAGE_NAME, DEFAULT_PROJECT_NAME};

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Run the MCP server on stdin/stdout
    Serve,
    /// Scrape the full upgrade diff between two versions
    Upgrade {
        /// Source React Native version (e.g. "0.70.14")
        #[clap(long)]
        from: String,
        /// Target React Native version (e.g. "0.74.0")
        #[clap(long)]
        to: String,
        /// Package name for the project
        #[clap(long, default_value = DEFAULT_PACKAGE_NAME)]
        package: String,
        /// Project name
        #[clap(long, default_value = DEFAULT_PROJECT_NAME)]
        project: String,
        /// Print the raw JSON payload instead of the report
        #[clap(long)]
        json: bool,
    },
    /// Scrape the diff of a single file between two versions
    Diff {
        /// Source React Native version
        #[clap(long)]
        from: String,
        /// Target React Native version
        #[clap(long)]
        to: String,
        /// File to look up (e.g. "package.json", "android/build.gradle")
        #[clap(long)]
        file: String,
        #[clap(long, default_value = DEFAULT_PACKAGE_NAME)]
        package: String,
        #[clap(long, default_value = DEFAULT_PROJECT_NAME)]
        project: String,
        /// Print the raw JSON payload instead of the report
        #[clap(long)]
        json: bool,
    },
    /// Validate the configuration and probe the upgrade-helper page
    Validate,
}
