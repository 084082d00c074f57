use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "rn-upgrade-helper")]
#[clap(about = "React Native upgrade-helper scraper and MCP server", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
