use clap::Parser;
use rn_upgrade_helper::structs::cli::Cli;
use rn_upgrade_helper::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Stdout is reserved for protocol frames in serve mode; env_logger
    // writes to stderr.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new();
    runner.run_command(cli.command).await?;
    Ok(())
}
