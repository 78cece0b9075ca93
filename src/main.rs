// src/main.rs

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use phoenix_updater::Config;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Refresh) => commands::cmd_refresh(config, cli.quiet),
        Some(Commands::FetchRelease { version, refresh }) => {
            commands::cmd_fetch_release(config, version, refresh, cli.quiet)
        }
        Some(Commands::FetchTheme {
            theme,
            platform_version,
        }) => commands::cmd_fetch_theme(config, theme.into(), platform_version, cli.quiet),
        Some(Commands::Update { from }) => commands::cmd_update(config, from, cli.quiet),
        Some(Commands::Status { current }) => commands::cmd_status(config, current),
        Some(Commands::Completions { shell }) => {
            commands::cmd_completions(shell);
            Ok(())
        }
        None => {
            // No command provided, show help
            println!("Phoenix Updater v{}", env!("CARGO_PKG_VERSION"));
            println!("Run 'phoenix-updater --help' for usage information");
            Ok(())
        }
    }
}
