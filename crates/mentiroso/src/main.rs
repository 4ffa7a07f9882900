//! Mentiroso - terminal scoreboard
//!
//! Tracks strikes and eliminations for one Mentiroso table.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use mentiroso::{AppConfig, Cli, run_tui};
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::resolve(&cli)?;

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    initialize_tracing(config.log_file())?;
    info!(word = %config.word(), "Configuration resolved");

    run_tui(config.word().clone())
}

/// Sends tracing output to a file so it does not interfere with the TUI.
#[instrument]
fn initialize_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,mentiroso=debug,mentiroso_engine=debug")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
