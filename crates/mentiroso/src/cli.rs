//! Command-line interface for mentiroso.

use clap::Parser;
use std::path::PathBuf;

/// Mentiroso - terminal scoreboard for the dice game
#[derive(Parser, Debug, Default)]
#[command(name = "mentiroso")]
#[command(about = "Track strikes and eliminations for a Mentiroso table", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./mentiroso.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Target word; one letter per strike
    #[arg(short, long)]
    pub word: Option<String>,

    /// File to write logs to while the TUI is running
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print the resolved configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}
