//! Mentiroso - terminal scoreboard for the Mentiroso dice game.
//!
//! The game rules live in [`mentiroso_engine`]. This crate adds the
//! command line, configuration, and the ratatui front end that forwards
//! key presses to the scoreboard as intents.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod tui;

// Crate-level exports - CLI and configuration
pub use cli::Cli;
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH};

// Crate-level exports - Terminal UI
pub use tui::{App, run_tui};
