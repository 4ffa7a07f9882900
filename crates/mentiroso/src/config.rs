//! Front-end configuration: optional TOML file with CLI overrides.

use derive_getters::Getters;
use derive_more::{Display, Error};
use mentiroso_engine::TargetWord;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::Cli;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "mentiroso.toml";

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Word whose letters count strikes.
    word: TargetWord,

    /// File that receives tracing output while the TUI owns the terminal.
    log_file: PathBuf,
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("mentiroso.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            word: TargetWord::default(),
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(word = %config.word, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the configuration for a command line.
    ///
    /// An explicit `--config` path must exist. Without one, the default
    /// path is read when present and built-in defaults apply otherwise.
    /// Flags given on the command line win over file values.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let base = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH)?,
            None => {
                debug!("No config file, using defaults");
                Self::default()
            }
        };
        base.with_overrides(cli.word.as_deref(), cli.log_file.clone())
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        word: Option<&str>,
        log_file: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if let Some(word) = word {
            self.word = TargetWord::new(word)
                .map_err(|e| ConfigError::new(format!("Invalid --word: {}", e)))?;
            debug!(word = %self.word, "Overriding target word");
        }
        if let Some(log_file) = log_file {
            debug!(log_file = %log_file.display(), "Overriding log file");
            self.log_file = log_file;
        }
        Ok(self)
    }

    /// Renders the configuration as TOML.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to render config: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
