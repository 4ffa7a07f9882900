//! Tests for configuration loading and CLI overrides.

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use mentiroso::{AppConfig, Cli};

/// Writes a config file into a temporary directory and returns its path.
fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("mentiroso.toml");
    fs::write(&path, content).expect("Failed to write TOML");
    path
}

#[test]
fn test_defaults_without_file() {
    let config = AppConfig::resolve(&Cli::default()).expect("Resolve failed");
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.word().to_string(), "MENTIROSO");
    assert_eq!(config.log_file(), &PathBuf::from("mentiroso.log"));
}

#[test]
fn test_file_values_loaded() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "word = \"burro\"\nlog_file = \"table.log\"\n");

    let config = AppConfig::from_file(&path).expect("Load failed");
    assert_eq!(config.word().to_string(), "BURRO");
    assert_eq!(config.log_file(), &PathBuf::from("table.log"));
}

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "log_file = \"other.log\"\n");

    let config = AppConfig::from_file(&path).expect("Load failed");
    assert_eq!(config.word().len(), 9);
    assert_eq!(config.log_file(), &PathBuf::from("other.log"));
}

#[test]
fn test_cli_overrides_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "word = \"burro\"\n");
    let cli = Cli::parse_from([
        "mentiroso",
        "--config",
        path.to_str().expect("utf-8 path"),
        "--word",
        "dado",
        "--log-file",
        "cli.log",
    ]);

    let config = AppConfig::resolve(&cli).expect("Resolve failed");
    assert_eq!(config.word().to_string(), "DADO");
    assert_eq!(config.log_file(), &PathBuf::from("cli.log"));
}

#[test]
fn test_blank_word_in_file_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "word = \"  \"\n");

    let err = AppConfig::from_file(&path).expect_err("Blank word accepted");
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_invalid_cli_word_rejected() {
    let cli = Cli::parse_from(["mentiroso", "--word", "two words"]);
    let err = AppConfig::resolve(&cli).expect_err("Invalid word accepted");
    assert!(err.message.contains("Invalid --word"));
}

#[test]
fn test_explicit_missing_file_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let cli = Cli::parse_from([
        "mentiroso",
        "--config",
        dir.path().join("absent.toml").to_str().expect("utf-8 path"),
    ]);
    let err = AppConfig::resolve(&cli).expect_err("Missing file accepted");
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_to_toml_round_trips() {
    let config = AppConfig::default()
        .with_overrides(Some("vaca"), None)
        .expect("Override failed");
    let text = config.to_toml().expect("Render failed");
    assert!(text.contains("word = \"VACA\""));

    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, &text);
    assert_eq!(AppConfig::from_file(&path).expect("Load failed"), config);
}
