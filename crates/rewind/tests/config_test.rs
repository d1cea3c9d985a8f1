//! Tests for loading configuration files.

use rewind::AppConfig;
use std::io::Write;
use std::path::Path;

#[test]
fn test_load_explicit_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "show_indices = false\nlog_filter = \"debug\"").unwrap();

    let config = AppConfig::load(Some(file.path()), Path::new("unused.toml")).unwrap();
    assert!(!*config.show_indices());
    assert_eq!(config.log_filter(), "debug");
    assert!(*config.draw_detection());
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = AppConfig::load(Some(missing.as_path()), Path::new("unused.toml")).unwrap_err();
    assert!(err.message.starts_with("Config file not found"));
}

#[test]
fn test_default_path_used_when_present() {
    let dir = tempfile::tempdir().unwrap();
    let default_path = dir.path().join("rewind.toml");
    std::fs::write(&default_path, "prompt = \"$ \"\n").unwrap();

    let config = AppConfig::load(None, &default_path).unwrap();
    assert_eq!(config.prompt(), "$ ");
}

#[test]
fn test_defaults_when_nothing_present() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load(None, &dir.path().join("rewind.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}
