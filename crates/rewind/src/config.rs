//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rewind_tictactoe::EngineOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a terminal session.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Report a draw once the board is full with no winner.
    #[serde(default = "default_draw_detection")]
    draw_detection: bool,

    /// Show the index of empty cells on the board.
    #[serde(default = "default_show_indices")]
    show_indices: bool,

    /// Prompt printed before each interactive command.
    #[serde(default = "default_prompt")]
    prompt: String,

    /// `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

#[instrument]
fn default_draw_detection() -> bool {
    true
}

#[instrument]
fn default_show_indices() -> bool {
    true
}

#[instrument]
fn default_prompt() -> String {
    "> ".to_string()
}

#[instrument]
fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            draw_detection: default_draw_detection(),
            show_indices: default_show_indices(),
            prompt: default_prompt(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if given and present, otherwise falls back to defaults.
    ///
    /// An explicitly named file that does not exist is an error; the
    /// default location is optional.
    #[instrument]
    pub fn load(path: Option<&Path>, default_path: &Path) -> Result<Self, ConfigError> {
        match path {
            Some(path) if !path.exists() => Err(ConfigError::new(format!(
                "Config file not found: {}",
                path.display()
            ))),
            Some(path) => Self::from_file(path),
            None if default_path.exists() => Self::from_file(default_path),
            None => {
                debug!(default = %default_path.display(), "No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Engine options derived from this configuration.
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions::default().with_draw_detection(self.draw_detection)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(*config.draw_detection());
        assert!(*config.show_indices());
        assert_eq!(config.prompt(), "> ");
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config = AppConfig::from_toml("draw_detection = false\nprompt = \"ttt> \"\n").unwrap();
        assert!(!*config.draw_detection());
        assert_eq!(config.prompt(), "ttt> ");
        assert!(*config.show_indices());
        assert!(!config.engine_options().draw_detection);
    }

    #[test]
    fn test_bad_toml_is_error() {
        let err = AppConfig::from_toml("draw_detection = \"maybe\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }
}
