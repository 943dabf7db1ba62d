//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Front-end configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Name prefilled for the X player.
    #[serde(default = "default_player_x")]
    player_x: String,

    /// Name prefilled for the O player.
    #[serde(default = "default_player_o")]
    player_o: String,

    /// File that receives tracing output while the terminal UI runs.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_player_x() -> String {
    "X".to_string()
}

fn default_player_o() -> String {
    "O".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("fol_tictactoe.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            player_x: default_player_x(),
            player_o: default_player_o(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!("Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
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
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = TuiConfig::load_or_default(dir.path().join("absent.toml")).expect("defaults");
        assert_eq!(config, TuiConfig::default());
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_default_names_start_a_replay() {
        let config = TuiConfig::default();
        let cells = [fol_tictactoe::Cell::ALL[0], fol_tictactoe::Cell::ALL[1]];
        let (session, _) =
            fol_tictactoe::GameSession::replay(config.player_x(), config.player_o(), &cells)
                .expect("default names are valid");
        assert_eq!(session.view().status_line(), "X's turn (X)");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "player_x = \"Ada\"\nlog_filter = \"debug\"").expect("write");

        let config = TuiConfig::from_file(file.path()).expect("valid config");
        assert_eq!(config.player_x(), "Ada");
        assert_eq!(config.player_o(), "O");
        assert_eq!(config.log_filter(), "debug");
        assert_eq!(config.log_file(), &PathBuf::from("fol_tictactoe.log"));
    }

    #[test]
    fn test_malformed_file_reports_location() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "player_x = ").expect("write");

        let err = TuiConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.file.ends_with("config.rs"));
    }
}
