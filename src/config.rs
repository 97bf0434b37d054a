//! Configuration handling for the TUI

use crate::state::ToastTimings;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Character used to hide password input when none is configured
pub const DEFAULT_MASK_CHAR: char = '•';

/// Errors from reading or writing the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TuiConfig {
    /// Display time of short notifications (rejections), in milliseconds
    pub short_toast_ms: Option<u64>,
    /// Display time of long notifications (account summaries), in milliseconds
    pub long_toast_ms: Option<u64>,
    /// Character drawn in place of each password character
    pub mask_char: Option<char>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "create-account", "create-account-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config directory.
    ///
    /// On first run the defaults are written out so there is a file to edit.
    pub fn load() -> Result<Self, ConfigError> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };
        if path.exists() {
            return Self::load_from(&path);
        }
        let config = Self::default();
        if let Err(err) = config.save() {
            tracing::warn!("could not write default config: {err}");
        }
        Ok(config)
    }

    /// Save configuration to the user config directory
    pub fn save(&self) -> Result<(), ConfigError> {
        match Self::config_path() {
            Some(path) => self.save_to(&path),
            None => Ok(()),
        }
    }

    /// Write configuration to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let content = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, content).map_err(io_error)
    }

    /// Load configuration from `path`, falling back to defaults if it is missing
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Toast display times, with defaults for unset values
    pub fn toast_timings(&self) -> ToastTimings {
        let defaults = ToastTimings::default();
        ToastTimings {
            short: self
                .short_toast_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.short),
            long: self
                .long_toast_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.long),
        }
    }

    pub fn mask_char(&self) -> char {
        self.mask_char.unwrap_or(DEFAULT_MASK_CHAR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("create-account-tui-test-{}-{name}", std::process::id()))
            .join("config.json")
    }

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.short_toast_ms.is_none());
        assert!(config.long_toast_ms.is_none());
        assert!(config.mask_char.is_none());
    }

    #[test]
    fn test_defaults_resolve() {
        let config = TuiConfig::default();
        assert_eq!(config.toast_timings(), ToastTimings::default());
        assert_eq!(config.mask_char(), DEFAULT_MASK_CHAR);
    }

    #[test]
    fn test_overrides_resolve() {
        let config = TuiConfig {
            short_toast_ms: Some(500),
            mask_char: Some('*'),
            ..Default::default()
        };
        let timings = config.toast_timings();
        assert_eq!(timings.short, Duration::from_millis(500));
        assert_eq!(timings.long, ToastTimings::DEFAULT_LONG);
        assert_eq!(config.mask_char(), '*');
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            short_toast_ms: Some(1000),
            long_toast_ms: Some(4000),
            mask_char: Some('#'),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, TuiConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"long_toast_ms": 100, "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.long_toast_ms, Some(100));
    }

    #[test]
    fn test_load_from_missing_file_returns_default() {
        let path = temp_config_path("missing");
        let config = TuiConfig::load_from(&path).unwrap();
        assert_eq!(config, TuiConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_config_path("load");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{"mask_char": "*", "short_toast_ms": 750}"#).unwrap();
        let loaded = TuiConfig::load_from(&path).unwrap();
        assert_eq!(loaded.mask_char, Some('*'));
        assert_eq!(loaded.short_toast_ms, Some(750));
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let path = temp_config_path("save");
        let config = TuiConfig {
            short_toast_ms: Some(1200),
            long_toast_ms: None,
            mask_char: Some('#'),
        };
        config.save_to(&path).unwrap();
        let loaded = TuiConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let path = temp_config_path("overwrite");
        TuiConfig {
            mask_char: Some('*'),
            ..Default::default()
        }
        .save_to(&path)
        .unwrap();
        TuiConfig::default().save_to(&path).unwrap();
        assert_eq!(TuiConfig::load_from(&path).unwrap(), TuiConfig::default());
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_invalid_json_is_parse_error() {
        let path = temp_config_path("invalid");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();
        let result = TuiConfig::load_from(&path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
