//! Configuration management for Boardkit
//!
//! Loads, validates and saves configuration files in JSON or TOML, chosen by
//! file extension.
//!
//! Configuration is organized into logical sections:
//! - Board geometry (viewport size and zoom)
//! - Placement offsets applied to generated shapes
//! - Logging output

use crate::error::{ConfigError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Board geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    /// Viewport width in pixels
    pub width: f64,
    /// Viewport height in pixels
    pub height: f64,
    /// Initial zoom (1.0 = 100%)
    pub zoom: f64,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 600.0,
            zoom: 1.0,
        }
    }
}

/// Pixel offsets added to every generated shape
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementSettings {
    pub offset_x: f64,
    pub offset_y: f64,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable multi-line output
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::InvalidValue {
                key: "logging.format".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Logging preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub format: LogFormat,
    /// Log level (`trace` through `error`, or `off`) used when `RUST_LOG` is
    /// unset. Per-target directives belong in `RUST_LOG`.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            format: LogFormat::Pretty,
            level: "info".to_string(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Board geometry
    pub board: BoardSettings,
    /// Shape placement
    pub placement: PlacementSettings,
    /// Logging
    pub logging: LoggingSettings,
}

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Lower zoom bound (exclusive), matching the board viewport.
pub const MIN_ZOOM: f64 = 0.1;

/// Upper zoom bound (exclusive), matching the board viewport.
pub const MAX_ZOOM: f64 = 50.0;

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config location: `<config_dir>/boardkit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string())
        })?;
        Ok(dir.join("boardkit").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, else the platform config if it exists, else defaults
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }
        match Self::default_path() {
            Ok(default) if default.exists() => Self::load_from_file(&default),
            _ => Ok(Self::default()),
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("board.width", self.board.width),
            ("board.height", self.board.height),
            ("board.zoom", self.board.zoom),
        ];
        for (key, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::ValueOutOfRange {
                    key: key.to_string(),
                    value: value.to_string(),
                });
            }
        }

        if !(self.board.zoom > MIN_ZOOM && self.board.zoom < MAX_ZOOM) {
            return Err(ConfigError::ValueOutOfRange {
                key: "board.zoom".to_string(),
                value: self.board.zoom.to_string(),
            });
        }

        let offsets = [
            ("placement.offset_x", self.placement.offset_x),
            ("placement.offset_y", self.placement.offset_y),
        ];
        for (key, value) in offsets {
            if !value.is_finite() {
                return Err(ConfigError::ValueOutOfRange {
                    key: key.to_string(),
                    value: value.to_string(),
                });
            }
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                key: "logging.level".to_string(),
                value: self.logging.level.clone(),
            });
        }

        Ok(())
    }
}

enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::new();
        assert_eq!(config.board.width, 1200.0);
        assert_eq!(config.board.height, 600.0);
        assert_eq!(config.placement, PlacementSettings::default());
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::new();
        config.board.zoom = 0.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange {
                key: "board.zoom".to_string(),
                value: "0".to_string()
            })
        );

        for zoom in [0.05, 0.1, 50.0, 60.0] {
            let mut config = Config::new();
            config.board.zoom = zoom;
            assert_eq!(
                config.validate(),
                Err(ConfigError::ValueOutOfRange {
                    key: "board.zoom".to_string(),
                    value: zoom.to_string()
                })
            );
        }

        let mut config = Config::new();
        config.board.zoom = 49.5;
        assert!(config.validate().is_ok());

        let mut config = Config::new();
        config.placement.offset_x = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.logging.level = "loud".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));

        let mut config = Config::new();
        config.logging.level = "boardkit=debug".to_string();
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                key: "logging.level".to_string(),
                value: "boardkit=debug".to_string()
            })
        );

        let mut config = Config::new();
        config.logging.level = "WARN".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!(" pretty ".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert!("xml".parse::<LogFormat>().is_err());
        assert_eq!(LogFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[placement]\noffset_x = 40.0\n").unwrap();
        assert_eq!(config.placement.offset_x, 40.0);
        assert_eq!(config.placement.offset_y, 0.0);
        assert_eq!(config.board, BoardSettings::default());
    }
}
