//! Boardkit Settings Crate
//!
//! Handles configuration files: board geometry, placement offsets and logging.

pub mod config;
pub mod error;

pub use config::{
    BoardSettings, Config, LogFormat, LoggingSettings, PlacementSettings, MAX_ZOOM, MIN_ZOOM,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
