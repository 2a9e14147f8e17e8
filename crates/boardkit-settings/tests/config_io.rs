// Config file tests
// Save/load through JSON and TOML files and the failure paths around them.

use boardkit_settings::{Config, ConfigError, LogFormat, SettingsError};
use tempfile::TempDir;

fn custom_config() -> Config {
    let mut config = Config::new();
    config.board.width = 1920.0;
    config.board.height = 1080.0;
    config.board.zoom = 1.5;
    config.placement.offset_x = -40.0;
    config.placement.offset_y = 25.0;
    config.logging.format = LogFormat::Json;
    config.logging.level = "debug".to_string();
    config
}

#[test]
fn test_toml_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    custom_config().save_to_file(&path).unwrap();
    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, custom_config());
}

#[test]
fn test_json_round_trip_creates_parent_dirs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("boardkit.json");

    custom_config().save_to_file(&path).unwrap();
    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded.logging.format, LogFormat::Json);
    assert_eq!(loaded.placement.offset_x, -40.0);
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "board: {}").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(
        err,
        SettingsError::Config(ConfigError::UnsupportedFormat(ref ext)) if ext == "yaml"
    ));
}

#[test]
fn test_invalid_file_contents() {
    let dir = TempDir::new().unwrap();

    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        Config::load_from_file(&path),
        Err(SettingsError::JsonError(_))
    ));

    let path = dir.path().join("invalid.toml");
    std::fs::write(&path, "[board]\nwidth = -5.0\n").unwrap();
    assert!(matches!(
        Config::load_from_file(&path),
        Err(SettingsError::Config(ConfigError::ValueOutOfRange { .. }))
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    assert!(matches!(
        Config::load_from_file(&path),
        Err(SettingsError::IoError(_))
    ));
    assert!(Config::load_or_default(Some(&path)).is_err());
}

#[test]
fn test_save_refuses_invalid_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = Config::new();
    config.board.width = 0.0;
    assert!(config.save_to_file(&path).is_err());
    assert!(!path.exists());
}
