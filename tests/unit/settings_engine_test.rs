//! Integration-level unit tests for the SettingsEngine public API.
//!
//! Each test points the engine at a file inside its own temp directory.

use serde_json::Value;
use tempfile::TempDir;

use quantum_browser::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use quantum_browser::types::errors::SettingsError;
use quantum_browser::types::settings::BrowserSettings;

/// The caller holds the `TempDir` so the file outlives the engine.
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    let path = dir
        .path()
        .join("settings.json")
        .to_string_lossy()
        .to_string();
    SettingsEngine::new(Some(path))
}

#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();

    assert_eq!(settings, BrowserSettings::default());
    assert_eq!(settings.general.homepage, "https://www.google.com");
    assert_eq!(settings.general.search_url, "https://www.google.com/search?q=");
    assert_eq!(settings.window.title, "Quantum Browser");
    assert_eq!((settings.window.width, settings.window.height), (1200, 800));
    assert_eq!((settings.window.x, settings.window.y), (100, 100));
}

#[test]
fn test_set_value_persists_changes() {
    let dir = TempDir::new().unwrap();

    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine
            .set_value("general.homepage", Value::from("https://start.test"))
            .unwrap();
    }

    let mut reloaded = engine_in_temp(&dir);
    let settings = reloaded.load().unwrap();
    assert_eq!(settings.general.homepage, "https://start.test");
}

#[test]
fn test_set_value_rejects_unknown_key() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let err = engine.set_value("general.theme", Value::from("dark"));
    assert!(matches!(err, Err(SettingsError::InvalidKey(_))));
    let err = engine.set_value("", Value::from("x"));
    assert!(matches!(err, Err(SettingsError::InvalidKey(_))));
}

#[test]
fn test_set_value_rejects_wrong_type_and_keeps_state() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let err = engine.set_value("window.width", Value::from("wide"));
    assert!(matches!(err, Err(SettingsError::InvalidValue(_))));
    assert_eq!(engine.get_settings().window.width, 1200);
    assert!(!dir.path().join("settings.json").exists());
}

#[test]
fn test_partial_file_is_filled_with_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("settings.json"),
        r#"{"general":{"homepage":"https://partial.test"}}"#,
    )
    .unwrap();

    let mut engine = engine_in_temp(&dir);
    let settings = engine.load().unwrap();

    assert_eq!(settings.general.homepage, "https://partial.test");
    assert_eq!(settings.general.search_url, "https://www.google.com/search?q=");
    assert_eq!(settings.window.width, 1200);
}

#[test]
fn test_malformed_file_is_a_serialization_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("settings.json"), "{ not json").unwrap();

    let mut engine = engine_in_temp(&dir);
    assert!(matches!(
        engine.load(),
        Err(SettingsError::SerializationError(_))
    ));
}

#[test]
fn test_save_creates_missing_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("settings.json");
    let engine = SettingsEngine::new(Some(path.to_string_lossy().to_string()));

    engine.save().unwrap();
    assert!(path.exists());
}

#[test]
fn test_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine
        .set_value("logging.level", Value::from("quantum_browser=trace"))
        .unwrap();

    engine.reset().unwrap();

    assert_eq!(engine.get_settings(), &BrowserSettings::default());
    let mut reloaded = engine_in_temp(&dir);
    assert_eq!(reloaded.load().unwrap(), BrowserSettings::default());
}

#[test]
fn test_failed_write_keeps_previous_settings() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "file").unwrap();
    let path = blocker.join("settings.json");
    let mut engine = SettingsEngine::new(Some(path.to_string_lossy().to_string()));

    let err = engine.set_value("general.homepage", Value::from("https://start.test"));

    assert!(matches!(err, Err(SettingsError::IoError(_))));
    assert_eq!(engine.get_settings().general.homepage, "https://www.google.com");
}
