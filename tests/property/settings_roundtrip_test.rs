//! Property-based tests for BrowserSettings serialization.
//!
//! Arbitrary settings survive a JSON round trip and a save/load cycle
//! through the settings engine.

use proptest::prelude::*;
use quantum_browser::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use quantum_browser::types::settings::{
    BrowserSettings, GeneralSettings, LoggingSettings, WindowSettings,
};
use tempfile::TempDir;

fn arb_general() -> impl Strategy<Value = GeneralSettings> {
    ("https://[a-z]{1,10}\\.[a-z]{2,3}", "https://[a-z]{1,10}\\.[a-z]{2,3}/\\?q=")
        .prop_map(|(homepage, search_url)| GeneralSettings { homepage, search_url })
}

fn arb_window() -> impl Strategy<Value = WindowSettings> {
    (".{0,30}", 200..4000u32, 200..3000u32, -500..3000i32, -500..3000i32).prop_map(
        |(title, width, height, x, y)| WindowSettings { title, width, height, x, y },
    )
}

fn arb_logging() -> impl Strategy<Value = LoggingSettings> {
    prop_oneof![
        Just("quantum_browser=info"),
        Just("quantum_browser=debug"),
        Just("warn"),
        Just("trace"),
    ]
    .prop_map(|level| LoggingSettings { level: level.to_string() })
}

fn arb_settings() -> impl Strategy<Value = BrowserSettings> {
    (arb_general(), arb_window(), arb_logging()).prop_map(|(general, window, logging)| {
        BrowserSettings { general, window, logging }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn settings_json_roundtrip(settings in arb_settings()) {
        let json = serde_json::to_string(&settings).unwrap();
        let decoded: BrowserSettings = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(decoded, settings);
    }

    #[test]
    fn homepage_survives_save_and_reload(general in arb_general()) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json").to_string_lossy().to_string();

        let mut engine = SettingsEngine::new(Some(path.clone()));
        engine
            .set_value("general.homepage", serde_json::Value::from(general.homepage.clone()))
            .unwrap();

        let mut reloaded = SettingsEngine::new(Some(path));
        prop_assert_eq!(reloaded.load().unwrap().general.homepage, general.homepage);
    }
}
