use serde::{Deserialize, Serialize};

/// Top-level browser settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct BrowserSettings {
    pub general: GeneralSettings,
    pub window: WindowSettings,
    pub logging: LoggingSettings,
}

/// Navigation defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralSettings {
    /// Loaded by new tabs and the home action.
    pub homepage: String,
    /// Prefix the raw search text is appended to.
    pub search_url: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            homepage: "https://www.google.com".to_string(),
            search_url: "https://www.google.com/search?q=".to_string(),
        }
    }
}

/// Initial main-window geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub x: i32,
    pub y: i32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Quantum Browser".to_string(),
            width: 1200,
            height: 800,
            x: 100,
            y: 100,
        }
    }
}

/// Log filter directive passed to the tracing subscriber.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "quantum_browser=info".to_string(),
        }
    }
}
