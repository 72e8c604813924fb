use serde::{Deserialize, Serialize};

/// Title shown for a tab until the engine reports a page title.
pub const PLACEHOLDER_TITLE: &str = "New Tab";

/// Maximum number of title characters shown on a tab before truncation.
pub const MAX_TAB_TITLE_CHARS: usize = 20;

/// Shell-side state of a browser tab. Navigation history lives in the engine view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tab {
    pub id: String,
    pub url: String,
    pub title: String,
    pub progress: u8,
}

impl Tab {
    /// The title as it appears on the tab strip.
    pub fn display_title(&self) -> String {
        truncate_title(&self.title)
    }
}

/// Truncates a title to [`MAX_TAB_TITLE_CHARS`] characters, appending `...` when cut.
pub fn truncate_title(title: &str) -> String {
    if title.chars().count() > MAX_TAB_TITLE_CHARS {
        let mut short: String = title.chars().take(MAX_TAB_TITLE_CHARS).collect();
        short.push_str("...");
        short
    } else {
        title.to_string()
    }
}

/// One entry of the tab strip as rendered by the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabLabel {
    pub id: String,
    pub title: String,
    pub active: bool,
}
