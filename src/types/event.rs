//! Messages flowing into the app core and the UI updates flowing out of it.

use serde::{Deserialize, Serialize};

use super::shortcut::KeyCombo;
use super::tab::TabLabel;

/// A user-level command, triggered by a toolbar button or a keyboard shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShellAction {
    NewTab,
    CloseActiveTab,
    FocusAddressBar,
    Reload,
    Back,
    Forward,
    Home,
    Bookmark,
    ShowDownloads,
    OpenSettings,
}

/// Notifications reported by an engine view, tagged with the tab that owns it.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    UrlChanged { tab_id: String, url: String },
    LoadProgress { tab_id: String, percent: u8 },
    LoadFinished { tab_id: String },
    TitleChanged { tab_id: String, title: String },
}

impl EngineEvent {
    pub fn tab_id(&self) -> &str {
        match self {
            EngineEvent::UrlChanged { tab_id, .. }
            | EngineEvent::LoadProgress { tab_id, .. }
            | EngineEvent::LoadFinished { tab_id }
            | EngineEvent::TitleChanged { tab_id, .. } => tab_id,
        }
    }
}

/// Input to [`crate::app::App::handle`].
#[derive(Debug, Clone, PartialEq)]
pub enum ShellMessage {
    Action(ShellAction),
    Key(KeyCombo),
    /// Raw text submitted from the address bar.
    Navigate(String),
    SwitchTab(usize),
    CloseTab(usize),
    SetHomepage(String),
    Engine(EngineEvent),
}

/// A change the UI layer must apply after a message was handled.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UiUpdate {
    AddressBar { text: String },
    WindowTitle { title: String },
    TabStrip { tabs: Vec<TabLabel> },
    Status { message: String },
    FocusAddressBar,
    Notice { heading: String, body: String },
    Exit,
}
