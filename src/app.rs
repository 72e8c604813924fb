//! App Core for Quantum Browser.
//!
//! [`App`] owns every piece of shell state and is driven by one message at a
//! time through [`App::handle`]. User input and engine notifications arrive as
//! [`ShellMessage`]s on the UI thread; the returned [`UiUpdate`]s tell the
//! front end what to repaint. Nothing here blocks or touches the engine other
//! than through [`EngineView`](crate::engine::EngineView).

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::engine::ViewFactory;
use crate::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait, BookmarkOutcome};
use crate::managers::history_manager::{HistoryManager, HistoryManagerTrait};
use crate::managers::shortcut_manager::{ShortcutManager, ShortcutManagerTrait};
use crate::managers::tab_manager::{CloseOutcome, TabManager, TabManagerTrait};
use crate::services::address_interpreter::{with_scheme, AddressInterpreter};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::event::{EngineEvent, ShellAction, ShellMessage, UiUpdate};
use crate::types::tab::PLACEHOLDER_TITLE;

/// Internal page holding the home-page setting.
pub const SETTINGS_PAGE_URL: &str = "qb://localhost/settings";

/// Status line shown before any page reports progress.
pub const READY_STATUS: &str = "Ready";

const DOWNLOADS_NOTICE: &str =
    "Downloads feature coming soon!\n\nDownloads will be saved to your Downloads folder.";

/// Status line for an engine-reported load progress value.
pub fn progress_message(percent: u8) -> String {
    if percent < 100 {
        format!("Loading... {}%", percent)
    } else {
        "Done".to_string()
    }
}

/// Central application struct holding all managers and services.
pub struct App<F: ViewFactory> {
    pub tab_manager: TabManager<F>,
    pub history_manager: HistoryManager,
    pub bookmark_manager: BookmarkManager,
    pub shortcut_manager: ShortcutManager,
    pub settings_engine: SettingsEngine,
    interpreter: AddressInterpreter,
    app_name: String,
    address_bar: String,
    window_title: String,
    status: String,
}

impl<F: ViewFactory> App<F> {
    /// Creates the app from already-loaded settings and opens the default tab.
    pub fn new(factory: F, settings_engine: SettingsEngine) -> Result<Self, Box<dyn std::error::Error>> {
        let settings = settings_engine.get_settings().clone();

        let mut tab_manager = TabManager::new(factory, &with_scheme(&settings.general.homepage));
        tab_manager.open_tab()?;

        let mut app = Self {
            tab_manager,
            history_manager: HistoryManager::new(),
            bookmark_manager: BookmarkManager::new(),
            shortcut_manager: ShortcutManager::new(),
            settings_engine,
            interpreter: AddressInterpreter::from_settings(&settings.general),
            app_name: settings.window.title.clone(),
            address_bar: String::new(),
            window_title: settings.window.title.clone(),
            status: READY_STATUS.to_string(),
        };
        app.sync_address_bar();
        info!(home = %settings.general.homepage, "app core ready");
        Ok(app)
    }

    /// Full UI state, sent once the front end is ready to draw.
    pub fn snapshot(&self) -> Vec<UiUpdate> {
        vec![
            UiUpdate::TabStrip {
                tabs: self.tab_manager.tab_labels(),
            },
            UiUpdate::AddressBar {
                text: self.address_bar.clone(),
            },
            UiUpdate::WindowTitle {
                title: self.window_title.clone(),
            },
            UiUpdate::Status {
                message: self.status.clone(),
            },
        ]
    }

    pub fn address_bar(&self) -> &str {
        &self.address_bar
    }

    pub fn window_title(&self) -> &str {
        &self.window_title
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Processes one message and returns the UI updates it caused.
    pub fn handle(&mut self, message: ShellMessage) -> Vec<UiUpdate> {
        debug!(?message, "handle");
        match message {
            ShellMessage::Action(action) => self.perform(action),
            ShellMessage::Key(combo) => match self.shortcut_manager.resolve(&combo) {
                Some(action) => self.perform(action),
                None => Vec::new(),
            },
            ShellMessage::Navigate(input) => self.navigate(&input),
            ShellMessage::SwitchTab(index) => self.switch_tab(index),
            ShellMessage::CloseTab(index) => self.close_tab(index),
            ShellMessage::SetHomepage(url) => self.set_homepage(&url),
            ShellMessage::Engine(event) => self.on_engine_event(&event),
        }
    }

    fn perform(&mut self, action: ShellAction) -> Vec<UiUpdate> {
        match action {
            ShellAction::NewTab => self.open_tab(),
            ShellAction::CloseActiveTab => match self.tab_manager.active_index() {
                Some(index) => self.close_tab(index),
                None => Vec::new(),
            },
            ShellAction::FocusAddressBar => vec![UiUpdate::FocusAddressBar],
            ShellAction::Reload => {
                self.tab_manager.reload();
                Vec::new()
            }
            ShellAction::Back => {
                self.tab_manager.back();
                Vec::new()
            }
            ShellAction::Forward => {
                self.tab_manager.forward();
                Vec::new()
            }
            ShellAction::Home => {
                self.tab_manager.navigate_home();
                Vec::new()
            }
            ShellAction::Bookmark => self.bookmark_active_tab(),
            ShellAction::ShowDownloads => vec![UiUpdate::Notice {
                heading: "Downloads".to_string(),
                body: DOWNLOADS_NOTICE.to_string(),
            }],
            ShellAction::OpenSettings => self.open_tab_at(Some(SETTINGS_PAGE_URL)),
        }
    }

    /// Interprets address-bar text, loads it in the active tab and records it
    /// in history.
    fn navigate(&mut self, input: &str) -> Vec<UiUpdate> {
        let Some(target) = self.interpreter.interpret(input) else {
            return Vec::new();
        };
        let url = target.into_url();
        if self.tab_manager.navigate(&url) {
            self.history_manager.record_visit(&url);
        }
        Vec::new()
    }

    fn open_tab(&mut self) -> Vec<UiUpdate> {
        self.open_tab_at(None)
    }

    /// Opens a tab on the home URL, then optionally sends it to `page`.
    /// Internal pages are not recorded in history.
    fn open_tab_at(&mut self, page: Option<&str>) -> Vec<UiUpdate> {
        match self.tab_manager.open_tab() {
            Ok(_) => {
                if let Some(page) = page {
                    self.tab_manager.navigate(page);
                }
                self.refresh_active()
            }
            Err(e) => {
                warn!(error = %e, "could not open tab");
                vec![UiUpdate::Notice {
                    heading: "New Tab".to_string(),
                    body: e.to_string(),
                }]
            }
        }
    }

    fn close_tab(&mut self, index: usize) -> Vec<UiUpdate> {
        match self.tab_manager.close_tab(index) {
            Ok(CloseOutcome::ExitRequested) => vec![UiUpdate::Exit],
            Ok(CloseOutcome::Closed(_)) => self.refresh_active(),
            Err(e) => {
                warn!(error = %e, "close request ignored");
                Vec::new()
            }
        }
    }

    fn switch_tab(&mut self, index: usize) -> Vec<UiUpdate> {
        match self.tab_manager.set_active(index) {
            Ok(()) => self.refresh_active(),
            Err(e) => {
                warn!(error = %e, "switch request ignored");
                Vec::new()
            }
        }
    }

    fn bookmark_active_tab(&mut self) -> Vec<UiUpdate> {
        let Some(tab) = self.tab_manager.active_tab() else {
            return Vec::new();
        };
        let (url, title) = (tab.url.clone(), tab.title.clone());

        let (heading, body) = match self.bookmark_manager.add_bookmark(&url, &title) {
            BookmarkOutcome::Added { title } => {
                ("Bookmark Added", format!("Added to bookmarks:\n{}", title))
            }
            BookmarkOutcome::AlreadyBookmarked => (
                "Already Bookmarked",
                "This page is already bookmarked".to_string(),
            ),
        };
        vec![UiUpdate::Notice {
            heading: heading.to_string(),
            body,
        }]
    }

    fn set_homepage(&mut self, url: &str) -> Vec<UiUpdate> {
        let url = url.trim();
        if url.is_empty() {
            return Vec::new();
        }
        let url = with_scheme(url);
        match self
            .settings_engine
            .set_value("general.homepage", Value::String(url.clone()))
        {
            Ok(()) => {
                self.tab_manager.set_home_url(&url);
                self.status = "Home page saved".to_string();
                vec![UiUpdate::Status {
                    message: self.status.clone(),
                }]
            }
            Err(e) => {
                warn!(error = %e, "could not save home page");
                vec![UiUpdate::Notice {
                    heading: "Settings".to_string(),
                    body: e.to_string(),
                }]
            }
        }
    }

    fn on_engine_event(&mut self, event: &EngineEvent) -> Vec<UiUpdate> {
        let Some(index) = self.tab_manager.apply_engine_event(event) else {
            debug!(tab = event.tab_id(), "event for closed tab dropped");
            return Vec::new();
        };
        let is_active = self.tab_manager.active_index() == Some(index);

        match event {
            EngineEvent::UrlChanged { .. } if is_active => {
                self.sync_address_bar();
                vec![UiUpdate::AddressBar {
                    text: self.address_bar.clone(),
                }]
            }
            EngineEvent::LoadProgress { percent, .. } if is_active => {
                self.status = progress_message(*percent);
                vec![UiUpdate::Status {
                    message: self.status.clone(),
                }]
            }
            EngineEvent::LoadFinished { .. } | EngineEvent::TitleChanged { .. } => {
                let mut updates = vec![UiUpdate::TabStrip {
                    tabs: self.tab_manager.tab_labels(),
                }];
                if is_active {
                    self.sync_window_title();
                    updates.push(UiUpdate::WindowTitle {
                        title: self.window_title.clone(),
                    });
                }
                updates
            }
            _ => Vec::new(),
        }
    }

    /// Re-reads address bar, window title, status and tab strip from the
    /// active tab.
    fn refresh_active(&mut self) -> Vec<UiUpdate> {
        self.sync_address_bar();
        self.sync_window_title();
        if let Some(tab) = self.tab_manager.active_tab() {
            self.status = progress_message(tab.progress);
        }
        vec![
            UiUpdate::TabStrip {
                tabs: self.tab_manager.tab_labels(),
            },
            UiUpdate::AddressBar {
                text: self.address_bar.clone(),
            },
            UiUpdate::WindowTitle {
                title: self.window_title.clone(),
            },
            UiUpdate::Status {
                message: self.status.clone(),
            },
        ]
    }

    fn sync_address_bar(&mut self) {
        if let Some(tab) = self.tab_manager.active_tab() {
            self.address_bar = tab.url.clone();
        }
    }

    fn sync_window_title(&mut self) {
        self.window_title = match self.tab_manager.active_tab() {
            Some(tab) if tab.title != PLACEHOLDER_TITLE => {
                format!("{} - {}", tab.title, self.app_name)
            }
            _ => self.app_name.clone(),
        };
    }
}
