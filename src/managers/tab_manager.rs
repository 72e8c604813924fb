use tracing::{debug, info};
use uuid::Uuid;

use crate::engine::{EngineView, ViewFactory};
use crate::types::errors::TabError;
use crate::types::event::EngineEvent;
use crate::types::tab::{Tab, TabLabel, PLACEHOLDER_TITLE};

/// Result of a close request.
#[derive(Debug, Clone, PartialEq)]
pub enum CloseOutcome {
    /// The tab was removed; the registry still holds at least one tab.
    Closed(Tab),
    /// The tab was the last one. It stays open and the application must exit.
    ExitRequested,
}

/// Trait defining the tab registry interface.
pub trait TabManagerTrait {
    type View: EngineView;

    fn open_tab(&mut self) -> Result<usize, TabError>;
    fn close_tab(&mut self, index: usize) -> Result<CloseOutcome, TabError>;
    fn active_tab(&self) -> Option<&Tab>;
    fn active_index(&self) -> Option<usize>;
    fn active_view(&self) -> Option<&Self::View>;
    fn set_active(&mut self, index: usize) -> Result<(), TabError>;
    fn navigate(&mut self, url: &str) -> bool;
    fn back(&mut self);
    fn forward(&mut self);
    fn reload(&mut self);
    fn navigate_home(&mut self);
    fn apply_engine_event(&mut self, event: &EngineEvent) -> Option<usize>;
    fn get_tab(&self, index: usize) -> Option<&Tab>;
    fn get_all_tabs(&self) -> Vec<&Tab>;
    fn tab_labels(&self) -> Vec<TabLabel>;
    fn tab_count(&self) -> usize;
    fn home_url(&self) -> &str;
    fn set_home_url(&mut self, url: &str);
}

struct TabEntry<V> {
    tab: Tab,
    view: V,
}

/// Ordered tab registry. Each tab owns one engine view created by `F`.
pub struct TabManager<F: ViewFactory> {
    factory: F,
    entries: Vec<TabEntry<F::View>>,
    active: Option<usize>,
    home_url: String,
}

impl<F: ViewFactory> TabManager<F> {
    /// Creates an empty registry. The app core opens the first tab.
    pub fn new(factory: F, home_url: &str) -> Self {
        Self {
            factory,
            entries: Vec::new(),
            active: None,
            home_url: home_url.to_string(),
        }
    }

    fn find_index(&self, tab_id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.tab.id == tab_id)
    }

    fn active_entry_mut(&mut self) -> Option<&mut TabEntry<F::View>> {
        let index = self.active?;
        self.entries.get_mut(index)
    }

    pub fn tab_index(&self, tab_id: &str) -> Option<usize> {
        self.find_index(tab_id)
    }

    pub fn factory_mut(&mut self) -> &mut F {
        &mut self.factory
    }

    /// Mutable access to every view, for layout changes in the UI layer.
    pub fn views_mut(&mut self) -> impl Iterator<Item = &mut F::View> {
        self.entries.iter_mut().map(|e| &mut e.view)
    }
}

impl<F: ViewFactory> TabManagerTrait for TabManager<F> {
    type View = F::View;

    /// Opens a tab on the home URL at the end of the strip and activates it.
    /// Returns the new tab's index.
    fn open_tab(&mut self) -> Result<usize, TabError> {
        let id = Uuid::new_v4().to_string();
        let view = self
            .factory
            .create_view(&id, &self.home_url)
            .map_err(TabError::ViewCreation)?;

        let tab = Tab {
            id: id.clone(),
            url: self.home_url.clone(),
            title: PLACEHOLDER_TITLE.to_string(),
            progress: 0,
        };
        self.entries.push(TabEntry { tab, view });

        let index = self.entries.len() - 1;
        self.set_active(index)?;
        info!(tab = %id, index, "tab opened");
        Ok(index)
    }

    /// Closes the tab at `index`.
    ///
    /// The last tab is never removed: the caller gets
    /// [`CloseOutcome::ExitRequested`] and shuts the application down. When
    /// the active tab is closed, its right neighbour takes over (or the new
    /// last tab if it was rightmost).
    fn close_tab(&mut self, index: usize) -> Result<CloseOutcome, TabError> {
        if index >= self.entries.len() {
            return Err(TabError::InvalidIndex(index));
        }
        if self.entries.len() == 1 {
            info!("last tab closed, exit requested");
            return Ok(CloseOutcome::ExitRequested);
        }

        let removed = self.entries.remove(index);
        let remaining = self.entries.len();

        let active = self.active.unwrap_or(0);
        let new_active = if index < active {
            active - 1
        } else if index == active {
            index.min(remaining - 1)
        } else {
            active
        };
        self.active = Some(new_active);
        if index == active {
            self.entries[new_active].view.set_visible(true);
        }

        info!(tab = %removed.tab.id, index, remaining, "tab closed");
        Ok(CloseOutcome::Closed(removed.tab))
    }

    fn active_tab(&self) -> Option<&Tab> {
        self.active
            .and_then(|i| self.entries.get(i))
            .map(|e| &e.tab)
    }

    fn active_index(&self) -> Option<usize> {
        self.active
    }

    fn active_view(&self) -> Option<&F::View> {
        self.active
            .and_then(|i| self.entries.get(i))
            .map(|e| &e.view)
    }

    /// Makes the tab at `index` the visible, focused one.
    fn set_active(&mut self, index: usize) -> Result<(), TabError> {
        if index >= self.entries.len() {
            return Err(TabError::InvalidIndex(index));
        }
        if let Some(previous) = self.active {
            if previous != index {
                if let Some(entry) = self.entries.get_mut(previous) {
                    entry.view.set_visible(false);
                }
            }
        }
        self.entries[index].view.set_visible(true);
        self.active = Some(index);
        debug!(index, "active tab changed");
        Ok(())
    }

    /// Loads `url` in the active tab. Returns false when no tab is active.
    fn navigate(&mut self, url: &str) -> bool {
        match self.active_entry_mut() {
            Some(entry) => {
                entry.view.load(url);
                debug!(tab = %entry.tab.id, url, "navigate");
                true
            }
            None => false,
        }
    }

    fn back(&mut self) {
        if let Some(entry) = self.active_entry_mut() {
            entry.view.back();
        }
    }

    fn forward(&mut self) {
        if let Some(entry) = self.active_entry_mut() {
            entry.view.forward();
        }
    }

    fn reload(&mut self) {
        if let Some(entry) = self.active_entry_mut() {
            entry.view.reload();
        }
    }

    fn navigate_home(&mut self) {
        let home = self.home_url.clone();
        self.navigate(&home);
    }

    /// Applies an engine notification to the tab it names and returns that
    /// tab's index. Events for tabs that were already closed are dropped.
    fn apply_engine_event(&mut self, event: &EngineEvent) -> Option<usize> {
        let index = self.find_index(event.tab_id())?;
        let entry = &mut self.entries[index];

        match event {
            EngineEvent::UrlChanged { url, .. } => {
                entry.tab.url = url.clone();
            }
            EngineEvent::LoadProgress { percent, .. } => {
                entry.tab.progress = (*percent).min(100);
            }
            EngineEvent::LoadFinished { .. } => {
                let title = entry.view.current_title();
                if !title.is_empty() {
                    entry.tab.title = title;
                }
            }
            EngineEvent::TitleChanged { title, .. } => {
                if !title.is_empty() {
                    entry.tab.title = title.clone();
                }
            }
        }

        Some(index)
    }

    fn get_tab(&self, index: usize) -> Option<&Tab> {
        self.entries.get(index).map(|e| &e.tab)
    }

    fn get_all_tabs(&self) -> Vec<&Tab> {
        self.entries.iter().map(|e| &e.tab).collect()
    }

    fn tab_labels(&self) -> Vec<TabLabel> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| TabLabel {
                id: e.tab.id.clone(),
                title: e.tab.display_title(),
                active: self.active == Some(i),
            })
            .collect()
    }

    fn tab_count(&self) -> usize {
        self.entries.len()
    }

    fn home_url(&self) -> &str {
        &self.home_url
    }

    fn set_home_url(&mut self, url: &str) {
        self.home_url = url.to_string();
    }
}
