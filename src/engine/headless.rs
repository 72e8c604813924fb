//! In-memory engine used by the console demo and the test suite.
//!
//! A headless view keeps its own back/forward stack and reports every
//! navigation through a shared [`EventQueue`], the way a real engine reports
//! asynchronously from its own threads.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::debug;

use super::{EngineView, ViewFactory};
use crate::types::event::EngineEvent;

/// Shared sink of engine notifications, drained by the update loop.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: Arc<Mutex<Vec<EngineEvent>>>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: EngineEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }

    /// Drain all pending events.
    pub fn drain(&self) -> Vec<EngineEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(_) => Vec::new(),
        }
    }
}

/// Factory for [`HeadlessView`]s sharing one event queue and page-title table.
#[derive(Debug, Clone, Default)]
pub struct HeadlessFactory {
    queue: EventQueue,
    titles: Arc<HashMap<String, String>>,
}

impl HeadlessFactory {
    pub fn new(queue: EventQueue) -> Self {
        Self {
            queue,
            titles: Arc::new(HashMap::new()),
        }
    }

    /// Registers the document title the fake engine reports for `url`.
    pub fn with_title(mut self, url: &str, title: &str) -> Self {
        Arc::make_mut(&mut self.titles).insert(url.to_string(), title.to_string());
        self
    }
}

impl ViewFactory for HeadlessFactory {
    type View = HeadlessView;

    fn create_view(&mut self, tab_id: &str, url: &str) -> Result<HeadlessView, String> {
        let mut view = HeadlessView {
            tab_id: tab_id.to_string(),
            entries: Vec::new(),
            index: 0,
            reloads: 0,
            visible: true,
            queue: self.queue.clone(),
            titles: Arc::clone(&self.titles),
        };
        view.load(url);
        Ok(view)
    }
}

/// A fake engine view that records navigation without rendering anything.
#[derive(Debug)]
pub struct HeadlessView {
    tab_id: String,
    entries: Vec<String>,
    index: usize,
    reloads: usize,
    visible: bool,
    queue: EventQueue,
    titles: Arc<HashMap<String, String>>,
}

impl HeadlessView {
    pub fn reload_count(&self) -> usize {
        self.reloads
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// URLs in this view's back/forward list.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    fn report_load(&self) {
        let tab_id = self.tab_id.clone();
        self.queue.push(EngineEvent::UrlChanged {
            tab_id: tab_id.clone(),
            url: self.current_url(),
        });
        self.queue.push(EngineEvent::LoadProgress {
            tab_id: tab_id.clone(),
            percent: 50,
        });
        self.queue.push(EngineEvent::LoadProgress {
            tab_id: tab_id.clone(),
            percent: 100,
        });
        self.queue.push(EngineEvent::LoadFinished { tab_id });
    }
}

impl EngineView for HeadlessView {
    fn load(&mut self, url: &str) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.index + 1);
        }
        self.entries.push(url.to_string());
        self.index = self.entries.len() - 1;
        debug!(tab = %self.tab_id, url, "headless load");
        self.report_load();
    }

    fn back(&mut self) {
        if self.index > 0 {
            self.index -= 1;
            self.report_load();
        }
    }

    fn forward(&mut self) {
        if self.index + 1 < self.entries.len() {
            self.index += 1;
            self.report_load();
        }
    }

    fn reload(&mut self) {
        self.reloads += 1;
        self.report_load();
    }

    fn current_url(&self) -> String {
        self.entries.get(self.index).cloned().unwrap_or_default()
    }

    fn current_title(&self) -> String {
        let url = self.current_url();
        if let Some(title) = self.titles.get(&url) {
            return title.clone();
        }
        url.trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_start_matches("www.")
            .split('/')
            .next()
            .unwrap_or_default()
            .to_string()
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
