//! History Manager for Quantum Browser.
//!
//! An append-only, in-memory log of every URL the user asked to navigate to.
//! Entries are never deduplicated or removed and are lost on exit.

use tracing::debug;

/// Trait defining history operations.
pub trait HistoryManagerTrait {
    fn record_visit(&mut self, url: &str);
    fn entries(&self) -> &[String];
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

/// In-memory history log.
#[derive(Debug, Default)]
pub struct HistoryManager {
    entries: Vec<String>,
}

impl HistoryManager {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryManagerTrait for HistoryManager {
    fn record_visit(&mut self, url: &str) {
        self.entries.push(url.to_string());
        debug!(url, total = self.entries.len(), "history entry recorded");
    }

    /// All recorded URLs, oldest first.
    fn entries(&self) -> &[String] {
        &self.entries
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
