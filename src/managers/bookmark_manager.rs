//! Bookmark Manager for Quantum Browser.
//!
//! Keeps bookmarked URLs in memory. A URL can be bookmarked once; adding it
//! again is reported as an outcome, not an error. There is no removal.

use std::collections::HashSet;

use tracing::info;

/// What happened when the user asked to bookmark a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookmarkOutcome {
    /// The URL was new and has been stored. Carries the page title.
    Added { title: String },
    /// The URL was already in the set; nothing changed.
    AlreadyBookmarked,
}

/// Trait defining bookmark operations.
pub trait BookmarkManagerTrait {
    fn add_bookmark(&mut self, url: &str, title: &str) -> BookmarkOutcome;
    fn is_bookmarked(&self, url: &str) -> bool;
    fn list_bookmarks(&self) -> &[String];
    fn bookmark_count(&self) -> usize;
}

/// In-memory bookmark set. Insertion order is kept only for display.
#[derive(Debug, Default)]
pub struct BookmarkManager {
    urls: Vec<String>,
    index: HashSet<String>,
}

impl BookmarkManager {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookmarkManagerTrait for BookmarkManager {
    fn add_bookmark(&mut self, url: &str, title: &str) -> BookmarkOutcome {
        if !self.index.insert(url.to_string()) {
            return BookmarkOutcome::AlreadyBookmarked;
        }
        self.urls.push(url.to_string());
        info!(url, title, "bookmark added");
        BookmarkOutcome::Added {
            title: title.to_string(),
        }
    }

    fn is_bookmarked(&self, url: &str) -> bool {
        self.index.contains(url)
    }

    fn list_bookmarks(&self) -> &[String] {
        &self.urls
    }

    fn bookmark_count(&self) -> usize {
        self.urls.len()
    }
}
