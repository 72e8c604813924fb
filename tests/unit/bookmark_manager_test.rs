use quantum_browser::managers::bookmark_manager::{
    BookmarkManager, BookmarkManagerTrait, BookmarkOutcome,
};

#[test]
fn test_add_new_bookmark_returns_title() {
    let mut mgr = BookmarkManager::new();
    let outcome = mgr.add_bookmark("https://example.com", "Example Domain");
    assert_eq!(
        outcome,
        BookmarkOutcome::Added {
            title: "Example Domain".to_string()
        }
    );
    assert!(mgr.is_bookmarked("https://example.com"));
    assert_eq!(mgr.bookmark_count(), 1);
}

#[test]
fn test_duplicate_url_is_reported_not_stored() {
    let mut mgr = BookmarkManager::new();
    mgr.add_bookmark("https://example.com", "Example");
    let outcome = mgr.add_bookmark("https://example.com", "Other title");
    assert_eq!(outcome, BookmarkOutcome::AlreadyBookmarked);
    assert_eq!(mgr.bookmark_count(), 1);
}

#[test]
fn test_urls_are_compared_exactly() {
    let mut mgr = BookmarkManager::new();
    mgr.add_bookmark("https://example.com", "a");
    mgr.add_bookmark("https://example.com/", "b");
    mgr.add_bookmark("http://example.com", "c");
    assert_eq!(mgr.bookmark_count(), 3);
}

#[test]
fn test_list_keeps_insertion_order() {
    let mut mgr = BookmarkManager::new();
    mgr.add_bookmark("https://b.test", "B");
    mgr.add_bookmark("https://a.test", "A");
    mgr.add_bookmark("https://b.test", "B again");
    assert_eq!(
        mgr.list_bookmarks(),
        &["https://b.test".to_string(), "https://a.test".to_string()]
    );
}

#[test]
fn test_empty_manager() {
    let mgr = BookmarkManager::new();
    assert_eq!(mgr.bookmark_count(), 0);
    assert!(!mgr.is_bookmarked("https://example.com"));
    assert!(mgr.list_bookmarks().is_empty());
}
