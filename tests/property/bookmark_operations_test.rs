//! Property-based tests for the bookmark set.
//!
//! Adding any sequence of URLs stores each distinct URL exactly once, in
//! first-seen order.

use std::collections::HashSet;

use proptest::prelude::*;
use quantum_browser::managers::bookmark_manager::{
    BookmarkManager, BookmarkManagerTrait, BookmarkOutcome,
};

fn arb_url() -> impl Strategy<Value = String> {
    "https://[a-c]{1,2}\\.test(/[a-c]{0,2})?"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn each_url_is_stored_once(urls in prop::collection::vec(arb_url(), 0..40)) {
        let mut manager = BookmarkManager::new();
        let mut seen = HashSet::new();
        let mut order = Vec::new();

        for url in &urls {
            let outcome = manager.add_bookmark(url, "Title");
            if seen.insert(url.clone()) {
                order.push(url.clone());
                prop_assert_eq!(outcome, BookmarkOutcome::Added { title: "Title".to_string() });
            } else {
                prop_assert_eq!(outcome, BookmarkOutcome::AlreadyBookmarked);
            }
            prop_assert!(manager.is_bookmarked(url));
        }

        prop_assert_eq!(manager.bookmark_count(), seen.len());
        prop_assert_eq!(manager.list_bookmarks(), order.as_slice());
    }
}
