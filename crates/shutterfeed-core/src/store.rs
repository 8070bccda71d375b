//! Store — the owned raw-item list behind wholesale atomic replacement.
//!
//! The store is the single source of truth; consumers read computed views
//! from it, never from the feed directly. The raw list is replaced as a
//! whole on every fetch (empty on a failed fetch), so a reader always
//! observes a complete list — never a partially updated one.

use crate::normalizer;
use crate::search;
use crate::types::{PresentationItem, RawItem, SortKey};
use std::sync::RwLock;

/// In-memory item store. Many readers, whole-list writer.
///
/// The lock is held only for the duration of a clone or a swap, never across
/// an await point. Concurrent `replace` calls may race; last write wins, and
/// every observable state is a complete list.
#[derive(Debug, Default)]
pub struct FeedStore {
    items: RwLock<Vec<RawItem>>,
}

impl FeedStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with items. Mostly useful in tests.
    pub fn with_items(items: Vec<RawItem>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    /// Replace the raw list wholesale. There is no incremental merge; the
    /// previous list is dropped in its entirety.
    pub fn replace(&self, items: Vec<RawItem>) {
        *self.items.write().expect("feed store lock poisoned") = items;
    }

    /// Snapshot of the current raw list.
    pub fn raw_items(&self) -> Vec<RawItem> {
        self.items.read().expect("feed store lock poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.items.read().expect("feed store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Derive the presentation list from the current raw list. Recomputed on
    /// every call; same length and order as the raw list.
    pub fn presentation_items(&self) -> Vec<PresentationItem> {
        self.items
            .read()
            .expect("feed store lock poisoned")
            .iter()
            .map(normalizer::normalize)
            .collect()
    }

    /// The consumer query surface: normalize, filter by tag query, then sort.
    ///
    /// An empty query string means "no filter" — the filter step is skipped
    /// rather than invoked with an empty tag set (which would match
    /// nothing). Filtering always runs before sorting.
    pub fn view(&self, query: &str, key: SortKey) -> Vec<PresentationItem> {
        let items = self.presentation_items();
        let filtered = if query.is_empty() {
            items
        } else {
            search::search_by_tags(items, query)
        };
        search::sort_items(filtered, key)
    }
}
