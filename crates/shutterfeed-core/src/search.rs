//! Search layer — tag filtering and sorting over the presentation list.
//!
//! Both functions are pure: they consume a list and return a new one, never
//! touching the raw items behind it. The canonical composition (owned by
//! [`FeedStore::view`](crate::store::FeedStore::view)) is filter first, then
//! sort.

use crate::types::{PresentationItem, SortKey};

/// Filter items to those carrying at least one of the queried tags.
///
/// The query is split on spaces into tags exactly as the user typed them —
/// `#` prefixes included — and matched against item tags by exact,
/// case-sensitive string equality. Input order is preserved.
///
/// Callers treat an empty query as "no filter" and skip this function
/// entirely: an empty string splits into an empty tag set, which matches
/// nothing.
///
/// Complexity is O(items × tags_per_item × query_tags); the feed is a
/// bounded single-response set, so no index is built.
pub fn search_by_tags(items: Vec<PresentationItem>, query: &str) -> Vec<PresentationItem> {
    let query_tags: Vec<&str> = query.split(' ').filter(|tag| !tag.is_empty()).collect();

    items
        .into_iter()
        .filter(|item| item.tags.iter().any(|tag| query_tags.contains(&tag.as_str())))
        .collect()
}

/// Sort items by the given key.
///
/// `Default` leaves the input order untouched. Title sorts compare by code
/// point, with a missing title ordering as the empty string; date sorts are
/// chronological. All sorts are stable, so items with equal keys keep their
/// input order.
pub fn sort_items(mut items: Vec<PresentationItem>, key: SortKey) -> Vec<PresentationItem> {
    match key {
        SortKey::Default => {}
        SortKey::TitleAsc => items.sort_by(|a, b| title_key(a).cmp(title_key(b))),
        SortKey::TitleDesc => items.sort_by(|a, b| title_key(b).cmp(title_key(a))),
        SortKey::DateAsc => items.sort_by(|a, b| a.date_taken.cmp(&b.date_taken)),
        SortKey::DateDesc => items.sort_by(|a, b| b.date_taken.cmp(&a.date_taken)),
    }
    items
}

fn title_key(item: &PresentationItem) -> &str {
    item.title.as_deref().unwrap_or("")
}
