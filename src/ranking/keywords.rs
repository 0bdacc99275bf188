use crate::catalog::types::CatalogItem;
use std::collections::BTreeSet;

/// Lowercases free-text input before matching.
pub fn normalize_query(query: &str) -> String {
    query.to_lowercase()
}

/// Lowercased title, subtitle and tags of an item, as a set.
///
/// Empty strings are dropped so they never count as a match.
pub fn keywords(item: &CatalogItem) -> BTreeSet<String> {
    [item.title.as_str(), item.subtitle.as_str()]
        .into_iter()
        .chain(item.tags.iter().map(String::as_str))
        .map(str::to_lowercase)
        .filter(|kw| !kw.is_empty())
        .collect()
}

/// Counts the item's keywords contained in `normalized_query`.
///
/// This is substring containment of the keyword inside the query, so "travel"
/// matches "traveling". The query must already be lowercased.
pub fn score(item: &CatalogItem, normalized_query: &str) -> usize {
    keywords(item)
        .iter()
        .filter(|kw| normalized_query.contains(kw.as_str()))
        .count()
}
