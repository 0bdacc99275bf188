use super::keywords::{normalize_query, score};
use super::types::ScoredItem;
use crate::catalog::types::CatalogItem;
use rand::Rng;
use std::cmp::Reverse;

/// Returns at most `k` items of `catalog`, best keyword match first.
///
/// Items with equal scores are ordered by a key drawn from `rng`, so repeated
/// calls with the same query may order ties differently. A seeded `rng` makes
/// the result reproducible.
pub fn rank<R>(catalog: &[CatalogItem], query: &str, k: usize, rng: &mut R) -> Vec<CatalogItem>
where
    R: Rng + ?Sized,
{
    if k == 0 || catalog.is_empty() {
        return Vec::new();
    }

    let query = normalize_query(query);
    let mut scored: Vec<ScoredItem<'_>> = catalog
        .iter()
        .map(|item| ScoredItem {
            item,
            score: score(item, &query),
            tie_break: rng.gen(),
        })
        .collect();

    scored.sort_by_key(|s| (Reverse(s.score), s.tie_break));

    tracing::debug!(
        "Ranked {} items for query {:?}, top score {}",
        scored.len(),
        query,
        scored.first().map(|s| s.score).unwrap_or(0)
    );

    scored
        .into_iter()
        .take(k)
        .map(|s| s.item.clone())
        .collect()
}
