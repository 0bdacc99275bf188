use crate::catalog::types::CatalogItem;

/// A catalog item paired with its score and tie-break key for one ranking call.
#[derive(Debug, Clone)]
pub struct ScoredItem<'a> {
    pub item: &'a CatalogItem,
    pub score: usize,
    pub tie_break: u64,
}
