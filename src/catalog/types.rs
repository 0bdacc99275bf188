use serde::{Deserialize, Serialize};

/// A single recommendable item.
///
/// Serialized as-is into the `items` array of recommendation responses.
/// `tags` keeps the order it was declared in, but scoring treats it as a set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogItem {
    pub title: String,
    pub subtitle: String,
    pub rationale: String,
    pub source_link: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CatalogItem {
    pub fn new(
        title: &str,
        subtitle: &str,
        rationale: &str,
        source_link: &str,
        tags: &[&str],
    ) -> Self {
        Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            rationale: rationale.to_string(),
            source_link: source_link.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}
