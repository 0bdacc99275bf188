use super::sample::sample_items;
use super::types::CatalogItem;
use anyhow::{Context, Result, bail};
use std::collections::HashSet;
use std::path::Path;

/// Immutable, ordered collection of catalog items.
///
/// Built once at startup and shared behind an `Arc`; there is no write path.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate items.
    ///
    /// Two items are duplicates when title, subtitle and source link all match.
    pub fn from_items(items: Vec<CatalogItem>) -> Result<Self> {
        let mut seen = HashSet::new();
        for item in &items {
            let key = (
                item.title.as_str(),
                item.subtitle.as_str(),
                item.source_link.as_str(),
            );
            if !seen.insert(key) {
                bail!("duplicate catalog item: {:?}", item.title);
            }
        }
        Ok(Self { items })
    }

    pub fn sample() -> Self {
        Self {
            items: sample_items(),
        }
    }

    /// Reads a JSON array of catalog items from `path`.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        let items: Vec<CatalogItem> = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse catalog file {}", path.display()))?;
        Self::from_items(items)
    }

    /// Loads from `path` when given, otherwise falls back to the sample items.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let catalog = Self::from_json_file(path)?;
                tracing::info!(
                    "Loaded {} catalog items from {}",
                    catalog.len(),
                    path.display()
                );
                Ok(catalog)
            }
            None => {
                let catalog = Self::sample();
                tracing::info!("Using built-in sample catalog ({} items)", catalog.len());
                Ok(catalog)
            }
        }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
