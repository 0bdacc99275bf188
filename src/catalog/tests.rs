//! Catalog Module Tests
//!
//! ## Test Scopes
//! - **Sample catalog**: Checks the built-in items are present and well formed.
//! - **File loading**: Reads catalogs from JSON files, including failure cases.
//! - **Invariants**: Duplicate items are rejected.

#[cfg(test)]
mod tests {
    use crate::catalog::store::Catalog;
    use crate::catalog::types::CatalogItem;
    use std::io::Write;
    use std::path::Path;

    fn write_catalog_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write temp file");
        file
    }

    // ============================================================
    // SAMPLE CATALOG
    // ============================================================

    #[test]
    fn test_sample_catalog_has_six_items() {
        let catalog = Catalog::sample();

        assert_eq!(catalog.len(), 6);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.items()[0].title, "Portable Espresso Maker");
        assert_eq!(catalog.items()[5].title, "Budget Pour-Over Kit");
    }

    #[test]
    fn test_sample_catalog_has_no_duplicates() {
        let items = Catalog::sample().items().to_vec();

        assert!(Catalog::from_items(items).is_ok());
    }

    #[test]
    fn test_sample_items_have_links_and_tags() {
        for item in Catalog::sample().items() {
            assert!(item.source_link.starts_with("https://example.com/"));
            assert_eq!(item.tags.len(), 3, "{} should have three tags", item.title);
        }
    }

    #[test]
    fn test_load_without_path_uses_sample() {
        let catalog = Catalog::load(None).unwrap();
        assert_eq!(catalog.items(), Catalog::sample().items());
    }

    // ============================================================
    // FILE LOADING
    // ============================================================

    #[test]
    fn test_from_json_file_reads_items() {
        let file = write_catalog_file(
            r#"[
                {"title": "Desk Lamp", "subtitle": "Warm light", "rationale": "Cozy.",
                 "source_link": "https://example.com/lamp", "tags": ["home", "light"]},
                {"title": "Notebook", "subtitle": "Dotted", "rationale": "Handy.",
                 "source_link": "https://example.com/notebook"}
            ]"#,
        );

        let catalog = Catalog::load(Some(file.path())).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.items()[0].tags, vec!["home", "light"]);
        // tags default to empty
        assert!(catalog.items()[1].tags.is_empty());
    }

    #[test]
    fn test_from_json_file_accepts_empty_array() {
        let file = write_catalog_file("[]");

        let catalog = Catalog::from_json_file(file.path()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_from_json_file_missing_file_fails() {
        let result = Catalog::from_json_file(Path::new("/definitely/not/here.json"));

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog file"));
    }

    #[test]
    fn test_from_json_file_malformed_fails() {
        let file = write_catalog_file(r#"{"title": "not an array"}"#);

        let err = Catalog::from_json_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse catalog file"));
    }

    // ============================================================
    // INVARIANTS
    // ============================================================

    #[test]
    fn test_from_items_rejects_duplicates() {
        let item = CatalogItem::new("Same", "Item", "Twice.", "https://example.com/x", &[]);

        let result = Catalog::from_items(vec![item.clone(), item]);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_items_allows_same_title_different_link() {
        let a = CatalogItem::new("Same", "Item", "One.", "https://example.com/a", &[]);
        let b = CatalogItem::new("Same", "Item", "Two.", "https://example.com/b", &[]);

        assert_eq!(Catalog::from_items(vec![a, b]).unwrap().len(), 2);
    }

    #[test]
    fn test_catalog_item_serialization_field_names() {
        let item = Catalog::sample().items()[0].clone();

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["title"], "Portable Espresso Maker");
        assert_eq!(json["source_link"], "https://example.com/espresso");
        assert_eq!(json["tags"], serde_json::json!(["coffee", "travel", "budget"]));
    }
}
