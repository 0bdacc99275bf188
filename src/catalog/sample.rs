use super::types::CatalogItem;

/// The items served when no catalog file is configured.
pub fn sample_items() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new(
            "Portable Espresso Maker",
            "Compact under $150",
            "Matches value: budget + craftsmanship.",
            "https://example.com/espresso",
            &["coffee", "travel", "budget"],
        ),
        CatalogItem::new(
            "Trail Running Shoes",
            "Neutral support, rugged outsole",
            "Durable outdoor gear favored by similar users.",
            "https://example.com/shoes",
            &["running", "outdoors", "durable"],
        ),
        CatalogItem::new(
            "Hi-Fi Starter Amp",
            "Clean 40 W per channel",
            "Good for craftsmanship & audio fidelity.",
            "https://example.com/amp",
            &["audio", "hi-fi", "craftsmanship"],
        ),
        CatalogItem::new(
            "Steel Drum Essentials",
            "Afro-Caribbean playlist",
            "Aligns with island & jazz tastes.",
            "https://example.com/playlist",
            &["music", "island", "jazz"],
        ),
        CatalogItem::new(
            "Compact Travel Tripod",
            "Lightweight but stable",
            "Balances portability and quality.",
            "https://example.com/tripod",
            &["photo", "travel", "quality"],
        ),
        CatalogItem::new(
            "Budget Pour-Over Kit",
            "Beginner friendly",
            "Great price-to-flavor starter kit.",
            "https://example.com/pourover",
            &["coffee", "budget", "beginner"],
        ),
    ]
}
