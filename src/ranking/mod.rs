//! Ranking Module
//!
//! Orders catalog items against free-text input by naive keyword overlap.
//!
//! ## Overview
//! Every item contributes a small set of keywords (its title, subtitle and tags,
//! lowercased). An item's score is the number of those keywords found anywhere
//! inside the lowercased query. Items are sorted by score, equal scores are
//! ordered by a random key drawn fresh for each call, and the list is cut to `k`.
//!
//! The random source is passed in by the caller so tests can seed it.
//!
//! ## Submodules
//! - **`keywords`**: Keyword extraction and per-item scoring.
//! - **`engine`**: The `rank` entry point (score, tie-break, sort, truncate).
//! - **`types`**: The transient `ScoredItem` used while sorting.

pub mod engine;
pub mod keywords;
pub mod types;
