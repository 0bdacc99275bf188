//! Catalog Module
//!
//! Holds the fixed set of recommendable items served by the stub.
//!
//! ## Overview
//! The catalog is built once at process start, either from the built-in sample
//! items or from a JSON file, and is then shared read-only between requests.
//! Nothing in the service mutates it after startup.
//!
//! ## Submodules
//! - **`types`**: The `CatalogItem` record.
//! - **`sample`**: The built-in sample items.
//! - **`store`**: The immutable `Catalog` container and file loading.

pub mod sample;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;
