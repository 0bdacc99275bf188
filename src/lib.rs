//! Fidara Recommendation Stub Library
//!
//! A placeholder recommendation backend used for integration testing of client
//! applications. It ranks a small fixed catalog against free-text input by
//! naive keyword overlap and serves the result over HTTP.
//!
//! ## Architecture Modules
//! - **`catalog`**: The fixed item catalog, built once at startup and shared read-only.
//! - **`ranking`**: Keyword-overlap scoring with randomized tie-breaking.
//! - **`api`**: Axum handlers, request/response types and the shared-secret check.
//! - **`config`**: Environment-driven process configuration.
//! - **`telemetry`**: Tracing subscriber setup.

pub mod api;
pub mod catalog;
pub mod config;
pub mod ranking;
pub mod telemetry;
