//! API Module
//!
//! HTTP surface of the recommendation stub.
//!
//! ## Overview
//! Every route except the health check requires the shared secret in the
//! `x-api-key` header. Authorized requests are ranked against the shared
//! catalog, and the caller's `agent_profile` is echoed back with a marker key
//! merged in.
//!
//! ## Routes
//! - `GET  /api/health`
//! - `POST /api/recommendations`
//! - `POST /api/recommendations/refine`
//! - `POST /api/feedback`
//!
//! ## Submodules
//! - **`types`**: Request/response DTOs and the opaque `AgentProfile`.
//! - **`auth`**: Shared-secret header check.
//! - **`error`**: `ApiError` and its HTTP mapping.
//! - **`handlers`**: Axum request handlers.
//! - **`router`**: Route table and shared application state.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod router;
pub mod types;
