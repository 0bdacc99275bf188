use super::handlers::{handle_feedback, handle_health, handle_recommendations, handle_refine};
use crate::catalog::store::Catalog;
use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use std::sync::Arc;

/// Read-only state shared by all handlers.
#[derive(Debug)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub api_key: String,
    pub default_top_k: usize,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(handle_health))
        .route("/api/recommendations", post(handle_recommendations))
        .route("/api/recommendations/refine", post(handle_refine))
        .route("/api/feedback", post(handle_feedback))
        .layer(Extension(state))
}
