use super::auth::require_api_key;
use super::error::ApiError;
use super::router::AppState;
use super::types::{
    FeedbackRequest, FeedbackResponse, HealthResponse, RecommendationRequest,
    RecommendationResponse, RefineRequest,
};
use crate::catalog::types::CatalogItem;
use crate::ranking::engine::rank;
use axum::http::HeaderMap;
use axum::{Extension, Json};
use serde_json::json;
use std::sync::Arc;

pub const RECOMMEND_MARKER: &str = "last_stub_update";
pub const REFINE_MARKER: &str = "last_refine";
pub const FEEDBACK_KEY: &str = "last_feedback";

/// Picks the requested limit, falling back to `default` when it is missing,
/// zero or negative.
pub fn resolve_top_k(requested: Option<i64>, default: usize) -> usize {
    match requested {
        Some(k) if k > 0 => usize::try_from(k).unwrap_or(default),
        _ => default,
    }
}

fn rank_for(state: &AppState, text: Option<&str>, top_k: Option<i64>) -> Vec<CatalogItem> {
    let k = resolve_top_k(top_k, state.default_top_k);
    rank(
        state.catalog.items(),
        text.unwrap_or_default(),
        k,
        &mut rand::thread_rng(),
    )
}

pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

pub async fn handle_recommendations(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<RecommendationRequest>,
) -> Result<Json<RecommendationResponse>, ApiError> {
    require_api_key(&headers, &state.api_key)?;

    let items = rank_for(&state, req.request_text.as_deref(), req.top_k);
    tracing::info!(
        "Recommended {} items for user {}",
        items.len(),
        req.user_id
    );

    Ok(Json(RecommendationResponse {
        items,
        agent_profile: req.agent_profile.with_entry(RECOMMEND_MARKER, json!("now")),
    }))
}

pub async fn handle_refine(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<RefineRequest>,
) -> Result<Json<RecommendationResponse>, ApiError> {
    require_api_key(&headers, &state.api_key)?;

    let items = rank_for(&state, req.refine_text.as_deref(), req.top_k);
    tracing::info!(
        "Refined recommendation {:?} for user {}: {} items",
        req.base_recommendation_id,
        req.user_id,
        items.len()
    );

    Ok(Json(RecommendationResponse {
        items,
        agent_profile: req.agent_profile.with_entry(REFINE_MARKER, json!("now")),
    }))
}

pub async fn handle_feedback(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<FeedbackRequest>,
) -> Result<Json<FeedbackResponse>, ApiError> {
    require_api_key(&headers, &state.api_key)?;

    tracing::info!(
        "Feedback from user {} on {:?} item {}: {} (comment: {})",
        req.user_id,
        req.recommendation_id,
        req.item_index,
        req.signal,
        req.comment.is_some()
    );

    Ok(Json(FeedbackResponse {
        agent_profile: req
            .agent_profile
            .with_entry(FEEDBACK_KEY, json!({ "signal": req.signal })),
    }))
}
