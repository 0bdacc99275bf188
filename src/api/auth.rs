use super::error::ApiError;
use axum::http::HeaderMap;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Requires the `x-api-key` header to equal `expected` exactly.
pub fn require_api_key(headers: &HeaderMap, expected: &str) -> Result<(), ApiError> {
    match headers.get(API_KEY_HEADER) {
        Some(value) if value.as_bytes() == expected.as_bytes() => Ok(()),
        Some(_) => {
            tracing::warn!("Rejected request with invalid API key");
            Err(ApiError::Unauthorized)
        }
        None => {
            tracing::warn!("Rejected request without {} header", API_KEY_HEADER);
            Err(ApiError::Unauthorized)
        }
    }
}
