use crate::catalog::types::CatalogItem;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Caller-owned profile data, passed through without interpretation.
///
/// The service only ever adds marker keys to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentProfile(pub Map<String, Value>);

impl AgentProfile {
    /// Inserts `key`, replacing any value the caller sent under the same key.
    pub fn with_entry(mut self, key: &str, value: Value) -> Self {
        self.0.insert(key.to_string(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

/// Deserializes an `Option` without serde's implicit `None` for a missing field,
/// so the key is required while its value may be `null`.
fn required_nullable<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub user_id: String,
    #[serde(default)]
    pub agent_profile: AgentProfile,
    /// Must be present; `null` is ranked as an empty query.
    #[serde(deserialize_with = "required_nullable")]
    pub request_text: Option<String>,
    pub top_k: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct RefineRequest {
    pub user_id: String,
    #[serde(default)]
    pub agent_profile: AgentProfile,
    pub base_recommendation_id: Option<String>,
    #[serde(deserialize_with = "required_nullable")]
    pub refine_text: Option<String>,
    pub top_k: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub user_id: String,
    pub recommendation_id: Option<String>,
    pub item_index: i64,
    pub signal: String,
    pub comment: Option<String>,
    #[serde(default)]
    pub agent_profile: AgentProfile,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub items: Vec<CatalogItem>,
    pub agent_profile: AgentProfile,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub agent_profile: AgentProfile,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// Body of the 401 response. Malformed request bodies are rejected by axum's
/// `Json` extractor with its own plain-text 4xx.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
