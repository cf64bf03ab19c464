use serde::{Deserialize, Serialize};
use types::ids::MatchId;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMatchResultQuery {
    pub match_id: i32,
    pub match_event: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayMatchResultQuery {
    pub match_id: i32,
}

/// Body returned for rejected events
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_id: Option<MatchId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<char>,
    /// `None` serializes as `null` when a cancel found nothing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found: Option<Option<char>>,
}
