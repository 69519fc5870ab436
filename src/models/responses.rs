use crate::models::domain::DiscoveryCard;
use serde::{Deserialize, Serialize};

/// Response for the discovery feed endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryFeedResponse {
    pub cards: Vec<DiscoveryCard>,
    pub page: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for the swipe endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeLikeResponse {
    #[serde(rename = "isMatch")]
    pub is_match: bool,
    #[serde(rename = "matchId", skip_serializing_if = "Option::is_none")]
    pub match_id: Option<String>,
    #[serde(rename = "matchedUserName", skip_serializing_if = "Option::is_none")]
    pub matched_user_name: Option<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
