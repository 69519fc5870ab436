use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to build a discovery feed page
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DiscoveryFeedRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[serde(alias = "sport_id", rename = "sportId", default)]
    pub sport_id: Option<i64>,
    #[serde(alias = "page_size", rename = "pageSize", default = "default_page_size")]
    pub page_size: u32,
    #[validate(range(min = 1))]
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_page_size() -> u32 {
    20
}

fn default_page() -> u32 {
    1
}

/// Request to record a like swipe
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SwipeLikeRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "liked_user_id", rename = "likedUserId")]
    pub liked_user_id: String,
}
