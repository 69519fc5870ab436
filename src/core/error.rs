use crate::core::stores::StoreError;
use thiserror::Error;

/// Errors from the discovery feed operation
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("profile not found for user {0}")]
    ViewerNotFound(String),

    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}

/// Errors from the swipe operation
#[derive(Debug, Error)]
pub enum SwipeError {
    #[error("cannot like yourself")]
    SelfLike,

    #[error("liked user not found: {0}")]
    LikedUserNotFound(String),

    #[error("already liked this user")]
    AlreadyLiked,

    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}
