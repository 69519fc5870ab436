use crate::models::{Like, MatchRecord, Profile, Sport};
use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by the storage ports
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Errors surfaced by the notification port
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notification delivery failed: {0}")]
    Delivery(String),
}

/// Profile storage port
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get_by_user_id(&self, user_id: &str) -> Result<Option<Profile>, StoreError>;

    /// Bulk-load the candidate pool: every profile carrying at least one
    /// sport entry, sports included, in a single round trip.
    async fn all_with_sports(&self) -> Result<Vec<Profile>, StoreError>;
}

/// Sport reference-data port
#[async_trait]
pub trait SportCatalog: Send + Sync {
    async fn all_sports(&self) -> Result<Vec<Sport>, StoreError>;
}

/// Like storage port
#[async_trait]
pub trait LikeStore: Send + Sync {
    async fn exists(&self, liker_id: &str, liked_id: &str) -> Result<bool, StoreError>;

    /// Persist a like. Returns false when the ordered pair already has a
    /// row, so a lost duplicate race is reported instead of erroring.
    async fn create(&self, like: &Like) -> Result<bool, StoreError>;

    async fn liked_user_ids(&self, liker_id: &str) -> Result<Vec<String>, StoreError>;
}

/// Match storage port.
///
/// The backend must enforce uniqueness on the canonicalized unordered pair;
/// `create` treats a uniqueness violation as "match already exists" and
/// returns the surviving row, making the operation idempotent under retry.
#[async_trait]
pub trait MatchStore: Send + Sync {
    async fn exists(&self, user_a: &str, user_b: &str) -> Result<bool, StoreError>;

    async fn create(&self, user_a: &str, user_b: &str) -> Result<MatchRecord, StoreError>;

    async fn matches_for(&self, user_id: &str) -> Result<Vec<MatchRecord>, StoreError>;

    async fn matched_user_ids(&self, user_id: &str) -> Result<Vec<String>, StoreError>;
}

/// Push-notification port
#[async_trait]
pub trait MatchNotifier: Send + Sync {
    async fn send_match_notification(
        &self,
        to_user_id: &str,
        matched_first_name: &str,
        match_id: &str,
    ) -> Result<(), NotifyError>;
}
