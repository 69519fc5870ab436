use crate::core::error::SwipeError;
use crate::core::stores::{LikeStore, MatchNotifier, MatchStore, ProfileStore};
use crate::models::{Like, MatchRecord};
use chrono::Utc;
use std::sync::Arc;
use tracing::warn;

/// Result of a like swipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwipeOutcome {
    pub is_match: bool,
    pub match_id: Option<String>,
    pub matched_user_name: Option<String>,
}

impl SwipeOutcome {
    fn liked_only() -> Self {
        Self {
            is_match: false,
            match_id: None,
            matched_user_name: None,
        }
    }
}

/// Records one-directional likes and promotes them to matches the moment
/// interest turns out to be mutual.
///
/// For an ordered pair the states are NoInteraction, Liked, Matched. The
/// Liked -> Matched transition races its mirror image when both users swipe
/// at once; the match store's canonical-pair uniqueness plus its
/// conflict-tolerant insert keep that race down to a single match row.
pub struct SwipeEngine {
    profiles: Arc<dyn ProfileStore>,
    likes: Arc<dyn LikeStore>,
    matches: Arc<dyn MatchStore>,
    notifier: Arc<dyn MatchNotifier>,
}

impl SwipeEngine {
    pub fn new(
        profiles: Arc<dyn ProfileStore>,
        likes: Arc<dyn LikeStore>,
        matches: Arc<dyn MatchStore>,
        notifier: Arc<dyn MatchNotifier>,
    ) -> Self {
        Self {
            profiles,
            likes,
            matches,
            notifier,
        }
    }

    /// Record that `user_id` liked `liked_user_id`.
    ///
    /// Rejected without any write when the swipe targets the swiper
    /// themselves, the liked user has no profile, or the like already
    /// exists. Returns `is_match = true` with the match id and the liked
    /// user's first name when the reciprocal like is already present.
    pub async fn swipe_like(
        &self,
        user_id: &str,
        liked_user_id: &str,
    ) -> Result<SwipeOutcome, SwipeError> {
        if user_id == liked_user_id {
            return Err(SwipeError::SelfLike);
        }

        let liked_profile = self
            .profiles
            .get_by_user_id(liked_user_id)
            .await?
            .ok_or_else(|| SwipeError::LikedUserNotFound(liked_user_id.to_string()))?;

        if self.likes.exists(user_id, liked_user_id).await? {
            return Err(SwipeError::AlreadyLiked);
        }

        let like = Like {
            liker_id: user_id.to_string(),
            liked_id: liked_user_id.to_string(),
            created_at: Utc::now(),
        };
        if !self.likes.create(&like).await? {
            // Duplicate slipped in between the existence check and the insert
            return Err(SwipeError::AlreadyLiked);
        }

        if !self.likes.exists(liked_user_id, user_id).await? {
            return Ok(SwipeOutcome::liked_only());
        }

        // Interest is mutual. The create is idempotent under the unordered
        // pair constraint, so the mirror swipe racing us lands on this row.
        let record = self.matches.create(user_id, liked_user_id).await?;

        tracing::info!(
            "Match {} created between {} and {}",
            record.match_id,
            record.user_a,
            record.user_b
        );

        self.spawn_match_notification(&record, user_id, liked_user_id);

        Ok(SwipeOutcome {
            is_match: true,
            match_id: Some(record.match_id),
            matched_user_name: Some(liked_profile.first_name),
        })
    }

    /// Notify the other party that they were matched, off the request path.
    /// Delivery failure is logged and never rolls back the match.
    fn spawn_match_notification(&self, record: &MatchRecord, swiper_id: &str, liked_user_id: &str) {
        let profiles = self.profiles.clone();
        let notifier = self.notifier.clone();
        let match_id = record.match_id.clone();
        let swiper_id = swiper_id.to_string();
        let to_user_id = liked_user_id.to_string();

        tokio::spawn(async move {
            let first_name = match profiles.get_by_user_id(&swiper_id).await {
                Ok(Some(profile)) => profile.first_name,
                Ok(None) => {
                    warn!(
                        "Skipping match notification for {}: swiper {} has no profile",
                        match_id, swiper_id
                    );
                    return;
                }
                Err(e) => {
                    warn!(
                        "Skipping match notification for {}: profile lookup failed: {}",
                        match_id, e
                    );
                    return;
                }
            };

            if let Err(e) = notifier
                .send_match_notification(&to_user_id, &first_name, &match_id)
                .await
            {
                warn!("Failed to deliver match notification for {}: {}", match_id, e);
            }
        });
    }
}
