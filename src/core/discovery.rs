use crate::core::compat::evaluate_candidate;
use crate::core::distance::{calculate_bounding_box, is_within_bounding_box};
use crate::core::error::DiscoveryError;
use crate::core::stores::{LikeStore, MatchStore, ProfileStore, SportCatalog};
use crate::models::DiscoveryCard;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Hard cap on requested page size
pub const MAX_PAGE_SIZE: u32 = 50;

/// Page size used when the client does not ask for one
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Feed query parameters, already decoded from the request
#[derive(Debug, Clone)]
pub struct FeedQuery {
    pub sport_id: Option<i64>,
    pub page_size: u32,
    pub page: u32,
}

impl Default for FeedQuery {
    fn default() -> Self {
        Self {
            sport_id: None,
            page_size: DEFAULT_PAGE_SIZE,
            page: 1,
        }
    }
}

/// One page of the discovery feed
#[derive(Debug)]
pub struct FeedPage {
    pub cards: Vec<DiscoveryCard>,
    pub page: u32,
    pub page_size: u32,
    pub total_candidates: usize,
}

/// Builds the paged, distance-sorted discovery feed for a viewer.
///
/// # Pipeline stages
/// 1. Exclusion-set removal (already liked, already matched, self)
/// 2. Geospatial bounding-box pre-filter
/// 3. Compatibility filtering (distance, sports, levels)
/// 4. Deterministic ordering and pagination
///
/// Pure read: no stored state is mutated, safe to retry and to run
/// concurrently for different viewers.
pub struct DiscoveryEngine {
    profiles: Arc<dyn ProfileStore>,
    likes: Arc<dyn LikeStore>,
    matches: Arc<dyn MatchStore>,
    catalog: Arc<dyn SportCatalog>,
}

impl DiscoveryEngine {
    pub fn new(
        profiles: Arc<dyn ProfileStore>,
        likes: Arc<dyn LikeStore>,
        matches: Arc<dyn MatchStore>,
        catalog: Arc<dyn SportCatalog>,
    ) -> Self {
        Self {
            profiles,
            likes,
            matches,
            catalog,
        }
    }

    /// Build one feed page for the given viewer.
    ///
    /// Fails only when the viewer has no profile; an empty pool or an
    /// out-of-range page simply yields an empty card list.
    pub async fn build_feed(
        &self,
        viewer_id: &str,
        query: &FeedQuery,
    ) -> Result<FeedPage, DiscoveryError> {
        let viewer = self
            .profiles
            .get_by_user_id(viewer_id)
            .await?
            .ok_or_else(|| DiscoveryError::ViewerNotFound(viewer_id.to_string()))?;

        // Users the viewer must never see again: already liked, already
        // matched, and the viewer themselves.
        let liked = self.likes.liked_user_ids(viewer_id).await?;
        let matched = self.matches.matched_user_ids(viewer_id).await?;
        let mut excluded: HashSet<String> = liked.into_iter().chain(matched).collect();
        excluded.insert(viewer.user_id.clone());

        let sport_names: HashMap<i64, String> = self
            .catalog
            .all_sports()
            .await?
            .into_iter()
            .map(|s| (s.id, s.name))
            .collect();

        let pool = self.profiles.all_with_sports().await?;

        let bbox = calculate_bounding_box(
            viewer.latitude,
            viewer.longitude,
            viewer.max_distance_km as f64,
        );

        let candidates: Vec<_> = pool
            .into_iter()
            .filter(|p| !excluded.contains(&p.user_id))
            .collect();
        let total_candidates = candidates.len();

        let mut cards: Vec<DiscoveryCard> = candidates
            .iter()
            .filter(|p| is_within_bounding_box(p.latitude, p.longitude, &bbox))
            .filter_map(|p| evaluate_candidate(&viewer, p, &sport_names, query.sport_id))
            .collect();

        // Ascending distance; candidate id breaks ties so paging is stable
        cards.sort_by(|a, b| {
            a.distance_km
                .partial_cmp(&b.distance_km)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.user_id.cmp(&b.user_id))
        });

        let page_size = query.page_size.clamp(1, MAX_PAGE_SIZE);
        let page = query.page.max(1);
        let cards = paginate(cards, page, page_size);

        Ok(FeedPage {
            cards,
            page,
            page_size,
            total_candidates,
        })
    }
}

fn paginate(cards: Vec<DiscoveryCard>, page: u32, page_size: u32) -> Vec<DiscoveryCard> {
    let skip = (page as usize - 1).saturating_mul(page_size as usize);
    cards
        .into_iter()
        .skip(skip)
        .take(page_size as usize)
        .collect()
}
