// Core engine exports
pub mod compat;
pub mod discovery;
pub mod distance;
pub mod error;
pub mod stores;
pub mod swipe;

pub use compat::evaluate_candidate;
pub use discovery::{DiscoveryEngine, FeedPage, FeedQuery, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use distance::{calculate_bounding_box, haversine_distance, is_within_bounding_box};
pub use error::{DiscoveryError, SwipeError};
pub use stores::{
    LikeStore, MatchNotifier, MatchStore, NotifyError, ProfileStore, SportCatalog, StoreError,
};
pub use swipe::{SwipeEngine, SwipeOutcome};
