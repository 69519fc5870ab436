// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BoundingBox, CardSport, DiscoveryCard, Like, MatchRecord, Profile, SkillLevel, Sport,
    SportEntry,
};
pub use requests::{DiscoveryFeedRequest, SwipeLikeRequest};
pub use responses::{DiscoveryFeedResponse, ErrorResponse, HealthResponse, SwipeLikeResponse};
