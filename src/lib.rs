//! Sideline Algo - Discovery and matching service for the Sideline
//! sports-partner app
//!
//! This library provides the discovery feed and the swipe-reciprocity
//! protocol: compatible nearby partners are ranked by distance, and two
//! one-directional likes become exactly one match.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{
    distance::{calculate_bounding_box, haversine_distance},
    DiscoveryEngine, SwipeEngine, SwipeOutcome,
};
pub use models::{DiscoveryCard, MatchRecord, Profile, SkillLevel, Sport};
