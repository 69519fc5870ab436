use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ordinal skill scale for a sport.
///
/// The ranks are what level-gap comparison works on:
/// beginner=0, intermediate=1, advanced=2, competitive=3, expert=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "skill_level", rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Competitive,
    Expert,
}

impl SkillLevel {
    pub fn rank(self) -> u8 {
        match self {
            SkillLevel::Beginner => 0,
            SkillLevel::Intermediate => 1,
            SkillLevel::Advanced => 2,
            SkillLevel::Competitive => 3,
            SkillLevel::Expert => 4,
        }
    }

    /// Absolute rank difference between two levels.
    pub fn gap(self, other: SkillLevel) -> u8 {
        self.rank().abs_diff(other.rank())
    }
}

/// A sport a user plays, with their self-assessed level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SportEntry {
    #[serde(rename = "sportId")]
    pub sport_id: i64,
    pub level: SkillLevel,
}

/// User profile with demographic, location and sport data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    pub age: u8,
    pub gender: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub bio: String,
    #[serde(rename = "photoUrl", default)]
    pub photo_url: Option<String>,
    #[serde(rename = "maxDistanceKm")]
    pub max_distance_km: u16,
    #[serde(default)]
    pub sports: Vec<SportEntry>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Profile {
    /// A profile without any sport entries never takes part in discovery.
    pub fn has_sports(&self) -> bool {
        !self.sports.is_empty()
    }

    /// Level for a given sport, if the user plays it.
    pub fn level_for(&self, sport_id: i64) -> Option<SkillLevel> {
        self.sports
            .iter()
            .find(|s| s.sport_id == sport_id)
            .map(|s| s.level)
    }
}

/// Sport reference entity, loaded in bulk and looked up by id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sport {
    pub id: i64,
    pub name: String,
}

/// Directed like edge: liker expressed interest in liked
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Like {
    #[serde(rename = "likerId")]
    pub liker_id: String,
    #[serde(rename = "likedId")]
    pub liked_id: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Mutual match between two users.
///
/// Stored canonically with `user_a < user_b` so the unordered pair has
/// exactly one representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(rename = "matchId")]
    pub match_id: String,
    #[serde(rename = "userA")]
    pub user_a: String,
    #[serde(rename = "userB")]
    pub user_b: String,
    #[serde(rename = "matchedAt")]
    pub matched_at: DateTime<Utc>,
}

impl MatchRecord {
    /// Order a pair of user ids canonically.
    pub fn canonical_pair(a: &str, b: &str) -> (String, String) {
        if a <= b {
            (a.to_string(), b.to_string())
        } else {
            (b.to_string(), a.to_string())
        }
    }

    /// Given one side of the match, return the other user's id.
    pub fn other_user(&self, user_id: &str) -> Option<&str> {
        if self.user_a == user_id {
            Some(&self.user_b)
        } else if self.user_b == user_id {
            Some(&self.user_a)
        } else {
            None
        }
    }
}

/// Sport entry on a discovery card, with the resolved display name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardSport {
    #[serde(rename = "sportId")]
    pub sport_id: i64,
    #[serde(rename = "sportName")]
    pub sport_name: String,
    pub level: SkillLevel,
}

/// Denormalized candidate projection returned by the discovery feed.
/// Built fresh per request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryCard {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    pub age: u8,
    pub city: String,
    #[serde(rename = "photoUrl")]
    pub photo_url: Option<String>,
    pub bio: String,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
    pub sports: Vec<CardSport>,
}

/// Geospatial bounding box
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}
