// Shared in-memory port implementations for engine tests
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use sideline_algo::core::stores::{
    LikeStore, MatchNotifier, MatchStore, NotifyError, ProfileStore, SportCatalog, StoreError,
};
use sideline_algo::models::{Like, MatchRecord, Profile, SkillLevel, Sport, SportEntry};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

pub const TENNIS: i64 = 1;
pub const RUNNING: i64 = 2;
pub const CLIMBING: i64 = 3;

#[derive(Default)]
struct StoreState {
    profiles: HashMap<String, Profile>,
    likes: HashSet<(String, String)>,
    matches: Vec<MatchRecord>,
}

/// Single-mutex in-memory backend for every storage port.
///
/// Match creation searches and inserts under one lock, which is the
/// in-memory equivalent of the database's unordered-pair unique constraint.
#[derive(Default)]
pub struct MemoryStore {
    sports: Vec<Sport>,
    state: Mutex<StoreState>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            sports: vec![
                Sport {
                    id: TENNIS,
                    name: "Tennis".to_string(),
                },
                Sport {
                    id: RUNNING,
                    name: "Running".to_string(),
                },
                Sport {
                    id: CLIMBING,
                    name: "Climbing".to_string(),
                },
            ],
            state: Mutex::new(StoreState::default()),
        })
    }

    pub fn insert_profile(&self, profile: Profile) {
        let mut state = self.state.lock().unwrap();
        state.profiles.insert(profile.user_id.clone(), profile);
    }

    pub fn like_count(&self) -> usize {
        self.state.lock().unwrap().likes.len()
    }

    pub fn match_count(&self) -> usize {
        self.state.lock().unwrap().matches.len()
    }

    pub fn seed_like(&self, liker_id: &str, liked_id: &str) {
        let mut state = self.state.lock().unwrap();
        state
            .likes
            .insert((liker_id.to_string(), liked_id.to_string()));
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn get_by_user_id(&self, user_id: &str) -> Result<Option<Profile>, StoreError> {
        Ok(self.state.lock().unwrap().profiles.get(user_id).cloned())
    }

    async fn all_with_sports(&self) -> Result<Vec<Profile>, StoreError> {
        let state = self.state.lock().unwrap();
        let mut profiles: Vec<Profile> = state
            .profiles
            .values()
            .filter(|p| p.has_sports())
            .cloned()
            .collect();
        profiles.sort_by(|a, b| a.user_id.cmp(&b.user_id));
        Ok(profiles)
    }
}

#[async_trait]
impl SportCatalog for MemoryStore {
    async fn all_sports(&self) -> Result<Vec<Sport>, StoreError> {
        Ok(self.sports.clone())
    }
}

#[async_trait]
impl LikeStore for MemoryStore {
    async fn exists(&self, liker_id: &str, liked_id: &str) -> Result<bool, StoreError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .likes
            .contains(&(liker_id.to_string(), liked_id.to_string())))
    }

    async fn create(&self, like: &Like) -> Result<bool, StoreError> {
        let mut state = self.state.lock().unwrap();
        Ok(state
            .likes
            .insert((like.liker_id.clone(), like.liked_id.clone())))
    }

    async fn liked_user_ids(&self, liker_id: &str) -> Result<Vec<String>, StoreError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .likes
            .iter()
            .filter(|(liker, _)| liker == liker_id)
            .map(|(_, liked)| liked.clone())
            .collect())
    }
}

#[async_trait]
impl MatchStore for MemoryStore {
    async fn exists(&self, user_a: &str, user_b: &str) -> Result<bool, StoreError> {
        let (a, b) = MatchRecord::canonical_pair(user_a, user_b);
        let state = self.state.lock().unwrap();
        Ok(state
            .matches
            .iter()
            .any(|m| m.user_a == a && m.user_b == b))
    }

    async fn create(&self, user_a: &str, user_b: &str) -> Result<MatchRecord, StoreError> {
        let (a, b) = MatchRecord::canonical_pair(user_a, user_b);
        let mut state = self.state.lock().unwrap();

        if let Some(existing) = state
            .matches
            .iter()
            .find(|m| m.user_a == a && m.user_b == b)
        {
            return Ok(existing.clone());
        }

        let record = MatchRecord {
            match_id: Uuid::new_v4().to_string(),
            user_a: a,
            user_b: b,
            matched_at: Utc::now(),
        };
        state.matches.push(record.clone());
        Ok(record)
    }

    async fn matches_for(&self, user_id: &str) -> Result<Vec<MatchRecord>, StoreError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .matches
            .iter()
            .filter(|m| m.user_a == user_id || m.user_b == user_id)
            .cloned()
            .collect())
    }

    async fn matched_user_ids(&self, user_id: &str) -> Result<Vec<String>, StoreError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .matches
            .iter()
            .filter_map(|m| m.other_user(user_id).map(String::from))
            .collect())
    }
}

/// Notifier that records every delivery for later assertions
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<SentNotification>>,
}

#[derive(Debug, Clone)]
pub struct SentNotification {
    pub to_user_id: String,
    pub matched_first_name: String,
    pub match_id: String,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn sent(&self) -> Vec<SentNotification> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MatchNotifier for RecordingNotifier {
    async fn send_match_notification(
        &self,
        to_user_id: &str,
        matched_first_name: &str,
        match_id: &str,
    ) -> Result<(), NotifyError> {
        self.sent.lock().unwrap().push(SentNotification {
            to_user_id: to_user_id.to_string(),
            matched_first_name: matched_first_name.to_string(),
            match_id: match_id.to_string(),
        });
        Ok(())
    }
}

/// Notifier that always fails, for the best-effort delivery tests
pub struct FailingNotifier;

#[async_trait]
impl MatchNotifier for FailingNotifier {
    async fn send_match_notification(
        &self,
        _to_user_id: &str,
        _matched_first_name: &str,
        _match_id: &str,
    ) -> Result<(), NotifyError> {
        Err(NotifyError::Delivery("gateway unreachable".to_string()))
    }
}

pub fn entry(sport_id: i64, level: SkillLevel) -> SportEntry {
    SportEntry { sport_id, level }
}

pub fn profile(id: &str, lat: f64, lon: f64, sports: Vec<SportEntry>) -> Profile {
    Profile {
        user_id: id.to_string(),
        first_name: format!("User {}", id),
        age: 30,
        gender: "female".to_string(),
        city: "Turin".to_string(),
        latitude: lat,
        longitude: lon,
        bio: String::new(),
        photo_url: None,
        max_distance_km: 25,
        sports,
        created_at: Some(Utc::now()),
    }
}

/// Give spawned notification tasks a chance to run, then return what was
/// delivered so far.
pub async fn settle_notifications(notifier: &RecordingNotifier, expected: usize) -> usize {
    for _ in 0..100 {
        if notifier.sent().len() >= expected {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(1)).await;
    }
    notifier.sent().len()
}
