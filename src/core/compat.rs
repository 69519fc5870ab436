use crate::core::distance::{haversine_distance, round_display_km};
use crate::models::{CardSport, DiscoveryCard, Profile};
use std::collections::HashMap;

/// Maximum acceptable level gap when a sport filter is active.
/// A one-level difference is a workable pairing, two or more is not.
const MAX_LEVEL_GAP: u8 = 1;

/// Decide whether a candidate belongs in the viewer's feed and, if so,
/// project it into a displayable card.
///
/// Returns `None` when the candidate is rejected:
/// - no displayable sports (after the optional sport filter),
/// - further away than the viewer's max-distance preference,
/// - with a sport filter: viewer lacks the sport or the level gap exceeds 1,
/// - without one: no sport shared with the viewer.
pub fn evaluate_candidate(
    viewer: &Profile,
    candidate: &Profile,
    sport_names: &HashMap<i64, String>,
    filter_sport_id: Option<i64>,
) -> Option<DiscoveryCard> {
    // Candidate's displayable sport list, restricted by the filter.
    // Entries without a catalog name cannot be rendered and don't count.
    let sports: Vec<CardSport> = candidate
        .sports
        .iter()
        .filter(|entry| filter_sport_id.map_or(true, |id| entry.sport_id == id))
        .filter_map(|entry| {
            sport_names.get(&entry.sport_id).map(|name| CardSport {
                sport_id: entry.sport_id,
                sport_name: name.clone(),
                level: entry.level,
            })
        })
        .collect();

    if sports.is_empty() {
        return None;
    }

    let distance_km = haversine_distance(
        viewer.latitude,
        viewer.longitude,
        candidate.latitude,
        candidate.longitude,
    );

    if distance_km > viewer.max_distance_km as f64 {
        return None;
    }

    if let Some(sport_id) = filter_sport_id {
        // The viewer must hold the filtered sport themselves, and the two
        // levels must be within one step of each other.
        let viewer_level = viewer.level_for(sport_id)?;
        let candidate_level = candidate.level_for(sport_id)?;
        if viewer_level.gap(candidate_level) > MAX_LEVEL_GAP {
            return None;
        }
    } else if !shares_any_sport(viewer, candidate) {
        return None;
    }

    Some(DiscoveryCard {
        user_id: candidate.user_id.clone(),
        first_name: candidate.first_name.clone(),
        age: candidate.age,
        city: candidate.city.clone(),
        photo_url: candidate.photo_url.clone(),
        bio: candidate.bio.clone(),
        distance_km: round_display_km(distance_km),
        sports,
    })
}

/// Set intersection on sport ids, non-empty means compatible.
#[inline]
fn shares_any_sport(viewer: &Profile, candidate: &Profile) -> bool {
    candidate
        .sports
        .iter()
        .any(|c| viewer.sports.iter().any(|v| v.sport_id == c.sport_id))
}
