use std::collections::HashSet;

use crate::config::{PreferenceWeights, ScoringRules};
use crate::core::distance::haversine_miles;
use crate::error::EngineError;
use crate::models::{AccountType, Activity, UserProfile};

/// Neutral score used while age compatibility is a pass-through
const NEUTRAL_AGE_SCORE: f64 = 80.0;

/// Overlap ratio between two tag sets: |intersection| / max(|a|, |b|)
///
/// Returns 0.0 when either set is empty, so empty profiles never divide
/// by zero or score phantom overlap.
pub fn overlap_ratio(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let shared = a.intersection(b).count() as f64;
    shared / a.len().max(b.len()) as f64
}

/// Location factor (0-100)
///
/// Same city always scores 100, even when coordinates differ (postal
/// precision varies within one city). Otherwise the great-circle distance
/// is bucketed.
pub fn score_location(viewer: &UserProfile, candidate: &UserProfile) -> Result<f64, EngineError> {
    if viewer.location.same_city(&candidate.location) {
        return Ok(ScoringRules::SAME_CITY_SCORE);
    }

    let miles = haversine_miles(
        viewer.location.latitude,
        viewer.location.longitude,
        candidate.location.latitude,
        candidate.location.longitude,
    )?;

    for (max_miles, score) in ScoringRules::DISTANCE_BUCKETS {
        if miles <= max_miles {
            return Ok(score);
        }
    }
    Ok(ScoringRules::DISTANT_SCORE)
}

/// Account-type compatibility, looked up per ordered (viewer, candidate) pair
///
/// The table is intentionally asymmetric; do not fold the two directions
/// together.
pub fn account_type_compatibility(viewer: AccountType, candidate: AccountType) -> f64 {
    use AccountType::*;
    match (viewer, candidate) {
        (Individual, Individual) => 100.0,
        (Individual, Couple) => 70.0,
        (Individual, Group) => 50.0,
        (Couple, Individual) => 75.0,
        (Couple, Couple) => 100.0,
        (Couple, Group) => 80.0,
        (Group, Individual) => 60.0,
        (Group, Couple) => 85.0,
        (Group, Group) => 100.0,
    }
}

/// Penalty for distance on the 5-step experience scale
fn experience_compatibility(viewer: &UserProfile, candidate: &UserProfile) -> f64 {
    let gap = (viewer.preferences.experience.index() as i16
        - candidate.preferences.experience.index() as i16)
        .abs() as f64;
    (100.0 - 20.0 * gap).max(0.0)
}

/// Age compatibility is a pass-through: real age data lives with the
/// external profile service and is not wired into this core yet, so the
/// neutral default is returned. Kept explicit so the gap stays visible.
fn age_compatibility_placeholder() -> f64 {
    NEUTRAL_AGE_SCORE
}

/// Preferences factor (0-100): weighted blend of account-type
/// compatibility, looking-for overlap, experience distance, age
/// compatibility, and lifestyle overlap
pub fn score_preferences(
    viewer: &UserProfile,
    candidate: &UserProfile,
    weights: &PreferenceWeights,
) -> f64 {
    let account = account_type_compatibility(viewer.account_type, candidate.account_type);
    let looking_for =
        overlap_ratio(&viewer.preferences.looking_for, &candidate.preferences.looking_for) * 100.0;
    let experience = experience_compatibility(viewer, candidate);
    let age = age_compatibility_placeholder();
    let lifestyle =
        overlap_ratio(&viewer.preferences.lifestyle, &candidate.preferences.lifestyle) * 100.0;

    (account * weights.account_type
        + looking_for * weights.looking_for
        + experience * weights.experience
        + age * weights.age_range
        + lifestyle * weights.lifestyle)
        / 100.0
}

/// Shared-interests factor (0-100): overlap ratio scaled to 80 plus a
/// small bonus, capped at 100
pub fn score_interests(viewer: &UserProfile, candidate: &UserProfile) -> f64 {
    let ratio = overlap_ratio(&viewer.preferences.interests, &candidate.preferences.interests);
    (ratio * 80.0 + (ratio * 5.0).min(20.0)).min(100.0)
}

/// Verification/trust factor (0-100)
pub fn score_verification(viewer: &UserProfile, candidate: &UserProfile) -> f64 {
    let mut score = 0.0;

    if viewer.verification.verified && candidate.verification.verified {
        score += 40.0;
    }

    score += 10.0
        * (viewer.verification.level.index() + candidate.verification.level.index()) as f64;
    score += 0.3 * (viewer.verification.trust() + candidate.verification.trust()) / 2.0;

    score.min(100.0)
}

/// Blended engagement level for one profile
fn activity_level(activity: &Activity) -> f64 {
    let views = (activity.profile_views as f64 / 100.0).min(100.0);
    let events = (activity.event_attendance as f64 * 10.0).min(100.0);
    (activity.responsiveness() + views + events) / 3.0
}

/// Activity factor (0-100): rewards mutual responsiveness, similar
/// engagement levels, and shared event attendance
pub fn score_activity(viewer: &UserProfile, candidate: &UserProfile) -> f64 {
    let min_response = viewer
        .activity
        .responsiveness()
        .min(candidate.activity.responsiveness());

    let level_gap =
        (activity_level(&viewer.activity) - activity_level(&candidate.activity)).abs();

    let min_events = viewer
        .activity
        .event_attendance
        .min(candidate.activity.event_attendance) as f64;

    let score =
        0.4 * min_response + 0.3 * (100.0 - level_gap) + (30.0 * min_events / 10.0).min(30.0);

    score.min(100.0)
}
