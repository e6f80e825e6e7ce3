// Core algorithm exports
pub mod distance;
pub mod engine;
pub mod insights;
pub mod ranker;
pub mod scorers;

pub use distance::haversine_miles;
pub use engine::CompatibilityEngine;
pub use ranker::MatchRanker;
pub use scorers::{
    account_type_compatibility, overlap_ratio, score_activity, score_interests, score_location,
    score_preferences, score_verification,
};
