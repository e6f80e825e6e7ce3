//! Affinity Engine - compatibility scoring core for the Affinity lifestyle app
//!
//! This library ranks candidate profiles against a viewer profile using a
//! multi-factor weighted score: geographic distance, declared preferences,
//! shared interests, verification/trust, and activity signals, adjusted by
//! tier multipliers and clamped to 0-100. Alongside the score it derives
//! short human-readable reasons, advisory risk flags, and premium upsell
//! suggestions.
//!
//! Profiles come from an external profile store and tier/verification data
//! from the membership service; this crate neither fetches nor persists
//! anything. All scoring is pure and synchronous, so callers are free to
//! fan out over candidate pairs and fan in for the final stable sort.

pub mod config;
pub mod core;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use crate::config::ScoringRules;
pub use crate::core::{haversine_miles, CompatibilityEngine, MatchRanker};
pub use crate::error::EngineError;
pub use crate::models::{MatchResult, UserProfile};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let engine = CompatibilityEngine::with_default_rules();
        assert_eq!(engine.rules().weights.location, 0.25);
    }
}
