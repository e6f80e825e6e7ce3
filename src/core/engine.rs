use chrono::Utc;
use tracing::debug;

use crate::config::ScoringRules;
use crate::core::insights;
use crate::core::scorers;
use crate::error::EngineError;
use crate::models::{CompatibilityFactor, FactorKind, MatchResult, UserProfile};

/// Multi-factor compatibility engine
///
/// Construct one per process (or per test) with explicit rules and pass it
/// to callers; there is no shared global instance. Construction fails on
/// malformed rules so a comparison never runs against bad weights.
#[derive(Debug, Clone)]
pub struct CompatibilityEngine {
    rules: ScoringRules,
}

impl CompatibilityEngine {
    /// Build an engine, rejecting rules whose weight tables are malformed
    pub fn new(rules: ScoringRules) -> Result<Self, EngineError> {
        rules.validate()?;
        Ok(Self { rules })
    }

    /// Engine with the compiled-in production weights
    pub fn with_default_rules() -> Self {
        Self {
            rules: ScoringRules::default(),
        }
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Score `candidate` against `viewer` and assemble a full result
    ///
    /// Fail-fast: any scorer error aborts the whole comparison; no partial
    /// result is returned. The final score can exceed the weighted base
    /// because verification and membership multipliers stack
    /// multiplicatively; that tier privileging is intentional.
    pub fn compare(
        &self,
        viewer: &UserProfile,
        candidate: &UserProfile,
    ) -> Result<MatchResult, EngineError> {
        let factors = self.score_factors(viewer, candidate)?;
        let base = self.weighted_base(&factors);

        let verification_multiplier = viewer
            .verification
            .level
            .multiplier()
            .max(candidate.verification.level.multiplier());
        let membership_multiplier = viewer
            .membership
            .tier
            .multiplier()
            .max(candidate.membership.tier.multiplier());

        let final_score =
            (base * verification_multiplier * membership_multiplier).round().min(100.0) as u8;

        debug!(
            viewer = %viewer.id,
            candidate = %candidate.id,
            base,
            verification_multiplier,
            membership_multiplier,
            final_score,
            "scored candidate"
        );

        let reasons = insights::match_reasons(&factors, viewer, candidate);
        let risk_factors = insights::risk_factors(viewer, candidate, Utc::now());
        let premium_suggestions = insights::premium_suggestions(viewer, candidate, final_score);

        Ok(MatchResult {
            candidate: candidate.clone(),
            score: final_score,
            reasons,
            risk_factors,
            premium_suggestions,
        })
    }

    /// Run the five factor scorers, wrapping any failure with the factor
    /// that produced it
    fn score_factors(
        &self,
        viewer: &UserProfile,
        candidate: &UserProfile,
    ) -> Result<[CompatibilityFactor; 5], EngineError> {
        let location = scorers::score_location(viewer, candidate)
            .map_err(|e| EngineError::scoring(FactorKind::Location, e))?;

        Ok([
            CompatibilityFactor {
                kind: FactorKind::Location,
                score: location,
            },
            CompatibilityFactor {
                kind: FactorKind::Preferences,
                score: scorers::score_preferences(
                    viewer,
                    candidate,
                    &self.rules.preference_weights,
                ),
            },
            CompatibilityFactor {
                kind: FactorKind::Interests,
                score: scorers::score_interests(viewer, candidate),
            },
            CompatibilityFactor {
                kind: FactorKind::Verification,
                score: scorers::score_verification(viewer, candidate),
            },
            CompatibilityFactor {
                kind: FactorKind::Activity,
                score: scorers::score_activity(viewer, candidate),
            },
        ])
    }

    fn weighted_base(&self, factors: &[CompatibilityFactor; 5]) -> f64 {
        let w = &self.rules.weights;
        factors
            .iter()
            .map(|factor| {
                let weight = match factor.kind {
                    FactorKind::Location => w.location,
                    FactorKind::Preferences => w.preferences,
                    FactorKind::Interests => w.interests,
                    FactorKind::Verification => w.verification,
                    FactorKind::Activity => w.activity,
                };
                factor.score * weight
            })
            .sum()
    }
}
