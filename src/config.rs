use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::error::EngineError;

/// Tolerance when checking that configured weights sum to their target
const WEIGHT_SUM_EPSILON: f64 = 1e-9;

/// Static scoring configuration for the compatibility engine
///
/// The weight values replicate the production tables exactly; changing them
/// changes ranking behavior and is treated as an incompatibility, not a
/// tuning opportunity.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringRules {
    #[serde(default)]
    pub weights: FactorWeights,
    #[serde(default)]
    pub preference_weights: PreferenceWeights,
}

/// Top-level factor weights; must sum to 1.0
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FactorWeights {
    #[serde(default = "default_location_weight")]
    pub location: f64,
    #[serde(default = "default_preferences_weight")]
    pub preferences: f64,
    #[serde(default = "default_interests_weight")]
    pub interests: f64,
    #[serde(default = "default_verification_weight")]
    pub verification: f64,
    #[serde(default = "default_activity_weight")]
    pub activity: f64,
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            location: default_location_weight(),
            preferences: default_preferences_weight(),
            interests: default_interests_weight(),
            verification: default_verification_weight(),
            activity: default_activity_weight(),
        }
    }
}

fn default_location_weight() -> f64 { 0.25 }
fn default_preferences_weight() -> f64 { 0.30 }
fn default_interests_weight() -> f64 { 0.20 }
fn default_verification_weight() -> f64 { 0.15 }
fn default_activity_weight() -> f64 { 0.10 }

/// Sub-weights inside the preferences scorer; expressed in points and
/// required to sum to 100
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PreferenceWeights {
    #[serde(default = "default_account_type_weight")]
    pub account_type: f64,
    #[serde(default = "default_looking_for_weight")]
    pub looking_for: f64,
    #[serde(default = "default_experience_weight")]
    pub experience: f64,
    #[serde(default = "default_age_range_weight")]
    pub age_range: f64,
    #[serde(default = "default_lifestyle_weight")]
    pub lifestyle: f64,
}

impl Default for PreferenceWeights {
    fn default() -> Self {
        Self {
            account_type: default_account_type_weight(),
            looking_for: default_looking_for_weight(),
            experience: default_experience_weight(),
            age_range: default_age_range_weight(),
            lifestyle: default_lifestyle_weight(),
        }
    }
}

fn default_account_type_weight() -> f64 { 30.0 }
fn default_looking_for_weight() -> f64 { 25.0 }
fn default_experience_weight() -> f64 { 20.0 }
fn default_age_range_weight() -> f64 { 15.0 }
fn default_lifestyle_weight() -> f64 { 10.0 }

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            weights: FactorWeights::default(),
            preference_weights: PreferenceWeights::default(),
        }
    }
}

impl ScoringRules {
    /// Distance buckets for the location scorer: (max miles, score).
    /// Anything beyond the last bucket scores [`Self::DISTANT_SCORE`].
    pub const DISTANCE_BUCKETS: [(f64, f64); 4] =
        [(25.0, 90.0), (50.0, 75.0), (100.0, 60.0), (200.0, 40.0)];
    pub const SAME_CITY_SCORE: f64 = 100.0;
    pub const DISTANT_SCORE: f64 = 20.0;

    /// Load scoring rules from config files and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with AFFINITY__)
    pub fn load() -> Result<Self, EngineError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("AFFINITY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let rules: Self = settings.try_deserialize()?;
        rules.validate()?;
        Ok(rules)
    }

    /// Load scoring rules from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()?;

        let rules: Self = settings.try_deserialize()?;
        rules.validate()?;
        Ok(rules)
    }

    /// Reject malformed weight tables before any score is computed
    ///
    /// Run once at engine construction; a comparison never sees invalid rules.
    pub fn validate(&self) -> Result<(), EngineError> {
        let w = &self.weights;
        for (name, value) in [
            ("location", w.location),
            ("preferences", w.preferences),
            ("interests", w.interests),
            ("verification", w.verification),
            ("activity", w.activity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(EngineError::InvalidWeights(format!(
                    "factor weight {} out of range: {}",
                    name, value
                )));
            }
        }

        let sum = w.location + w.preferences + w.interests + w.verification + w.activity;
        if (sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
            return Err(EngineError::InvalidWeights(format!(
                "factor weights must sum to 1.0, got {}",
                sum
            )));
        }

        let p = &self.preference_weights;
        let psum = p.account_type + p.looking_for + p.experience + p.age_range + p.lifestyle;
        if (psum - 100.0).abs() > WEIGHT_SUM_EPSILON {
            return Err(EngineError::InvalidWeights(format!(
                "preference weights must sum to 100, got {}",
                psum
            )));
        }

        Ok(())
    }
}
