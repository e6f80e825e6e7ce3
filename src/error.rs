use thiserror::Error;

use crate::models::FactorKind;

/// Errors surfaced by the compatibility engine
///
/// Scores feed ranking decisions shown to real users, so bad input is
/// rejected outright instead of being papered over with defaults.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid coordinate: lat={lat}, lon={lon}")]
    InvalidCoordinate { lat: f64, lon: f64 },

    #[error("unrecognized {field} value: {value}")]
    InvalidEnumeration { field: &'static str, value: String },

    #[error("scoring failed for {factor} factor: {source}")]
    ScoringFailed {
        factor: FactorKind,
        #[source]
        source: Box<EngineError>,
    },

    #[error("invalid scoring weights: {0}")]
    InvalidWeights(String),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("profile validation failed: {0}")]
    InvalidProfile(#[from] validator::ValidationErrors),
}

impl EngineError {
    /// Wrap a scorer failure, recording which factor aborted the comparison
    pub(crate) fn scoring(factor: FactorKind, source: EngineError) -> Self {
        Self::ScoringFailed {
            factor,
            source: Box::new(source),
        }
    }
}
