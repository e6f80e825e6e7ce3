use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::error::EngineError;

/// Whether the profile represents a single person, a couple, or a group
///
/// Closed enumeration: unknown wire values fail deserialization instead of
/// being defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Individual,
    Couple,
    Group,
}

impl FromStr for AccountType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "individual" => Ok(Self::Individual),
            "couple" => Ok(Self::Couple),
            "group" => Ok(Self::Group),
            other => Err(EngineError::InvalidEnumeration {
                field: "accountType",
                value: other.to_string(),
            }),
        }
    }
}

/// Identity verification depth reached by a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationLevel {
    Basic,
    Enhanced,
    Premium,
}

impl VerificationLevel {
    /// Ordinal used by the verification scorer
    pub fn index(self) -> u8 {
        match self {
            Self::Basic => 0,
            Self::Enhanced => 1,
            Self::Premium => 2,
        }
    }

    /// Score multiplier applied after the weighted sum
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Basic => 1.0,
            Self::Enhanced => 1.2,
            Self::Premium => 1.5,
        }
    }
}

impl FromStr for VerificationLevel {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Self::Basic),
            "enhanced" => Ok(Self::Enhanced),
            "premium" => Ok(Self::Premium),
            other => Err(EngineError::InvalidEnumeration {
                field: "verificationLevel",
                value: other.to_string(),
            }),
        }
    }
}

/// Paid membership tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipTier {
    Free,
    Premium,
    Vip,
}

impl MembershipTier {
    /// Score multiplier applied after the weighted sum
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Free => 1.0,
            Self::Premium => 1.1,
            Self::Vip => 1.3,
        }
    }
}

impl FromStr for MembershipTier {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(Self::Free),
            "premium" => Ok(Self::Premium),
            "vip" => Ok(Self::Vip),
            other => Err(EngineError::InvalidEnumeration {
                field: "membershipTier",
                value: other.to_string(),
            }),
        }
    }
}

/// Self-declared experience on a fixed 5-step scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Curious,
    Beginner,
    Intermediate,
    Experienced,
    Expert,
}

impl ExperienceLevel {
    /// Position on the ordered scale, used for the distance penalty
    pub fn index(self) -> u8 {
        match self {
            Self::Curious => 0,
            Self::Beginner => 1,
            Self::Intermediate => 2,
            Self::Experienced => 3,
            Self::Expert => 4,
        }
    }
}

/// Where the profile currently lives
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    pub city: String,
    pub country: String,
}

impl Location {
    /// Same-city check used by the location scorer; postal precision may
    /// differ within one city, so this is independent of raw distance
    pub fn same_city(&self, other: &Location) -> bool {
        self.city.eq_ignore_ascii_case(&other.city)
            && self.country.eq_ignore_ascii_case(&other.country)
    }
}

/// Desired age window
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeRange {
    pub min: u8,
    pub max: u8,
}

fn validate_age_range(range: &AgeRange) -> Result<(), ValidationError> {
    if range.min > range.max {
        return Err(ValidationError::new("age_range_inverted"));
    }
    Ok(())
}

/// What the profile is looking for
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Desired connection-type tags
    #[serde(default)]
    pub looking_for: HashSet<String>,
    pub experience: ExperienceLevel,
    #[validate(custom(function = "validate_age_range"))]
    pub age_range: AgeRange,
    #[serde(default)]
    pub interests: HashSet<String>,
    #[serde(default)]
    pub lifestyle: HashSet<String>,
}

/// Verification status as reported by the trust & safety service
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    pub level: VerificationLevel,
    #[serde(default)]
    pub verified: bool,
    #[validate(range(min = 0.0, max = 100.0))]
    pub trust_score: f64,
}

impl Verification {
    /// Trust score clamped to [0, 100]
    pub fn trust(&self) -> f64 {
        self.trust_score.clamp(0.0, 100.0)
    }
}

/// Engagement signals
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub last_active: DateTime<Utc>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub response_rate: f64,
    #[serde(default)]
    pub profile_views: u32,
    #[serde(default)]
    pub event_attendance: u32,
}

impl Activity {
    /// Response rate clamped to [0, 100]
    pub fn responsiveness(&self) -> f64 {
        self.response_rate.clamp(0.0, 100.0)
    }
}

/// Current membership as reported by the billing service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    pub tier: MembershipTier,
    pub since: DateTime<Utc>,
}

/// User profile as supplied by the external profile store
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub account_type: AccountType,
    #[validate(nested)]
    pub location: Location,
    #[validate(nested)]
    pub preferences: Preferences,
    #[validate(nested)]
    pub verification: Verification,
    #[validate(nested)]
    pub activity: Activity,
    pub membership: Membership,
}

impl UserProfile {
    /// Check the profile's structural invariants (coordinate ranges,
    /// percentage bounds, age-range ordering)
    pub fn check(&self) -> Result<(), EngineError> {
        self.validate()?;
        Ok(())
    }
}

/// Named sub-score feeding the weighted sum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorKind {
    Location,
    Preferences,
    Interests,
    Verification,
    Activity,
}

impl FactorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Location => "location",
            Self::Preferences => "preferences",
            Self::Interests => "interests",
            Self::Verification => "verification",
            Self::Activity => "activity",
        }
    }
}

impl fmt::Display for FactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One factor's 0-100 sub-score, scoped to a single comparison
#[derive(Debug, Clone, Copy)]
pub struct CompatibilityFactor {
    pub kind: FactorKind,
    pub score: f64,
}

/// Scored comparison result returned to the caller
///
/// Immutable once returned; reasons are capped at three entries and risk
/// factors are advisory only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub candidate: UserProfile,
    pub score: u8,
    pub reasons: Vec<String>,
    pub risk_factors: Vec<String>,
    pub premium_suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_type_parse() {
        assert_eq!("couple".parse::<AccountType>().unwrap(), AccountType::Couple);
        assert!(matches!(
            "corporation".parse::<AccountType>(),
            Err(EngineError::InvalidEnumeration { field: "accountType", .. })
        ));
    }

    #[test]
    fn test_tier_rejects_unknown_wire_value() {
        let parsed = serde_json::from_str::<MembershipTier>("\"platinum\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_multiplier_tables() {
        assert_eq!(VerificationLevel::Basic.multiplier(), 1.0);
        assert_eq!(VerificationLevel::Enhanced.multiplier(), 1.2);
        assert_eq!(VerificationLevel::Premium.multiplier(), 1.5);
        assert_eq!(MembershipTier::Free.multiplier(), 1.0);
        assert_eq!(MembershipTier::Premium.multiplier(), 1.1);
        assert_eq!(MembershipTier::Vip.multiplier(), 1.3);
    }

    #[test]
    fn test_trust_score_clamped() {
        let verification = Verification {
            level: VerificationLevel::Basic,
            verified: false,
            trust_score: 180.0,
        };
        assert_eq!(verification.trust(), 100.0);
    }

    #[test]
    fn test_same_city_ignores_case() {
        let a = Location {
            latitude: 25.7617,
            longitude: -80.1918,
            city: "Miami".to_string(),
            country: "US".to_string(),
        };
        let b = Location {
            latitude: 25.79,
            longitude: -80.13,
            city: "miami".to_string(),
            country: "US".to_string(),
        };
        assert!(a.same_city(&b));
    }

    #[test]
    fn test_inverted_age_range_rejected() {
        let prefs = Preferences {
            looking_for: HashSet::new(),
            experience: ExperienceLevel::Curious,
            age_range: AgeRange { min: 40, max: 25 },
            interests: HashSet::new(),
            lifestyle: HashSet::new(),
        };
        assert!(prefs.validate().is_err());
    }
}
