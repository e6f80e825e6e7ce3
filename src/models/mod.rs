// Model exports
pub mod domain;

pub use domain::{
    AccountType, Activity, AgeRange, CompatibilityFactor, ExperienceLevel, FactorKind, Location,
    MatchResult, Membership, MembershipTier, Preferences, UserProfile, Verification,
    VerificationLevel,
};
