//! Human-readable derivations from a finished comparison: match reasons,
//! risk flags, and premium upsell suggestions.
//!
//! Everything here is rule-based and deterministic. Reasons are evaluated
//! in a fixed order and capped at three; risk factors are advisory and
//! never feed back into the score.

use chrono::{DateTime, Duration, Utc};

use crate::models::{CompatibilityFactor, FactorKind, MembershipTier, UserProfile};

/// Most reasons ever attached to a result
const MAX_REASONS: usize = 3;

/// Days of silence after which a candidate is flagged inactive
const INACTIVITY_DAYS: i64 = 30;

pub const REASON_SAME_CITY: &str = "Same city";
pub const REASON_CLOSE_PROXIMITY: &str = "Close proximity";
pub const REASON_PREMIUM_MEMBER: &str = "Premium member";
pub const REASON_COMPATIBLE_PREFERENCES: &str = "Highly compatible lifestyle preferences";
pub const REASON_SHARED_INTERESTS: &str = "Shared interests";
pub const REASON_HIGHLY_VERIFIED: &str = "Both highly verified";
pub const REASON_ACTIVE_MEMBERS: &str = "Both active members";

pub const RISK_UNVERIFIED: &str = "Unverified profile";
pub const RISK_LOW_TRUST: &str = "Low trust score";
pub const RISK_LOW_RESPONSE: &str = "Low response rate";
pub const RISK_INACTIVE: &str = "Inactive for over 30 days";

pub const SUGGEST_UPGRADE: &str = "Upgrade to Premium to boost your visibility";
pub const SUGGEST_VIP_INSIGHTS: &str = "VIP members can see who viewed their profile";

fn factor_score(factors: &[CompatibilityFactor], kind: FactorKind) -> f64 {
    factors
        .iter()
        .find(|f| f.kind == kind)
        .map(|f| f.score)
        .unwrap_or(0.0)
}

/// Derive up to three reasons in fixed evaluation order
///
/// The order is part of the product contract (it decides which reasons
/// survive the cap), so it must not be reordered by score magnitude. The
/// same-city and proximity reasons are mutually exclusive.
pub fn match_reasons(
    factors: &[CompatibilityFactor],
    viewer: &UserProfile,
    candidate: &UserProfile,
) -> Vec<String> {
    let mut reasons = Vec::new();

    let location = factor_score(factors, FactorKind::Location);
    if location >= 80.0 && viewer.location.same_city(&candidate.location) {
        reasons.push(REASON_SAME_CITY.to_string());
    } else if location >= 60.0 {
        reasons.push(REASON_CLOSE_PROXIMITY.to_string());
    }

    if viewer.membership.tier == MembershipTier::Vip
        || candidate.membership.tier == MembershipTier::Vip
    {
        reasons.push(REASON_PREMIUM_MEMBER.to_string());
    }

    if factor_score(factors, FactorKind::Preferences) >= 80.0 {
        reasons.push(REASON_COMPATIBLE_PREFERENCES.to_string());
    }

    if factor_score(factors, FactorKind::Interests) >= 70.0 {
        reasons.push(REASON_SHARED_INTERESTS.to_string());
    }

    if factor_score(factors, FactorKind::Verification) >= 80.0 {
        reasons.push(REASON_HIGHLY_VERIFIED.to_string());
    }

    if factor_score(factors, FactorKind::Activity) >= 70.0 {
        reasons.push(REASON_ACTIVE_MEMBERS.to_string());
    }

    reasons.truncate(MAX_REASONS);
    reasons
}

/// Flag adverse trust and engagement conditions
///
/// Any subset may apply; flags never alter the score.
pub fn risk_factors(
    viewer: &UserProfile,
    candidate: &UserProfile,
    now: DateTime<Utc>,
) -> Vec<String> {
    let mut risks = Vec::new();

    if !viewer.verification.verified || !candidate.verification.verified {
        risks.push(RISK_UNVERIFIED.to_string());
    }

    if viewer.verification.trust() < 30.0 || candidate.verification.trust() < 30.0 {
        risks.push(RISK_LOW_TRUST.to_string());
    }

    if viewer.activity.responsiveness() < 20.0 || candidate.activity.responsiveness() < 20.0 {
        risks.push(RISK_LOW_RESPONSE.to_string());
    }

    if now - candidate.activity.last_active > Duration::days(INACTIVITY_DAYS) {
        risks.push(RISK_INACTIVE.to_string());
    }

    risks
}

/// Upsell hints derived from the tiers on both sides of the comparison
pub fn premium_suggestions(
    viewer: &UserProfile,
    candidate: &UserProfile,
    final_score: u8,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if viewer.membership.tier == MembershipTier::Free && final_score >= 70 {
        suggestions.push(SUGGEST_UPGRADE.to_string());
    }

    if candidate.membership.tier == MembershipTier::Vip
        && viewer.membership.tier != MembershipTier::Vip
    {
        suggestions.push(SUGGEST_VIP_INSIGHTS.to_string());
    }

    suggestions
}
