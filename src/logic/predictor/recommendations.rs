//! Tier-specific recommendations
//!
//! Static guidance lists keyed by risk tier, plus general notes appended
//! to every assessment.

use super::types::RiskTier;

/// Recommendations appended regardless of tier
const GENERAL: &[&str] = &[
    "Remember that seeking help is a sign of strength, not weakness",
    "Mental health conditions are treatable with proper support",
    "Small steps toward improvement are still meaningful progress",
];

const LOW: &[&str] = &[
    "Continue maintaining good mental health habits",
    "Regular exercise and healthy sleep patterns can help maintain wellbeing",
    "Consider mindfulness or meditation practices for stress management",
    "Stay connected with friends and family",
    "Engage in hobbies and activities you enjoy",
];

const MODERATE: &[&str] = &[
    "Consider speaking with a mental health professional for support",
    "Establish a regular daily routine to provide structure",
    "Prioritize self-care activities and stress management",
    "Reach out to trusted friends or family members for support",
    "Consider joining a support group or community activity",
    "Monitor your mood and symptoms regularly",
];

const HIGH: &[&str] = &[
    "Strongly consider scheduling an appointment with a mental health professional",
    "Reach out to a crisis helpline if you're feeling overwhelmed",
    "Don't isolate yourself - maintain regular contact with supportive people",
    "Consider temporary adjustments to work or school responsibilities",
    "Avoid making major life decisions while experiencing symptoms",
    "Focus on basic self-care: regular meals, sleep, and hygiene",
];

const VERY_HIGH: &[&str] = &[
    "Seek immediate professional help - contact a mental health crisis line",
    "Consider visiting an emergency room if you're having thoughts of self-harm",
    "Ensure you have 24/7 access to support through crisis hotlines",
    "Remove any means of self-harm from your environment",
    "Stay with trusted friends or family members if possible",
    "Follow up with a mental health professional within 24-48 hours",
];

/// Build the recommendation list for a tier (tier-specific + general)
pub fn for_tier(tier: RiskTier) -> Vec<String> {
    let specific = match tier {
        RiskTier::Low => LOW,
        RiskTier::Moderate => MODERATE,
        RiskTier::High => HIGH,
        RiskTier::VeryHigh => VERY_HIGH,
    };

    specific
        .iter()
        .chain(GENERAL.iter())
        .map(|s| s.to_string())
        .collect()
}
