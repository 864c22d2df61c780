//! Depression Risk Predictor
//!
//! Blends the text and voice scores into one advisory number, applies a
//! non-linear squashing only at the extremes, and maps the result through
//! the static threshold table. Purely deterministic; no learned model.

pub mod types;
pub mod rules;
pub mod recommendations;

pub use types::{ConfidenceLevel, RiskAssessment, RiskTier, ScoreBreakdown};
pub use rules::RiskThresholds;

use rules::{
    AGREEMENT_HIGH, AGREEMENT_MODERATE, SQUASH_HIGH_KNEE, SQUASH_LOW_KNEE, TEXT_WEIGHT,
    VOICE_WEIGHT,
};

use super::NEUTRAL_SCORE;

// ============================================================================
// MAIN PREDICTION FUNCTION
// ============================================================================

/// Blend the available scores into a full risk assessment
pub fn predict(text_score: Option<f64>, voice_score: Option<f64>) -> RiskAssessment {
    predict_with_thresholds(text_score, voice_score, &RiskThresholds::default())
}

/// Prediction with a custom threshold table
pub fn predict_with_thresholds(
    text_score: Option<f64>,
    voice_score: Option<f64>,
    thresholds: &RiskThresholds,
) -> RiskAssessment {
    let raw = combine(text_score, voice_score);
    let final_score = squash(raw).clamp(0.0, 10.0);

    let tier = tier_for(final_score, thresholds);

    RiskAssessment {
        combined_score: final_score,
        tier,
        confidence: confidence(text_score, voice_score),
        completeness: completeness(text_score, voice_score),
        recommendations: recommendations::for_tier(tier),
        breakdown: ScoreBreakdown {
            text_contribution: text_score.map(|s| s * TEXT_WEIGHT).unwrap_or(0.0),
            voice_contribution: voice_score.map(|s| s * VOICE_WEIGHT).unwrap_or(0.0),
            raw_combined: raw,
            final_score,
        },
    }
}

/// Weighted average of the available scores.
///
/// Both present: 0.6 x text + 0.4 x voice. Exactly one present: that score
/// unchanged. Neither: the neutral default.
fn combine(text_score: Option<f64>, voice_score: Option<f64>) -> f64 {
    let raw = match (text_score, voice_score) {
        (Some(t), Some(v)) => t * TEXT_WEIGHT + v * VOICE_WEIGHT,
        (Some(t), None) => t,
        (None, Some(v)) => v,
        (None, None) => NEUTRAL_SCORE,
    };
    raw.clamp(0.0, 10.0)
}

/// Ease extreme scores toward the center; identity on the mid-range.
///
/// Quadratic easing below the low knee and above the high knee keeps the
/// mapping monotone over [0, 10] while softening the blend at the ends,
/// where single weak signals would otherwise dominate.
fn squash(score: f64) -> f64 {
    if score < SQUASH_LOW_KNEE {
        let d = SQUASH_LOW_KNEE - score;
        SQUASH_LOW_KNEE - d * d / SQUASH_LOW_KNEE
    } else if score > SQUASH_HIGH_KNEE {
        let d = score - SQUASH_HIGH_KNEE;
        SQUASH_HIGH_KNEE + d * d / (10.0 - SQUASH_HIGH_KNEE)
    } else {
        score
    }
}

/// Map a combined score through the threshold table
pub fn tier_for(score: f64, thresholds: &RiskThresholds) -> RiskTier {
    if score <= thresholds.low_max {
        RiskTier::Low
    } else if score <= thresholds.moderate_max {
        RiskTier::Moderate
    } else if score <= thresholds.high_max {
        RiskTier::High
    } else {
        RiskTier::VeryHigh
    }
}

/// Confidence from agreement between the two paths
pub fn confidence(text_score: Option<f64>, voice_score: Option<f64>) -> ConfidenceLevel {
    match (text_score, voice_score) {
        (Some(t), Some(v)) => {
            let diff = (t - v).abs();
            if diff < AGREEMENT_HIGH {
                ConfidenceLevel::High
            } else if diff < AGREEMENT_MODERATE {
                ConfidenceLevel::Moderate
            } else {
                ConfidenceLevel::Conflicting
            }
        }
        (Some(_), None) | (None, Some(_)) => ConfidenceLevel::Moderate,
        (None, None) => ConfidenceLevel::None,
    }
}

/// How complete the analysis was (0-1 scale)
fn completeness(text_score: Option<f64>, voice_score: Option<f64>) -> f64 {
    match (text_score, voice_score) {
        (Some(_), Some(_)) => 1.0,
        (Some(_), None) | (None, Some(_)) => 0.6,
        (None, None) => 0.0,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_average_when_both_present() {
        // Mid-range scores so the squash is identity
        let result = predict(Some(4.0), Some(6.0));
        let expected = 4.0 * 0.6 + 6.0 * 0.4;
        assert!((result.combined_score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_single_score_passes_through() {
        let result = predict(Some(6.2), None);
        assert!((result.combined_score - 6.2).abs() < 1e-9);

        let result = predict(None, Some(3.8));
        assert!((result.combined_score - 3.8).abs() < 1e-9);
    }

    #[test]
    fn test_no_input_is_neutral() {
        let result = predict(None, None);
        assert!((result.combined_score - 5.0).abs() < 1e-9);
        assert_eq!(result.tier, RiskTier::Moderate);
        assert_eq!(result.confidence, ConfidenceLevel::None);
        assert_eq!(result.completeness, 0.0);
    }

    #[test]
    fn test_tier_table() {
        let t = RiskThresholds::default();
        assert_eq!(tier_for(0.0, &t), RiskTier::Low);
        assert_eq!(tier_for(3.0, &t), RiskTier::Low);
        assert_eq!(tier_for(4.5, &t), RiskTier::Moderate);
        assert_eq!(tier_for(6.9, &t), RiskTier::High);
        assert_eq!(tier_for(9.0, &t), RiskTier::VeryHigh);
    }

    #[test]
    fn test_tier_mapping_is_monotone() {
        let t = RiskThresholds::default();
        let mut last = 0u8;
        for i in 0..=100 {
            let score = i as f64 * 0.1;
            let sev = tier_for(score, &t).severity_level();
            assert!(sev >= last, "severity dropped at score {}", score);
            last = sev;
        }
    }

    #[test]
    fn test_squash_identity_in_mid_range() {
        for s in [1.5, 2.0, 5.0, 7.7, 8.5] {
            assert!((squash(s) - s).abs() < 1e-9);
        }
    }

    #[test]
    fn test_squash_eases_extremes_toward_center() {
        assert!(squash(0.5) > 0.5);
        assert!(squash(9.5) < 9.5);
        // Endpoints are fixed
        assert!((squash(0.0) - 0.0).abs() < 1e-9);
        assert!((squash(10.0) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_squash_is_monotone() {
        let mut last = -1.0f64;
        for i in 0..=1000 {
            let s = squash(i as f64 * 0.01);
            assert!(s >= last);
            last = s;
        }
    }

    #[test]
    fn test_confidence_from_agreement() {
        assert_eq!(confidence(Some(5.0), Some(5.5)), ConfidenceLevel::High);
        assert_eq!(confidence(Some(5.0), Some(6.5)), ConfidenceLevel::Moderate);
        assert_eq!(confidence(Some(2.0), Some(7.0)), ConfidenceLevel::Conflicting);
        assert_eq!(confidence(Some(5.0), None), ConfidenceLevel::Moderate);
    }

    #[test]
    fn test_recommendations_match_tier() {
        let result = predict(Some(9.5), Some(9.5));
        assert_eq!(result.tier, RiskTier::VeryHigh);
        assert!(result
            .recommendations
            .iter()
            .any(|r| r.contains("immediate professional help")));
    }

    #[test]
    fn test_score_always_in_range() {
        for t in [-5.0, 0.0, 3.0, 10.0, 20.0] {
            for v in [-5.0, 0.0, 7.0, 10.0, 20.0] {
                let r = predict(Some(t), Some(v));
                assert!((0.0..=10.0).contains(&r.combined_score));
            }
        }
    }
}
