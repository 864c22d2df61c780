//! Risk Prediction Rules & Thresholds
//!
//! Defines the weights and threshold table for the combined assessment.
//! No prediction logic here, only constants and config.

use serde::{Deserialize, Serialize};

// ============================================================================
// WEIGHTS (How much each path contributes to the combined score)
// ============================================================================

/// Weight of the text analysis score (60%)
pub const TEXT_WEIGHT: f64 = 0.6;

/// Weight of the voice analysis score (40%)
pub const VOICE_WEIGHT: f64 = 0.4;

// ============================================================================
// THRESHOLD TABLE (score is 0-10, higher = more concerning)
// ============================================================================

/// At or below this score = Low Risk
pub const LOW_RISK_MAX: f64 = 3.0;

/// At or below this score = Moderate Risk
pub const MODERATE_RISK_MAX: f64 = 5.0;

/// At or below this score = High Risk; above = Very High Risk
pub const HIGH_RISK_MAX: f64 = 7.0;

// ============================================================================
// SQUASHING (non-linear compression applied only at the extremes)
// ============================================================================

/// Scores below this knee are eased toward the center
pub const SQUASH_LOW_KNEE: f64 = 1.5;

/// Scores above this knee are eased toward the center
pub const SQUASH_HIGH_KNEE: f64 = 8.5;

// ============================================================================
// CONFIDENCE (agreement between the two paths)
// ============================================================================

/// Score difference below this = high confidence
pub const AGREEMENT_HIGH: f64 = 1.0;

/// Score difference below this = moderate confidence; above = conflicting
pub const AGREEMENT_MODERATE: f64 = 2.0;

// ============================================================================
// CONFIGURABLE THRESHOLDS (for runtime adjustment)
// ============================================================================

/// Threshold table for tier assignment (configurable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// At or below this = Low
    pub low_max: f64,
    /// At or below this = Moderate
    pub moderate_max: f64,
    /// At or below this = High, above = Very High
    pub high_max: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            low_max: LOW_RISK_MAX,
            moderate_max: MODERATE_RISK_MAX,
            high_max: HIGH_RISK_MAX,
        }
    }
}

impl RiskThresholds {
    /// Conservative table - flags concern earlier
    pub fn conservative() -> Self {
        Self {
            low_max: 2.5,
            moderate_max: 4.5,
            high_max: 6.5,
        }
    }

    /// True when the table is strictly increasing (required for a
    /// monotone tier mapping)
    pub fn is_monotone(&self) -> bool {
        self.low_max < self.moderate_max && self.moderate_max < self.high_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        assert!((TEXT_WEIGHT + VOICE_WEIGHT - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_table_is_monotone() {
        assert!(RiskThresholds::default().is_monotone());
        assert!(RiskThresholds::conservative().is_monotone());
    }
}
