//! Predictor types
//!
//! Core types for risk assessment. No logic here, only data structures.

use serde::{Deserialize, Serialize};

// ============================================================================
// RISK TIER
// ============================================================================

/// Risk tiers assigned by the static threshold table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    /// Managing well, no elevated indicators
    Low,
    /// Some areas of concern, worth monitoring
    Moderate,
    /// Significant concerns, professional support recommended
    High,
    /// Serious concerns, immediate support recommended
    VeryHigh,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low Risk",
            RiskTier::Moderate => "Moderate Risk",
            RiskTier::High => "High Risk",
            RiskTier::VeryHigh => "Very High Risk",
        }
    }

    pub fn severity_level(&self) -> u8 {
        match self {
            RiskTier::Low => 0,
            RiskTier::Moderate => 1,
            RiskTier::High => 2,
            RiskTier::VeryHigh => 3,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            RiskTier::Low => "#4CAF50",      // Green
            RiskTier::Moderate => "#FF9800", // Orange
            RiskTier::High => "#F44336",     // Red
            RiskTier::VeryHigh => "#D32F2F", // Dark red
        }
    }

    /// User-facing advisory message for this tier
    pub fn message(&self) -> &'static str {
        match self {
            RiskTier::Low => {
                "Your responses suggest you're managing well. Continue with healthy \
                 habits and don't hesitate to seek support if needed."
            }
            RiskTier::Moderate => {
                "Your responses indicate some areas of concern. Consider speaking \
                 with a mental health professional for support and guidance."
            }
            RiskTier::High => {
                "Your responses suggest significant concerns. We strongly recommend \
                 reaching out to a mental health professional or crisis helpline."
            }
            RiskTier::VeryHigh => {
                "Your responses indicate serious concerns. Please seek immediate \
                 professional help or contact a crisis helpline right away."
            }
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// CONFIDENCE
// ============================================================================

/// How much the prediction can be trusted, based on input agreement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    /// Both inputs present and agreeing
    High,
    /// Both inputs present with some divergence, or only one input
    Moderate,
    /// Both inputs present but strongly disagreeing
    Conflicting,
    /// No input at all
    None,
}

impl ConfidenceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "High Confidence",
            ConfidenceLevel::Moderate => "Moderate Confidence",
            ConfidenceLevel::Conflicting => "Low Confidence (Conflicting Signals)",
            ConfidenceLevel::None => "No Confidence",
        }
    }
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// SCORE BREAKDOWN
// ============================================================================

/// Breakdown of how the combined score was calculated
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub text_contribution: f64,
    pub voice_contribution: f64,
    /// Weighted average before extreme-range squashing
    pub raw_combined: f64,
    pub final_score: f64,
}

// ============================================================================
// RISK ASSESSMENT
// ============================================================================

/// Result of blending the available scores
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub combined_score: f64,
    pub tier: RiskTier,
    pub confidence: ConfidenceLevel,
    /// How complete the analysis was: 1.0 both paths, 0.6 one, 0.0 none
    pub completeness: f64,
    pub recommendations: Vec<String>,
    pub breakdown: ScoreBreakdown,
}
