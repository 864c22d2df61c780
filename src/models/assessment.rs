//! Assessment request/response models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::logic::predictor::{ConfidenceLevel, RiskAssessment, RiskTier, ScoreBreakdown};
use crate::logic::text::TextDetail;
use crate::logic::voice::VoiceFeatures;

/// Text-only assessment request
#[derive(Debug, Deserialize, Validate)]
pub struct TextAssessRequest {
    #[validate(length(min = 1, max = 20000, message = "text must be 1-20000 characters"))]
    pub text: String,
}

/// Full assessment response, shared by all assess endpoints
#[derive(Debug, Serialize)]
pub struct AssessmentResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,

    /// Per-path scores in [0, 10]; None = path not provided
    pub text_score: Option<f64>,
    pub voice_score: Option<f64>,

    pub combined_score: f64,
    pub tier: RiskTier,
    pub tier_label: String,
    pub tier_color: String,
    pub message: String,
    pub confidence: ConfidenceLevel,
    pub completeness: f64,
    pub recommendations: Vec<String>,
    pub breakdown: ScoreBreakdown,

    /// Degradation notices (decode failure, empty text, ...)
    pub warnings: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_detail: Option<TextDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_features: Option<VoiceFeatures>,

    pub disclaimer: &'static str,
}

/// Shown on every response; this service is advisory only
pub const DISCLAIMER: &str = "This tool is for educational purposes only and is not a substitute \
     for professional medical advice, diagnosis, or treatment.";

impl AssessmentResponse {
    pub fn build(
        assessment: RiskAssessment,
        text_score: Option<f64>,
        voice_score: Option<f64>,
        text_detail: Option<TextDetail>,
        voice_features: Option<VoiceFeatures>,
        warnings: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            text_score,
            voice_score,
            combined_score: assessment.combined_score,
            tier: assessment.tier,
            tier_label: assessment.tier.as_str().to_string(),
            tier_color: assessment.tier.color().to_string(),
            message: assessment.tier.message().to_string(),
            confidence: assessment.confidence,
            completeness: assessment.completeness,
            recommendations: assessment.recommendations,
            breakdown: assessment.breakdown,
            warnings,
            text_detail,
            voice_features,
            disclaimer: DISCLAIMER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::predictor;
    use validator::Validate;

    #[test]
    fn test_empty_text_fails_validation() {
        let req = TextAssessRequest { text: String::new() };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_build_carries_scores_through() {
        let assessment = predictor::predict(Some(6.0), Some(4.0));
        let response = AssessmentResponse::build(
            assessment,
            Some(6.0),
            Some(4.0),
            None,
            None,
            vec![],
        );
        assert_eq!(response.text_score, Some(6.0));
        assert_eq!(response.voice_score, Some(4.0));
        assert_eq!(response.tier_label, response.tier.as_str());
        assert!(response.warnings.is_empty());
    }
}
