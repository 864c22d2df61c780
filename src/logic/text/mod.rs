//! Text Analyzer
//!
//! Scores free text for depression-risk indicators by combining four
//! weighted sub-scores: sentiment polarity, keyword presence, linguistic
//! patterns, and emotional indicators. Output is always in [0, 10];
//! higher = more concerning.

pub mod lexicon;
pub mod sentiment;
pub mod patterns;

use serde::{Deserialize, Serialize};

use super::AnalysisError;

// Sub-score weights; sentiment dominates
const SENTIMENT_WEIGHT: f64 = 0.5;
const KEYWORD_WEIGHT: f64 = 0.3;
const LINGUISTIC_WEIGHT: f64 = 0.15;
const EMOTIONAL_WEIGHT: f64 = 0.05;

/// Strongly positive sentiment caps the final score at this value
const POSITIVE_CAP_TRIGGER: f64 = 3.0;
const POSITIVE_CAP: f64 = 3.0;

/// Result of analyzing one text input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextAnalysis {
    /// Final text score in [0, 10]
    pub score: f64,
    pub sentiment_score: f64,
    pub keyword_score: f64,
    pub linguistic_score: f64,
    pub emotional_score: f64,
    pub detail: TextDetail,
}

/// Detail view for the results page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextDetail {
    pub sentiment_positive: f64,
    pub sentiment_negative: f64,
    pub sentiment_neutral: f64,
    /// Depression keywords found in the text (deduplicated)
    pub matched_keywords: Vec<String>,
    pub word_count: usize,
}

/// Text analyzer with a minimum-length gate
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    min_chars: usize,
}

impl TextAnalyzer {
    pub fn new(min_chars: usize) -> Self {
        Self { min_chars }
    }

    /// Analyze text and return a risk score with detail.
    ///
    /// Empty or too-short input is an error the caller degrades to the
    /// neutral default.
    pub fn analyze(&self, text: &str) -> Result<TextAnalysis, AnalysisError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(AnalysisError::EmptyText);
        }
        if trimmed.chars().count() < self.min_chars {
            return Err(AnalysisError::TextTooShort(self.min_chars));
        }

        let cleaned = preprocess(trimmed);
        let tokens = tokenize(&cleaned);

        let polarity = sentiment::polarity(&tokens, trimmed);
        let sentiment_score = sentiment::risk_score(polarity);
        let (keyword_score, matched_keywords) = patterns::keyword_score(&tokens);
        let linguistic_score = patterns::linguistic_score(&tokens);
        let emotional_score = patterns::emotional_score(&tokens);

        let mut score = sentiment_score * SENTIMENT_WEIGHT
            + keyword_score * KEYWORD_WEIGHT
            + linguistic_score * LINGUISTIC_WEIGHT
            + emotional_score * EMOTIONAL_WEIGHT;

        // Strongly positive sentiment caps the overall risk
        if sentiment_score < POSITIVE_CAP_TRIGGER {
            score = score.min(POSITIVE_CAP);
        }

        let (pos, neg, neu) = sentiment::breakdown(polarity);

        Ok(TextAnalysis {
            score: score.clamp(0.0, 10.0),
            sentiment_score,
            keyword_score,
            linguistic_score,
            emotional_score,
            detail: TextDetail {
                sentiment_positive: pos,
                sentiment_negative: neg,
                sentiment_neutral: neu,
                matched_keywords,
                word_count: tokens.len(),
            },
        })
    }
}

/// Lowercase, collapse whitespace, strip special characters but keep
/// sentence punctuation for the sentiment pass.
fn preprocess(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut cleaned = String::with_capacity(lowered.len());
    let mut last_was_space = false;

    for c in lowered.chars() {
        if c.is_whitespace() {
            if !last_was_space && !cleaned.is_empty() {
                cleaned.push(' ');
            }
            last_was_space = true;
        } else if c.is_alphanumeric() || matches!(c, '.' | ',' | '!' | '?' | ';' | ':' | '\'') {
            cleaned.push(c);
            last_was_space = false;
        }
    }

    cleaned.trim_end().to_string()
}

/// Split cleaned text into lowercase word tokens (punctuation stripped)
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|w| {
            w.chars()
                .filter(|c| c.is_alphanumeric() || *c == '\'')
                .collect::<String>()
        })
        .filter(|w| !w.is_empty())
        .collect()
}
