//! Lexicon-based sentiment polarity
//!
//! Compact valence scoring in the usual lexicon-and-rules style: per-word
//! valence with negation flipping, intensity boosters, and exclamation
//! emphasis, normalized into [-1, 1].

use super::lexicon;

/// Negated words keep this fraction of their (flipped) valence
const NEGATION_SCALAR: f64 = -0.74;

/// How many preceding tokens to scan for a negation
const NEGATION_WINDOW: usize = 3;

/// Normalization constant; keeps long rants from saturating instantly
const NORMALIZATION_ALPHA: f64 = 15.0;

/// Per-exclamation-mark emphasis (capped)
const EXCLAMATION_BOOST: f64 = 0.1;
const MAX_EXCLAMATIONS: usize = 3;

/// Compute sentiment polarity of the text in [-1, 1].
///
/// Positive = positive sentiment. Empty or lexicon-free text scores 0.
pub fn polarity(tokens: &[String], raw_text: &str) -> f64 {
    let mut total = 0.0f64;

    for (i, token) in tokens.iter().enumerate() {
        let Some(mut v) = lexicon::valence(token) else {
            continue;
        };

        // Intensity booster directly before the word
        if i > 0 {
            if let Some(b) = lexicon::booster(&tokens[i - 1]) {
                v *= 1.0 + b;
            }
        }

        // Negation within the preceding window flips and dampens
        let window_start = i.saturating_sub(NEGATION_WINDOW);
        if tokens[window_start..i]
            .iter()
            .any(|t| lexicon::NEGATION_WORDS.contains(&t.as_str()))
        {
            v *= NEGATION_SCALAR;
        }

        total += v;
    }

    // Exclamation marks amplify whatever direction the text leans
    let exclamations = raw_text.matches('!').count().min(MAX_EXCLAMATIONS);
    total *= 1.0 + exclamations as f64 * EXCLAMATION_BOOST;

    normalize(total)
}

/// Risk sub-score from polarity: +1 sentiment = 0 risk, -1 = 10, 0 = 5
pub fn risk_score(polarity: f64) -> f64 {
    (5.0 - polarity * 5.0).clamp(0.0, 10.0)
}

/// Positive / negative / neutral breakdown for the detail view
pub fn breakdown(polarity: f64) -> (f64, f64, f64) {
    let positive = polarity.max(0.0);
    let negative = (-polarity).max(0.0);
    let neutral = 1.0 - polarity.abs();
    (positive, negative, neutral)
}

fn normalize(score: f64) -> f64 {
    let norm = score / (score * score + NORMALIZATION_ALPHA).sqrt();
    norm.clamp(-1.0, 1.0)
}
