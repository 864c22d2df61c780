//! Linguistic and emotional pattern sub-scores
//!
//! Word-ratio based indicators: self-focus, negation density, absolutist
//! language, and emotional indicator groups.

use super::lexicon;

/// Self-focus is only penalized above this ratio
const FIRST_PERSON_CUTOFF: f64 = 0.3;

const FIRST_PERSON_FACTOR: f64 = 10.0;
const NEGATION_FACTOR: f64 = 15.0;
const ABSOLUTE_FACTOR: f64 = 20.0;
const EMOTIONAL_FACTOR: f64 = 30.0;

/// Linguistic pattern sub-score in [0, 10].
///
/// Neutral 5.0 baseline, raised by excessive first-person usage, negation
/// density, and absolutist (black-and-white) language.
pub fn linguistic_score(tokens: &[String]) -> f64 {
    if tokens.is_empty() {
        return 5.0;
    }

    let total = tokens.len() as f64;

    let first_person = count_in(tokens, lexicon::FIRST_PERSON) as f64 / total;
    let negation = count_in(tokens, lexicon::NEGATION_WORDS) as f64 / total;
    let absolute = count_in(tokens, lexicon::ABSOLUTE_WORDS) as f64 / total;

    let mut risk = 5.0;

    if first_person > FIRST_PERSON_CUTOFF {
        risk += (first_person - FIRST_PERSON_CUTOFF) * FIRST_PERSON_FACTOR;
    }
    risk += negation * NEGATION_FACTOR;
    risk += absolute * ABSOLUTE_FACTOR;

    risk.min(10.0)
}

/// Emotional indicator sub-score in [0, 10].
///
/// Substring hits against sadness, anxiety, and hopelessness groups, with
/// hopelessness weighted double.
pub fn emotional_score(tokens: &[String]) -> f64 {
    if tokens.is_empty() {
        return 5.0;
    }

    let sadness = count_containing(tokens, lexicon::SADNESS_WORDS) as f64;
    let anxiety = count_containing(tokens, lexicon::ANXIETY_WORDS) as f64;
    let hopelessness = count_containing(tokens, lexicon::HOPELESSNESS_WORDS) as f64;

    let ratio = (sadness + anxiety + hopelessness * 2.0) / tokens.len() as f64;

    (5.0 + ratio * EMOTIONAL_FACTOR).min(10.0)
}

/// Keyword sub-score in [0, 10] plus the matched depression keywords.
pub fn keyword_score(tokens: &[String]) -> (f64, Vec<String>) {
    if tokens.is_empty() {
        return (5.0, vec![]);
    }

    let total = tokens.len() as f64;

    let matched: Vec<String> = tokens
        .iter()
        .filter(|t| lexicon::DEPRESSION_KEYWORDS.contains(&t.as_str()))
        .cloned()
        .collect();
    let depression_ratio = matched.len() as f64 / total;
    let positive_ratio = count_in(tokens, lexicon::POSITIVE_KEYWORDS) as f64 / total;

    let mut risk = 5.0;
    risk -= positive_ratio * 20.0;
    risk += depression_ratio * 30.0;

    let mut unique = matched;
    unique.sort();
    unique.dedup();

    (risk.clamp(0.0, 10.0), unique)
}

fn count_in(tokens: &[String], list: &[&str]) -> usize {
    tokens.iter().filter(|t| list.contains(&t.as_str())).count()
}

fn count_containing(tokens: &[String], list: &[&str]) -> usize {
    tokens
        .iter()
        .filter(|t| list.iter().any(|w| t.contains(w)))
        .count()
}
