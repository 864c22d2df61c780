//! Static word lists and sentiment lexicon
//!
//! All tables the text path matches against. No scoring logic here.

// ============================================================================
// KEYWORD LISTS (exact word matches)
// ============================================================================

/// Depression-related keywords; presence raises the keyword sub-score
pub const DEPRESSION_KEYWORDS: &[&str] = &[
    "sad", "depressed", "hopeless", "worthless", "empty", "lonely",
    "tired", "exhausted", "unmotivated", "anxious", "worried",
    "stressed", "overwhelmed", "isolated", "disconnected", "numb",
    "pain", "hurt", "suffering", "struggle", "difficult", "hard",
    "cannot", "unable", "impossible", "fail", "failure", "lost",
    "darkness", "heavy", "burden", "trapped", "stuck", "helpless",
];

/// Positive keywords; presence lowers the keyword sub-score
pub const POSITIVE_KEYWORDS: &[&str] = &[
    "happy", "joy", "excited", "great", "amazing", "wonderful", "fantastic",
    "good", "excellent", "love", "enjoyable", "pleasant", "cheerful",
    "optimistic", "positive", "grateful", "blessed", "content", "satisfied",
];

// ============================================================================
// LINGUISTIC PATTERN LISTS
// ============================================================================

/// First-person pronouns; only excessive self-focus is concerning
pub const FIRST_PERSON: &[&str] = &["i", "me", "my", "myself"];

/// Negation words
pub const NEGATION_WORDS: &[&str] = &[
    "no", "not", "never", "nothing", "nobody", "nowhere", "neither", "nor",
    "n't", "cant", "cannot", "wont", "dont", "isnt", "wasnt", "couldnt",
    "shouldnt", "wouldnt", "aint",
];

/// Absolutist words (black-and-white thinking)
pub const ABSOLUTE_WORDS: &[&str] = &[
    "always", "never", "all", "nothing", "everything", "everyone", "nobody",
];

// ============================================================================
// EMOTIONAL INDICATOR GROUPS (substring matches)
// ============================================================================

pub const SADNESS_WORDS: &[&str] = &[
    "sad", "depressed", "down", "blue", "melancholy", "sorrowful",
];

pub const ANXIETY_WORDS: &[&str] = &[
    "anxious", "worried", "nervous", "scared", "afraid", "panic",
];

/// Weighted double in the emotional sub-score
pub const HOPELESSNESS_WORDS: &[&str] = &[
    "hopeless", "helpless", "worthless", "pointless", "useless",
];

// ============================================================================
// SENTIMENT LEXICON (valence in [-1, 1])
// ============================================================================

/// Compact valence lexicon for polarity scoring. Values follow the usual
/// sentiment-lexicon convention: positive valence = positive sentiment.
pub const SENTIMENT_LEXICON: &[(&str, f64)] = &[
    // Strong positive
    ("amazing", 0.8), ("wonderful", 0.8), ("fantastic", 0.8), ("excellent", 0.8),
    ("love", 0.8), ("loved", 0.8), ("thrilled", 0.8), ("delighted", 0.8),
    ("joy", 0.75), ("joyful", 0.75), ("blessed", 0.7), ("grateful", 0.7),
    // Positive
    ("happy", 0.65), ("great", 0.6), ("good", 0.5), ("nice", 0.45),
    ("enjoy", 0.5), ("enjoyed", 0.5), ("enjoyable", 0.5), ("fun", 0.5),
    ("pleasant", 0.5), ("cheerful", 0.55), ("excited", 0.6), ("exciting", 0.55),
    ("hope", 0.4), ("hopeful", 0.5), ("optimistic", 0.55), ("positive", 0.45),
    ("calm", 0.4), ("relaxed", 0.45), ("content", 0.45), ("satisfied", 0.5),
    ("better", 0.35), ("improving", 0.4), ("improved", 0.4), ("proud", 0.55),
    ("laugh", 0.5), ("laughed", 0.5), ("smile", 0.45), ("friends", 0.3),
    ("energetic", 0.45), ("motivated", 0.45), ("accomplished", 0.5),
    ("peaceful", 0.45), ("thankful", 0.6), ("okay", 0.2), ("fine", 0.2),
    // Negative
    ("sad", -0.6), ("unhappy", -0.6), ("upset", -0.5), ("down", -0.35),
    ("bad", -0.5), ("terrible", -0.75), ("horrible", -0.75), ("awful", -0.7),
    ("cry", -0.55), ("crying", -0.55), ("cried", -0.55), ("tears", -0.45),
    ("tired", -0.35), ("exhausted", -0.5), ("drained", -0.45), ("weary", -0.4),
    ("lonely", -0.6), ("alone", -0.35), ("isolated", -0.55), ("abandoned", -0.6),
    ("anxious", -0.5), ("worried", -0.45), ("nervous", -0.4), ("scared", -0.55),
    ("afraid", -0.55), ("fear", -0.5), ("panic", -0.6), ("dread", -0.6),
    ("stressed", -0.5), ("overwhelmed", -0.55), ("pressure", -0.3),
    ("hurt", -0.55), ("pain", -0.55), ("painful", -0.55), ("suffering", -0.65),
    ("struggle", -0.45), ("struggling", -0.5), ("difficult", -0.35), ("hard", -0.25),
    ("angry", -0.55), ("hate", -0.7), ("hated", -0.7), ("annoyed", -0.4),
    ("fail", -0.55), ("failed", -0.55), ("failure", -0.6), ("lost", -0.4),
    ("guilt", -0.5), ("guilty", -0.5), ("ashamed", -0.55), ("shame", -0.55),
    ("numb", -0.5), ("empty", -0.55), ("dark", -0.35), ("darkness", -0.5),
    ("heavy", -0.3), ("burden", -0.5), ("trapped", -0.6), ("stuck", -0.4),
    // Strong negative
    ("depressed", -0.8), ("depressing", -0.7), ("hopeless", -0.85),
    ("helpless", -0.75), ("worthless", -0.85), ("useless", -0.7),
    ("pointless", -0.7), ("miserable", -0.8), ("despair", -0.85),
    ("devastated", -0.8), ("unbearable", -0.8), ("suicidal", -0.95),
];

/// Intensity modifiers applied to the following lexicon word.
/// Positive values amplify, negative values dampen.
pub const BOOSTERS: &[(&str, f64)] = &[
    ("very", 0.3), ("really", 0.3), ("extremely", 0.4), ("incredibly", 0.4),
    ("so", 0.25), ("totally", 0.3), ("absolutely", 0.4), ("completely", 0.35),
    ("deeply", 0.35), ("utterly", 0.4),
    ("slightly", -0.25), ("somewhat", -0.2), ("barely", -0.35), ("hardly", -0.35),
    ("kinda", -0.2), ("bit", -0.25),
];

/// Look up valence for a token
pub fn valence(token: &str) -> Option<f64> {
    SENTIMENT_LEXICON
        .iter()
        .find(|(w, _)| *w == token)
        .map(|(_, v)| *v)
}

/// Look up booster weight for a token
pub fn booster(token: &str) -> Option<f64> {
    BOOSTERS.iter().find(|(w, _)| *w == token).map(|(_, v)| *v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicon_valences_in_range() {
        for (word, v) in SENTIMENT_LEXICON {
            assert!((-1.0..=1.0).contains(v), "{} out of range", word);
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(valence("hopeless"), Some(-0.85));
        assert_eq!(valence("happy"), Some(0.65));
        assert_eq!(valence("table"), None);
        assert_eq!(booster("very"), Some(0.3));
    }

    #[test]
    fn test_keyword_lists_are_lowercase() {
        for w in DEPRESSION_KEYWORDS.iter().chain(POSITIVE_KEYWORDS.iter()) {
            assert_eq!(*w, w.to_lowercase());
        }
    }
}
