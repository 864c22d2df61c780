//! Analysis logic
//!
//! The two feature extractors (text, voice) and the predictor that blends
//! their scores. Everything here is a pure function of its input; nothing
//! is stored between requests.

pub mod text;
pub mod voice;
pub mod predictor;


use thiserror::Error;

/// Score returned when an input cannot be analyzed
pub const NEUTRAL_SCORE: f64 = 5.0;

/// Recoverable analysis failures. Handlers degrade these to the neutral
/// default score with a user-visible warning; none of them are fatal.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("text input is empty")]
    EmptyText,

    #[error("text is too short to analyze (need at least {0} characters)")]
    TextTooShort(usize),

    #[error("could not decode audio: {0}")]
    Decode(String),

    #[error("recording is effectively silent")]
    SilentAudio,

    #[error("recording too short ({0:.1}s); minimum is {min}s", min = voice::features::MIN_DURATION_SECS)]
    TooShort(f64),

    #[error("recording too long ({0:.0}s); maximum is {max}s", max = voice::features::MAX_DURATION_SECS)]
    TooLong(f64),
}
