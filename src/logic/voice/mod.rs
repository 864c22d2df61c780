//! Voice Analyzer
//!
//! Decodes an uploaded recording and scores its delivery: pitch level and
//! variability, energy, speech rate, and pausing. Output is always in
//! [0, 10]; higher = more concerning.

pub mod decode;
pub mod features;

pub use decode::AudioInput;
pub use features::VoiceFeatures;

use serde::{Deserialize, Serialize};

use super::AnalysisError;

/// Result of analyzing one recording
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceAnalysis {
    /// Final voice score in [0, 10]
    pub score: f64,
    pub features: VoiceFeatures,
}

/// Voice analyzer over decoded audio
#[derive(Debug, Clone, Default)]
pub struct VoiceAnalyzer;

impl VoiceAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze a decoded waveform
    pub fn analyze(&self, input: &AudioInput) -> Result<VoiceAnalysis, AnalysisError> {
        let features = features::extract(input)?;
        let score = features::score(&features);

        tracing::debug!(
            pitch = features.mean_pitch_hz,
            energy = features.rms_energy,
            pause_ratio = features.pause_ratio,
            score,
            "voice analysis complete"
        );

        Ok(VoiceAnalysis { score, features })
    }

    /// Decode raw upload bytes and analyze them
    pub fn analyze_bytes(
        &self,
        bytes: Vec<u8>,
        filename: Option<&str>,
    ) -> Result<VoiceAnalysis, AnalysisError> {
        let input = decode::decode_bytes(bytes, filename)?;
        self.analyze(&input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_tone_in_range() {
        let sample_rate = 16_000u32;
        let samples: Vec<f32> = (0..sample_rate * 2)
            .map(|i| {
                (2.0 * std::f32::consts::PI * 180.0 * i as f32 / sample_rate as f32).sin() * 0.6
            })
            .collect();
        let analysis = VoiceAnalyzer::new()
            .analyze(&AudioInput { samples, sample_rate })
            .unwrap();
        assert!((0.0..=10.0).contains(&analysis.score));
        assert!(analysis.features.mean_pitch_hz > 0.0);
    }

    #[test]
    fn test_analyze_bytes_rejects_garbage() {
        let result = VoiceAnalyzer::new().analyze_bytes(vec![1, 2, 3, 4], Some("x.ogg"));
        assert!(matches!(result, Err(AnalysisError::Decode(_))));
    }
}
