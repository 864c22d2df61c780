//! Voice Feature Extraction
//!
//! Five statistics over the normalized waveform: mean pitch, pitch
//! variability, RMS energy, estimated speech rate, and pause ratio.
//! Each maps piecewise-linearly onto a [0, 10] risk sub-score; a fixed
//! weighting averages them into the voice score.

use serde::{Deserialize, Serialize};

use super::decode::AudioInput;
use super::super::AnalysisError;

// ============================================================================
// SANITY BOUNDS
// ============================================================================

/// Recordings shorter than this cannot be analyzed
pub const MIN_DURATION_SECS: f64 = 0.5;

/// Recordings longer than this are rejected
pub const MAX_DURATION_SECS: f64 = 300.0;

/// Below this a recording counts as reliable; shorter clips get a
/// conservative adjustment
pub const RELIABLE_DURATION_SECS: f64 = 3.0;
const SHORT_CLIP_ADJUSTMENT: f64 = 1.0;

// ============================================================================
// SIGNAL CONSTANTS
// ============================================================================

/// Peak amplitude below this = effectively silent
const SILENCE_PEAK: f32 = 1e-4;

/// Normalized samples under this magnitude count as pause
const PAUSE_THRESHOLD: f32 = 0.01;

/// Pitch search band (Hz), covering typical speaking voices
const PITCH_MIN_HZ: f64 = 65.0;
const PITCH_MAX_HZ: f64 = 400.0;

/// Normalized autocorrelation peak needed to call a frame voiced
const VOICING_THRESHOLD: f64 = 0.5;

/// Frame RMS needed before attempting pitch detection
const FRAME_ENERGY_GATE: f64 = 0.02;

/// Pitch analysis frame length in seconds (long enough for two periods
/// of the lowest searched pitch)
const FRAME_SECS: f64 = 0.05;

// ============================================================================
// SUB-SCORE WEIGHTS
// ============================================================================

const PITCH_MEAN_WEIGHT: f64 = 0.15;
const PITCH_VAR_WEIGHT: f64 = 0.20;
const ENERGY_WEIGHT: f64 = 0.25;
const RATE_WEIGHT: f64 = 0.15;
const PAUSE_WEIGHT: f64 = 0.25;

/// Extracted voice statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceFeatures {
    /// Mean fundamental frequency over voiced frames (Hz); 0 if unvoiced
    pub mean_pitch_hz: f64,
    /// Pitch standard deviation over voiced frames (Hz)
    pub pitch_std_hz: f64,
    /// RMS energy of the peak-normalized signal
    pub rms_energy: f64,
    /// Zero-crossing based speech rate proxy (crossings per second / 2)
    pub speech_rate: f64,
    /// Fraction of samples under the pause threshold
    pub pause_ratio: f64,
    /// Fraction of analysis frames judged voiced
    pub voiced_ratio: f64,
    pub duration_secs: f64,
}

/// Extract features from decoded audio.
///
/// Fails on out-of-bounds duration or effectively silent input; the caller
/// degrades those to the neutral default.
pub fn extract(input: &AudioInput) -> Result<VoiceFeatures, AnalysisError> {
    let duration = input.duration_secs();
    if duration < MIN_DURATION_SECS {
        return Err(AnalysisError::TooShort(duration));
    }
    if duration > MAX_DURATION_SECS {
        return Err(AnalysisError::TooLong(duration));
    }

    let peak = input.samples.iter().fold(0.0f32, |m, s| m.max(s.abs()));
    if peak < SILENCE_PEAK {
        return Err(AnalysisError::SilentAudio);
    }

    // Peak-normalize for amplitude-independent thresholds
    let samples: Vec<f32> = input.samples.iter().map(|s| s / peak).collect();

    let rms_energy = rms(&samples);
    let speech_rate = zero_crossing_rate(&samples, duration);
    let pause_ratio = pause_ratio(&samples);
    let (mean_pitch_hz, pitch_std_hz, voiced_ratio) =
        pitch_stats(&samples, input.sample_rate);

    Ok(VoiceFeatures {
        mean_pitch_hz,
        pitch_std_hz,
        rms_energy,
        speech_rate,
        pause_ratio,
        voiced_ratio,
        duration_secs: duration,
    })
}

/// Map features to the voice risk score in [0, 10]
pub fn score(features: &VoiceFeatures) -> f64 {
    let pitch_sub = if features.voiced_ratio > 0.0 {
        // Lower speaking pitch reads as flatter affect
        lerp_risk(features.mean_pitch_hz, 100.0, 240.0, 7.5, 3.5)
    } else {
        5.0
    };

    let pitch_var_sub = if features.voiced_ratio > 0.0 {
        // Monotone speech (low variability) is the concern
        lerp_risk(features.pitch_std_hz, 10.0, 60.0, 8.0, 3.0)
    } else {
        5.0
    };

    // Low energy delivery raises risk
    let energy_sub = lerp_risk(features.rms_energy, 0.02, 0.25, 8.0, 3.0);

    // Both unusually slow and unusually fast speech depart from neutral
    let rate_sub = if features.speech_rate < 120.0 {
        lerp_risk(features.speech_rate, 40.0, 120.0, 8.0, 4.0)
    } else if features.speech_rate > 280.0 {
        lerp_risk(features.speech_rate, 280.0, 500.0, 4.0, 7.0)
    } else {
        4.0
    };

    // Frequent pausing raises risk
    let pause_sub = 3.0 + features.pause_ratio * 7.0;

    let mut risk = pitch_sub * PITCH_MEAN_WEIGHT
        + pitch_var_sub * PITCH_VAR_WEIGHT
        + energy_sub * ENERGY_WEIGHT
        + rate_sub * RATE_WEIGHT
        + pause_sub * PAUSE_WEIGHT;

    // Very short clips are less reliable; stay conservative
    if features.duration_secs < RELIABLE_DURATION_SECS {
        risk += SHORT_CLIP_ADJUSTMENT;
    }

    risk.clamp(0.0, 10.0)
}

/// Piecewise-linear map of `value` from [lo, hi] onto [risk_lo, risk_hi],
/// clamped at both ends
fn lerp_risk(value: f64, lo: f64, hi: f64, risk_lo: f64, risk_hi: f64) -> f64 {
    let t = ((value - lo) / (hi - lo)).clamp(0.0, 1.0);
    risk_lo + (risk_hi - risk_lo) * t
}

fn rms(samples: &[f32]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = samples.iter().map(|&s| (s as f64) * (s as f64)).sum();
    (sum_sq / samples.len() as f64).sqrt()
}

/// Zero crossings / (2 x duration), the classic cheap speech-rate proxy
fn zero_crossing_rate(samples: &[f32], duration: f64) -> f64 {
    if duration <= 0.0 {
        return 0.0;
    }
    let crossings = samples
        .windows(2)
        .filter(|w| (w[0] >= 0.0) != (w[1] >= 0.0))
        .count();
    crossings as f64 / (duration * 2.0)
}

fn pause_ratio(samples: &[f32]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let silent = samples.iter().filter(|s| s.abs() < PAUSE_THRESHOLD).count();
    silent as f64 / samples.len() as f64
}

/// Frame-wise autocorrelation pitch tracking.
///
/// Returns (mean pitch Hz, pitch std dev Hz, voiced frame ratio); zeros
/// when no frame passes the voicing test.
fn pitch_stats(samples: &[f32], sample_rate: u32) -> (f64, f64, f64) {
    let sr = sample_rate as f64;
    let frame_len = (sr * FRAME_SECS) as usize;
    let hop = frame_len / 2;
    let lag_min = (sr / PITCH_MAX_HZ) as usize;
    let lag_max = (sr / PITCH_MIN_HZ) as usize;

    if frame_len == 0 || hop == 0 || lag_max >= frame_len || lag_min < 2 {
        return (0.0, 0.0, 0.0);
    }

    let mut pitches = Vec::new();
    let mut frames = 0usize;

    let mut start = 0;
    while start + frame_len <= samples.len() {
        let frame = &samples[start..start + frame_len];
        frames += 1;

        if rms(frame) >= FRAME_ENERGY_GATE {
            if let Some(freq) = frame_pitch(frame, sr, lag_min, lag_max) {
                pitches.push(freq);
            }
        }

        start += hop;
    }

    if pitches.is_empty() || frames == 0 {
        return (0.0, 0.0, 0.0);
    }

    let n = pitches.len() as f64;
    let mean = pitches.iter().sum::<f64>() / n;
    let variance = pitches.iter().map(|p| (p - mean).powi(2)).sum::<f64>() / n;

    (mean, variance.sqrt(), pitches.len() as f64 / frames as f64)
}

/// Best-lag normalized autocorrelation over one frame
fn frame_pitch(frame: &[f32], sample_rate: f64, lag_min: usize, lag_max: usize) -> Option<f64> {
    let energy: f64 = frame.iter().map(|&s| (s as f64) * (s as f64)).sum();
    if energy <= f64::EPSILON {
        return None;
    }

    let mut best_lag = 0usize;
    let mut best_corr = 0.0f64;

    for lag in lag_min..=lag_max {
        let mut corr = 0.0f64;
        for i in 0..frame.len() - lag {
            corr += frame[i] as f64 * frame[i + lag] as f64;
        }
        let normalized = corr / energy;
        if normalized > best_corr {
            best_corr = normalized;
            best_lag = lag;
        }
    }

    if best_corr >= VOICING_THRESHOLD && best_lag > 0 {
        Some(sample_rate / best_lag as f64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SR: u32 = 16_000;

    /// Sine tone at `freq` Hz for `secs` seconds at amplitude `amp`
    fn tone(freq: f64, secs: f64, amp: f32) -> Vec<f32> {
        let n = (SR as f64 * secs) as usize;
        (0..n)
            .map(|i| (2.0 * std::f64::consts::PI * freq * i as f64 / SR as f64).sin() as f32 * amp)
            .collect()
    }

    fn input(samples: Vec<f32>) -> AudioInput {
        AudioInput { samples, sample_rate: SR }
    }

    #[test]
    fn test_too_short_rejected() {
        let clip = input(tone(150.0, 0.2, 0.8));
        assert!(matches!(extract(&clip), Err(AnalysisError::TooShort(_))));
    }

    #[test]
    fn test_too_long_rejected() {
        // Duration bounds are checked before the silence gate
        let clip = input(vec![0.0; SR as usize * 301]);
        assert!(matches!(extract(&clip), Err(AnalysisError::TooLong(_))));
    }

    #[test]
    fn test_silent_rejected() {
        let clip = input(vec![0.0; SR as usize * 2]);
        assert!(matches!(extract(&clip), Err(AnalysisError::SilentAudio)));
    }

    #[test]
    fn test_pitch_detection_on_pure_tone() {
        let clip = input(tone(150.0, 2.0, 0.8));
        let features = extract(&clip).unwrap();
        assert!(
            (features.mean_pitch_hz - 150.0).abs() < 10.0,
            "detected {}",
            features.mean_pitch_hz
        );
        // A constant tone has almost no pitch variability
        assert!(features.pitch_std_hz < 5.0);
        assert!(features.voiced_ratio > 0.9);
    }

    #[test]
    fn test_pause_ratio_on_half_silence() {
        let mut samples = tone(150.0, 1.0, 0.8);
        samples.extend(std::iter::repeat(0.0f32).take(SR as usize));
        let features = extract(&input(samples)).unwrap();
        assert!(
            (features.pause_ratio - 0.5).abs() < 0.1,
            "pause ratio {}",
            features.pause_ratio
        );
    }

    #[test]
    fn test_score_in_range() {
        let quiet = input(tone(90.0, 4.0, 0.05));
        let loud = input(tone(220.0, 4.0, 0.9));
        for clip in [quiet, loud] {
            let features = extract(&clip).unwrap();
            let s = score(&features);
            assert!((0.0..=10.0).contains(&s), "score {}", s);
        }
    }

    #[test]
    fn test_short_clip_scores_more_conservative() {
        let long = extract(&input(tone(150.0, 4.0, 0.8))).unwrap();
        let short = extract(&input(tone(150.0, 1.0, 0.8))).unwrap();
        // Same signal, shorter clip gets the conservative bump
        assert!(score(&short) > score(&long));
    }

    #[test]
    fn test_lerp_risk_clamps() {
        assert_eq!(lerp_risk(-100.0, 0.0, 1.0, 8.0, 3.0), 8.0);
        assert_eq!(lerp_risk(100.0, 0.0, 1.0, 8.0, 3.0), 3.0);
        assert_eq!(lerp_risk(0.5, 0.0, 1.0, 8.0, 3.0), 5.5);
    }
}
