//! Audio decoding
//!
//! Decodes uploaded audio (WAV/MP3/OGG/M4A) to a mono f32 waveform via
//! symphonia. Only the first channel is kept; peak normalization happens
//! later in feature extraction.

use std::io::Cursor;

use symphonia::core::audio::{AudioBufferRef, Signal};
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::conv::FromSample;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use super::super::AnalysisError;

/// Decoded waveform plus sample rate
#[derive(Debug, Clone)]
pub struct AudioInput {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

impl AudioInput {
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Decode an uploaded file into a mono waveform.
///
/// `filename` is only used as a container-format hint for the probe.
pub fn decode_bytes(bytes: Vec<u8>, filename: Option<&str>) -> Result<AudioInput, AnalysisError> {
    let mss = MediaSourceStream::new(Box::new(Cursor::new(bytes)), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = filename.and_then(|f| f.rsplit('.').next()) {
        hint.with_extension(&ext.to_lowercase());
    }

    let meta_opts: MetadataOptions = Default::default();
    let fmt_opts: FormatOptions = Default::default();

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &fmt_opts, &meta_opts)
        .map_err(|e| AnalysisError::Decode(e.to_string()))?;
    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| AnalysisError::Decode("no supported audio track".to_string()))?;

    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| AnalysisError::Decode("unknown sample rate".to_string()))?;

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| AnalysisError::Decode(e.to_string()))?;
    let track_id = track.id;

    let mut samples = Vec::new();
    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            // End of stream or unrecoverable container error
            Err(_) => break,
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(buffer) => append_channel0(&mut samples, buffer),
            // Recoverable per-packet decode errors are skipped
            Err(SymphoniaError::DecodeError(_)) => continue,
            Err(e) => return Err(AnalysisError::Decode(e.to_string())),
        }
    }

    if samples.is_empty() {
        return Err(AnalysisError::Decode("no decodable samples".to_string()));
    }

    Ok(AudioInput { samples, sample_rate })
}

/// Append channel 0 of a decoded buffer as f32, whatever the source format
fn append_channel0(samples: &mut Vec<f32>, buffer: AudioBufferRef<'_>) {
    fn conv<T>(samples: &mut Vec<f32>, chan: &[T])
    where
        T: symphonia::core::sample::Sample + Copy,
        f32: FromSample<T>,
    {
        samples.extend(chan.iter().map(|&s| f32::from_sample(s)));
    }

    match buffer {
        AudioBufferRef::F32(buf) => conv(samples, buf.chan(0)),
        AudioBufferRef::F64(buf) => conv(samples, buf.chan(0)),
        AudioBufferRef::S8(buf) => conv(samples, buf.chan(0)),
        AudioBufferRef::S16(buf) => conv(samples, buf.chan(0)),
        AudioBufferRef::S24(buf) => conv(samples, buf.chan(0)),
        AudioBufferRef::S32(buf) => conv(samples, buf.chan(0)),
        AudioBufferRef::U8(buf) => conv(samples, buf.chan(0)),
        AudioBufferRef::U16(buf) => conv(samples, buf.chan(0)),
        AudioBufferRef::U24(buf) => conv(samples, buf.chan(0)),
        AudioBufferRef::U32(buf) => conv(samples, buf.chan(0)),
    }
}

/// Build an in-memory 16-bit mono WAV from f32 samples (test fixture)
#[cfg(test)]
pub(crate) fn wav_bytes(samples: &[f32], sample_rate: u32) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
        for &s in samples {
            let v = (s.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
            writer.write_sample(v).unwrap();
        }
        writer.finalize().unwrap();
    }
    cursor.into_inner()
}
