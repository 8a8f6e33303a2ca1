//! Silent placeholder audio
//!
//! Some hosts play speech directly but still want a clip to hand to an audio
//! player widget. This module packages a silent WAV whose duration roughly
//! matches the expected speaking time, so the player's progress bar lines up
//! with the vocalization.
//!
//! Format: canonical 44-byte RIFF header, mono, 8-bit unsigned PCM at
//! 44.1 kHz. One sample per data byte.

/// Sample rate of the placeholder clip.
pub const SAMPLE_RATE: u32 = 44_100;

/// Midpoint of the unsigned 8-bit sample range, i.e. silence.
const SILENCE: u8 = 127;

/// Estimated speaking time in seconds: a tenth of a second per character,
/// never less than one second.
pub fn estimate_duration_secs(text: &str) -> f64 {
    (text.chars().count() as f64 * 0.1).max(1.0)
}

/// Package a silent WAV clip sized to the estimated speaking time of `text`.
pub fn silent_wav(text: &str) -> Vec<u8> {
    let samples = (SAMPLE_RATE as f64 * estimate_duration_secs(text)) as usize;
    let mut buf = Vec::with_capacity(44 + samples);

    // RIFF chunk descriptor.
    buf.extend_from_slice(b"RIFF");
    buf.extend_from_slice(&(36 + samples as u32).to_le_bytes());
    buf.extend_from_slice(b"WAVE");

    // fmt subchunk: PCM, mono, 8 bits per sample.
    buf.extend_from_slice(b"fmt ");
    buf.extend_from_slice(&16u32.to_le_bytes());
    buf.extend_from_slice(&1u16.to_le_bytes()); // audio format: PCM
    buf.extend_from_slice(&1u16.to_le_bytes()); // channels
    buf.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    buf.extend_from_slice(&SAMPLE_RATE.to_le_bytes()); // byte rate (1 byte/sample)
    buf.extend_from_slice(&1u16.to_le_bytes()); // block align
    buf.extend_from_slice(&8u16.to_le_bytes()); // bits per sample

    // data subchunk.
    buf.extend_from_slice(b"data");
    buf.extend_from_slice(&(samples as u32).to_le_bytes());
    buf.resize(44 + samples, SILENCE);

    buf
}
