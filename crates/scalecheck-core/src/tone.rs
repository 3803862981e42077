//! Reference tone synthesis
//!
//! Renders the sine tones a practice session plays back for a scale. Output
//! is plain samples (or WAV bytes); scheduling playback is up to the caller.

use crate::notes::{note_to_frequency, A4_FREQUENCY};
use anyhow::{Context, Result};
use std::io::Cursor;

/// Peak amplitude of a rendered tone
pub const TONE_AMPLITUDE: f32 = 0.25;
/// Linear fade in/out length (seconds)
pub const FADE_SECONDS: f64 = 0.05;
/// Length of a single previewed note (seconds)
pub const NOTE_PREVIEW_SECONDS: f64 = 0.8;
/// Length of each note when a whole scale is rendered (seconds)
pub const SCALE_NOTE_SECONDS: f64 = 0.6;
/// Silence between scale notes (seconds)
pub const SCALE_GAP_SECONDS: f64 = 0.1;

/// Render a sine at `frequency` with a short fade at both ends
pub fn synthesize_tone(frequency: f64, duration: f64, sample_rate: u32) -> Vec<f32> {
    let frame_count = (sample_rate as f64 * duration).round() as usize;

    (0..frame_count)
        .map(|frame| {
            let time = frame as f64 / sample_rate as f64;
            let envelope = if time < FADE_SECONDS {
                time / FADE_SECONDS
            } else if time > duration - FADE_SECONDS {
                (duration - time) / FADE_SECONDS
            } else {
                1.0
            };

            let phase = 2.0 * std::f64::consts::PI * frequency * time;
            TONE_AMPLITUDE * envelope as f32 * phase.sin() as f32
        })
        .collect()
}

/// Render one note; names that don't parse fall back to A4
pub fn synthesize_note(name: &str, duration: f64, sample_rate: u32) -> Vec<f32> {
    let frequency = note_to_frequency(name).unwrap_or_else(|e| {
        log::warn!("{}, playing A4 instead", e);
        A4_FREQUENCY
    });
    synthesize_tone(frequency, duration, sample_rate)
}

/// Render every note of a scale in order, separated by short silences
pub fn synthesize_scale<S: AsRef<str>>(notes: &[S], sample_rate: u32) -> Vec<f32> {
    let gap = vec![0.0; (sample_rate as f64 * SCALE_GAP_SECONDS).round() as usize];
    let mut samples = Vec::new();

    for note in notes {
        samples.extend(synthesize_note(note.as_ref(), SCALE_NOTE_SECONDS, sample_rate));
        samples.extend_from_slice(&gap);
    }

    samples
}

/// Encode mono samples as 16-bit PCM WAV bytes
pub fn encode_wav(samples: &[f32], sample_rate: u32) -> Result<Vec<u8>> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec).context("Failed to start WAV stream")?;
        for &sample in samples {
            let value = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
            writer.write_sample(value).context("Failed to write WAV sample")?;
        }
        writer.finalize().context("Failed to finalize WAV stream")?;
    }

    Ok(cursor.into_inner())
}
