//! Sample extraction from an in-memory recording
//!
//! The decoders read from files, so the recording is written to a named
//! temporary file first. The file is removed when the handle drops, on the
//! success path and on every error return.

use super::{decode_audio, AudioData, AudioFormat};
use crate::error::ValidationError;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Write an encoded recording to a temporary file named after its format
pub fn stage_recording(bytes: &[u8], format: AudioFormat) -> Result<NamedTempFile> {
    stage_recording_in(&std::env::temp_dir(), bytes, format)
}

fn stage_recording_in(dir: &Path, bytes: &[u8], format: AudioFormat) -> Result<NamedTempFile> {
    let suffix = format
        .extension()
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default();

    let mut staged = tempfile::Builder::new()
        .prefix("scalecheck-take-")
        .suffix(&suffix)
        .tempfile_in(dir)
        .context("Failed to create staging file")?;

    staged
        .write_all(bytes)
        .and_then(|_| staged.flush())
        .context("Failed to write staging file")?;

    Ok(staged)
}

/// Decode an encoded recording to mono samples at `sample_rate`.
///
/// Fails with [`ValidationError::AudioProcessingFailed`] when the buffer is
/// empty, cannot be staged or decoded, or decodes to zero frames.
pub fn extract_samples(bytes: &[u8], sample_rate: u32) -> Result<AudioData, ValidationError> {
    extract_samples_in(&std::env::temp_dir(), bytes, sample_rate)
}

fn extract_samples_in(
    dir: &Path,
    bytes: &[u8],
    sample_rate: u32,
) -> Result<AudioData, ValidationError> {
    if bytes.is_empty() {
        return Err(ValidationError::AudioProcessingFailed(
            "recording buffer is empty".to_string(),
        ));
    }

    let format = AudioFormat::from_bytes(bytes);
    log::debug!("Staging {} byte recording as {:?}", bytes.len(), format);

    let staged = stage_recording_in(dir, bytes, format).map_err(ValidationError::processing)?;

    let audio = decode_audio(staged.path(), sample_rate)
        .context("Failed to decode recording")
        .map_err(ValidationError::processing)?;

    if audio.samples.is_empty() {
        return Err(ValidationError::AudioProcessingFailed(
            "recording decoded to zero frames".to_string(),
        ));
    }

    log::info!(
        "Extracted {} samples ({:.2}s @ {}Hz)",
        audio.samples.len(),
        audio.duration_ms as f64 / 1000.0,
        audio.sample_rate
    );

    Ok(audio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tone::{encode_wav, synthesize_tone};

    #[test]
    fn test_staging_file_removed_on_drop() {
        let staged = stage_recording(b"RIFF", AudioFormat::Wav).unwrap();
        let path = staged.path().to_path_buf();
        assert!(path.exists());
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("wav"));
        assert_eq!(std::fs::read(&path).unwrap(), b"RIFF");

        drop(staged);
        assert!(!path.exists());
    }

    #[test]
    fn test_unknown_format_has_no_extension() {
        let staged = stage_recording(b"????", AudioFormat::Unknown).unwrap();
        assert!(staged.path().extension().is_none());
    }

    #[test]
    fn test_empty_buffer_fails() {
        let err = extract_samples(&[], 44100).unwrap_err();
        assert!(matches!(err, ValidationError::AudioProcessingFailed(_)));
    }

    #[test]
    fn test_garbage_buffer_fails() {
        let err = extract_samples(b"this is not a recording", 44100).unwrap_err();
        assert!(matches!(err, ValidationError::AudioProcessingFailed(_)));
    }

    #[test]
    fn test_truncated_wav_fails() {
        let err = extract_samples(b"RIFF\x24\x00\x00\x00WAVE", 44100).unwrap_err();
        assert!(matches!(err, ValidationError::AudioProcessingFailed(_)));
    }

    fn staged_files(dir: &Path) -> Vec<std::path::PathBuf> {
        std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect()
    }

    #[test]
    fn test_staging_dir_empty_after_success() {
        let dir = tempfile::tempdir().unwrap();
        let bytes = encode_wav(&synthesize_tone(440.0, 0.5, 44100), 44100).unwrap();

        let audio = extract_samples_in(dir.path(), &bytes, 44100).unwrap();
        assert!(!audio.samples.is_empty());
        assert!(staged_files(dir.path()).is_empty());
    }

    #[test]
    fn test_staging_dir_empty_after_decode_failure() {
        let dir = tempfile::tempdir().unwrap();

        for bytes in [
            &b"this is not a recording"[..],
            &b"RIFF\x24\x00\x00\x00WAVE"[..],
            &b"fLaC\x00\x00\x00"[..],
        ] {
            assert!(extract_samples_in(dir.path(), bytes, 44100).is_err());
            assert!(staged_files(dir.path()).is_empty(), "leftover for {:?}", bytes);
        }
    }

    #[test]
    fn test_staging_dir_empty_after_zero_frames() {
        let dir = tempfile::tempdir().unwrap();
        let bytes = encode_wav(&[], 44100).unwrap();

        assert!(extract_samples_in(dir.path(), &bytes, 44100).is_err());
        assert!(staged_files(dir.path()).is_empty());
    }
}
