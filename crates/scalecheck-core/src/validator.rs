//! End-to-end scale validation
//!
//! decode -> pitch detection -> segmentation -> matching -> feedback.
//! Only decoding can fail; every later stage is total over its input.

use crate::audio::extract_samples;
use crate::config::ValidationConfig;
use crate::error::ValidationError;
use crate::feedback::generate_feedback;
use crate::matching::ScaleMatch;
use crate::pitch::PitchDetector;
use crate::segmentation::{DetectedNote, NoteSegmenter};
use serde::{Deserialize, Serialize};

/// Outcome of one validation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleValidationResult {
    /// `accuracy >= passing_accuracy`
    pub is_valid: bool,
    /// Cleaned, time-ordered notes heard in the recording
    pub detected_notes: Vec<DetectedNote>,
    /// The scale the recording was checked against
    pub expected_notes: Vec<String>,
    /// One flag per expected note
    pub matched_notes: Vec<bool>,
    /// Fraction of expected notes matched
    pub accuracy: f64,
    /// Multi-line summary for display
    pub feedback: String,
}

/// Validates recordings against expected scales
pub struct ScaleValidator {
    config: ValidationConfig,
}

impl ScaleValidator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate an encoded recording against `expected`
    pub fn validate<S: AsRef<str>>(
        &self,
        audio_bytes: &[u8],
        expected: &[S],
    ) -> Result<ScaleValidationResult, ValidationError> {
        let expected: Vec<String> = expected.iter().map(|n| n.as_ref().to_string()).collect();
        log::info!("Validating recording against: {}", expected.join(", "));

        let audio = extract_samples(audio_bytes, self.config.analysis.sample_rate)?;
        Ok(self.score_samples(&audio.samples, audio.sample_rate, expected))
    }

    /// Score already-decoded mono samples. Never fails.
    pub fn score_samples(
        &self,
        samples: &[f32],
        sample_rate: u32,
        expected: Vec<String>,
    ) -> ScaleValidationResult {
        let estimates = PitchDetector::new(&self.config.analysis).detect(samples, sample_rate);
        let detected_notes = NoteSegmenter::new(&self.config).process(&estimates);
        let scale_match = ScaleMatch::compute(&detected_notes, &expected);

        let feedback = generate_feedback(
            &scale_match.matched_notes,
            &detected_notes,
            &expected,
            scale_match.accuracy,
            self.config.passing_accuracy,
        );

        log::info!(
            "Scored {}/{} notes ({:.0}%), {}",
            scale_match.matched_count(),
            expected.len(),
            scale_match.accuracy * 100.0,
            if feedback.is_valid { "passed" } else { "failed" }
        );

        ScaleValidationResult {
            is_valid: feedback.is_valid,
            detected_notes,
            expected_notes: expected,
            matched_notes: scale_match.matched_notes,
            accuracy: scale_match.accuracy,
            feedback: feedback.summary,
        }
    }
}

impl Default for ScaleValidator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}

/// Validate a recording on the blocking thread pool.
///
/// The pipeline is CPU-bound, so it runs off the calling task. The whole
/// call either completes or fails; there is no partial result.
pub async fn validate_scale(
    audio_bytes: Vec<u8>,
    expected: Vec<String>,
    config: ValidationConfig,
) -> Result<ScaleValidationResult, ValidationError> {
    tokio::task::spawn_blocking(move || ScaleValidator::new(config).validate(&audio_bytes, &expected))
        .await
        .map_err(|e| ValidationError::AudioProcessingFailed(format!("validation task failed: {}", e)))?
}
