//! scalecheck core - scale performance validation
//!
//! Decodes a recorded take, estimates the pitch of each analysis window,
//! reduces the estimates to a sequence of sustained notes and scores that
//! sequence against an expected scale.

pub mod audio;
pub mod config;
pub mod error;
pub mod feedback;
pub mod matching;
pub mod notes;
pub mod pitch;
pub mod scales;
pub mod segmentation;
pub mod tone;
pub mod validator;

pub use config::{AnalysisConfig, ValidationConfig};
pub use error::{NoteError, ValidationError};
pub use matching::ScaleMatch;
pub use notes::{frequency_to_note, note_to_frequency};
pub use pitch::{PitchDetector, PitchEstimate};
pub use scales::ScaleDefinition;
pub use segmentation::{DetectedNote, NoteSegmenter};
pub use validator::{validate_scale, ScaleValidationResult, ScaleValidator};

/// Validate an encoded recording against an expected scale
pub fn validate<S: AsRef<str>>(
    audio_bytes: &[u8],
    expected_scale: &[S],
    config: &ValidationConfig,
) -> Result<ScaleValidationResult, ValidationError> {
    ScaleValidator::new(config.clone()).validate(audio_bytes, expected_scale)
}
