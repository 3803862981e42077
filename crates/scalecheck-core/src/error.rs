//! Error types for scale validation

use thiserror::Error;

/// Reasons a validation run could not produce a result.
///
/// Any of these means "could not analyze", which callers should keep distinct
/// from a result that ran and scored low.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Decoding, staging or sample extraction failed.
    #[error("audio processing failed: {0}")]
    AudioProcessingFailed(String),

    /// Reserved for input the extractor recognises as malformed.
    #[error("invalid audio format")]
    InvalidAudioFormat,

    /// Reserved for callers that have no recording to submit.
    #[error("no audio data")]
    NoAudioData,
}

impl ValidationError {
    pub(crate) fn processing(err: anyhow::Error) -> Self {
        // {:#} keeps the whole context chain on one line
        ValidationError::AudioProcessingFailed(format!("{:#}", err))
    }
}

/// Errors from parsing a textual note name such as `"F#3"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteError {
    #[error("empty note name")]
    Empty,

    #[error("unknown pitch class in note name: {0}")]
    UnknownPitchClass(String),

    #[error("missing or invalid octave in note name: {0}")]
    InvalidOctave(String),
}
