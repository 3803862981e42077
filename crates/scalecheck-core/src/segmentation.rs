//! Note segmentation
//!
//! Turns the per-window pitch estimates into a sequence of sustained notes:
//! estimates below the confidence threshold are dropped, the rest are named,
//! runs of the same name collapse into one note, and notes held for less than
//! the minimum duration are discarded.

use crate::config::ValidationConfig;
use crate::notes::frequency_to_note;
use crate::pitch::PitchEstimate;
use serde::{Deserialize, Serialize};

/// A named pitch event in the recording
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedNote {
    /// Nearest equal-tempered note, e.g. "F#3"
    pub note_name: String,
    /// Measured frequency in Hz
    pub frequency: f64,
    /// Seconds from the start of the recording
    pub timestamp: f64,
    /// Detection confidence in [0, 1]
    pub confidence: f64,
}

impl DetectedNote {
    pub fn from_estimate(estimate: &PitchEstimate) -> Self {
        Self {
            note_name: frequency_to_note(estimate.frequency),
            frequency: estimate.frequency,
            timestamp: estimate.time,
            confidence: estimate.confidence,
        }
    }
}

/// Collapses per-window notes into sustained notes
pub struct NoteSegmenter {
    confidence_threshold: f64,
    minimum_note_duration: f64,
}

impl NoteSegmenter {
    pub fn new(config: &ValidationConfig) -> Self {
        Self {
            confidence_threshold: config.confidence_threshold,
            minimum_note_duration: config.minimum_note_duration,
        }
    }

    /// Name every estimate that meets the confidence threshold
    pub fn label(&self, estimates: &[PitchEstimate]) -> Vec<DetectedNote> {
        estimates
            .iter()
            .filter(|e| e.confidence >= self.confidence_threshold)
            .map(DetectedNote::from_estimate)
            .collect()
    }

    /// Collapse runs of identical note names.
    ///
    /// Each run is represented by its first note. A run is kept only if the
    /// next run starts at least `minimum_note_duration` after it; the final
    /// run has nothing to bound it and is always kept.
    pub fn segment(&self, notes: &[DetectedNote]) -> Vec<DetectedNote> {
        let Some((first, rest)) = notes.split_first() else {
            return Vec::new();
        };

        let mut cleaned = Vec::new();
        let mut current = first;

        for note in rest {
            if note.note_name == current.note_name {
                continue;
            }

            let held = note.timestamp - current.timestamp;
            if held >= self.minimum_note_duration {
                cleaned.push(current.clone());
            } else {
                log::trace!(
                    "Dropping {} at {:.3}s (held {:.3}s)",
                    current.note_name,
                    current.timestamp,
                    held
                );
            }

            current = note;
        }

        cleaned.push(current.clone());
        cleaned
    }

    /// Label and segment in one pass
    pub fn process(&self, estimates: &[PitchEstimate]) -> Vec<DetectedNote> {
        let labelled = self.label(estimates);
        let cleaned = self.segment(&labelled);

        log::debug!(
            "Segmentation: {} estimates, {} confident, {} notes",
            estimates.len(),
            labelled.len(),
            cleaned.len()
        );

        cleaned
    }
}
