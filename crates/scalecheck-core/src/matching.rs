//! Scale matching
//!
//! Aligns detected notes against the expected scale with a single forward
//! pass and one step of lookahead. Each expected note consumes at most two
//! detected notes: the one under the cursor, or (if that one is wrong) the one
//! after it. There is no backtracking, so two spurious notes in a row or a
//! missed note are not recovered from.

use crate::notes::same_pitch_class;
use crate::segmentation::DetectedNote;

#[cfg(test)]
mod tests;

/// Outcome of aligning a performance against a scale
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleMatch {
    /// One flag per expected note
    pub matched_notes: Vec<bool>,
    /// Fraction of expected notes matched, 0.0 for an empty scale
    pub accuracy: f64,
}

impl ScaleMatch {
    pub fn compute<S: AsRef<str>>(detected: &[DetectedNote], expected: &[S]) -> Self {
        let matched_notes = match_notes(detected, expected);
        let accuracy = calculate_accuracy(&matched_notes);

        log::debug!(
            "Matched {}/{} expected notes against {} detected",
            matched_count(&matched_notes),
            expected.len(),
            detected.len()
        );

        Self {
            matched_notes,
            accuracy,
        }
    }

    /// Number of expected notes that matched
    pub fn matched_count(&self) -> usize {
        matched_count(&self.matched_notes)
    }
}

/// Flag which expected notes were played, in order
pub fn match_notes<S: AsRef<str>>(detected: &[DetectedNote], expected: &[S]) -> Vec<bool> {
    let mut matched = vec![false; expected.len()];
    let mut cursor = 0;

    for (slot, expected_note) in matched.iter_mut().zip(expected) {
        let expected_note = expected_note.as_ref();

        let Some(current) = detected.get(cursor) else {
            break;
        };

        if same_pitch_class(&current.note_name, expected_note) {
            *slot = true;
            cursor += 1;
            continue;
        }

        // Treat the note under the cursor as a spurious extra
        match detected.get(cursor + 1) {
            Some(next) if same_pitch_class(&next.note_name, expected_note) => {
                *slot = true;
                cursor += 2;
            }
            _ => {
                cursor += 1;
            }
        }
    }

    matched
}

/// Fraction of `true` entries; 0.0 when there are none to count
pub fn calculate_accuracy(matched: &[bool]) -> f64 {
    if matched.is_empty() {
        return 0.0;
    }
    matched_count(matched) as f64 / matched.len() as f64
}

fn matched_count(matched: &[bool]) -> usize {
    matched.iter().filter(|&&m| m).count()
}
