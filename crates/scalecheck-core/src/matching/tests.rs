//! Tests for scale matching

use super::*;

const C_MAJOR: [&str; 8] = ["C4", "D4", "E4", "F4", "G4", "A4", "B4", "C5"];

fn detected(names: &[&str]) -> Vec<DetectedNote> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| DetectedNote {
            note_name: name.to_string(),
            frequency: 0.0,
            timestamp: i as f64 * 0.5,
            confidence: 1.0,
        })
        .collect()
}

#[test]
fn test_identical_sequence_matches_fully() {
    let result = ScaleMatch::compute(&detected(&C_MAJOR), &C_MAJOR);

    assert_eq!(result.matched_notes, vec![true; 8]);
    assert_eq!(result.accuracy, 1.0);
    assert_eq!(result.matched_count(), 8);
}

#[test]
fn test_single_spurious_insertion_is_skipped() {
    let played = ["C4", "X4", "D4", "E4", "F4", "G4", "A4", "B4", "C5"];
    let result = ScaleMatch::compute(&detected(&played), &C_MAJOR);

    assert_eq!(result.matched_notes, vec![true; 8]);
    assert_eq!(result.accuracy, 1.0);
}

#[test]
fn test_enharmonic_spelling_matches() {
    let matched = match_notes(&detected(&["Db4"]), &["C#4"]);
    assert_eq!(matched, vec![true]);
}

#[test]
fn test_octave_is_ignored() {
    let matched = match_notes(&detected(&["C5", "D3"]), &["C4", "D4"]);
    assert_eq!(matched, vec![true, true]);
}

#[test]
fn test_no_detections_matches_nothing() {
    let result = ScaleMatch::compute(&[], &C_MAJOR);

    assert_eq!(result.matched_notes, vec![false; 8]);
    assert_eq!(result.accuracy, 0.0);
}

#[test]
fn test_empty_scale() {
    let result = ScaleMatch::compute::<&str>(&detected(&["C4"]), &[]);

    assert!(result.matched_notes.is_empty());
    assert_eq!(result.accuracy, 0.0);
}

#[test]
fn test_two_consecutive_insertions_are_not_recovered() {
    let matched = match_notes(&detected(&["C4", "X4", "Y4", "D4", "E4"]), &["C4", "D4", "E4"]);
    assert_eq!(matched, vec![true, false, false]);
}

#[test]
fn test_missed_note_is_not_recovered() {
    let matched = match_notes(&detected(&["C4", "E4", "F4"]), &["C4", "D4", "E4", "F4"]);
    assert_eq!(matched, vec![true, false, false, false]);
}

#[test]
fn test_wrong_note_consumes_one_detection() {
    // D4 is wrong against X4 and the lookahead fails, so X4 is consumed
    // and the next expected note is compared with E4
    let matched = match_notes(&detected(&["C4", "X4", "Y4", "E4"]), &["C4", "D4", "Y4", "E4"]);
    assert_eq!(matched, vec![true, false, true, true]);
}

#[test]
fn test_mismatch_on_last_detection_advances_cursor() {
    let matched = match_notes(&detected(&["C4", "X4"]), &["C4", "D4", "X4"]);
    assert_eq!(matched, vec![true, false, false]);
}

#[test]
fn test_remaining_notes_unmatched_when_detections_run_out() {
    let result = ScaleMatch::compute(&detected(&["C4", "D4"]), &C_MAJOR);

    assert_eq!(result.matched_count(), 2);
    assert_eq!(result.matched_notes.len(), C_MAJOR.len());
    assert_eq!(result.accuracy, 0.25);
}

#[test]
fn test_accuracy_calculation() {
    assert_eq!(calculate_accuracy(&[]), 0.0);
    assert_eq!(calculate_accuracy(&[true, false, true, true]), 0.75);
    assert_eq!(calculate_accuracy(&[false, false]), 0.0);
}

#[test]
fn test_owned_expected_notes() {
    let expected: Vec<String> = C_MAJOR.iter().map(|s| s.to_string()).collect();
    let result = ScaleMatch::compute(&detected(&C_MAJOR), &expected);
    assert_eq!(result.accuracy, 1.0);
}
