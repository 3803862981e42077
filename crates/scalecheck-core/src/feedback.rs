//! Human-readable feedback for a scored performance

use crate::segmentation::DetectedNote;

/// Verdict and summary text for one validation run
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub is_valid: bool,
    pub summary: String,
}

/// Build the verdict and summary.
///
/// Passing is `accuracy >= passing_accuracy`. The summary lists the verdict,
/// the detected and expected notes, then one marker line per expected note.
pub fn generate_feedback<S: AsRef<str>>(
    matched: &[bool],
    detected: &[DetectedNote],
    expected: &[S],
    accuracy: f64,
    passing_accuracy: f64,
) -> Feedback {
    let is_valid = accuracy >= passing_accuracy;

    let mut summary = if is_valid {
        "✅ Great job! You played the scale correctly.\n".to_string()
    } else {
        format!(
            "❌ Keep practicing. You got {}% of the notes correct.\n",
            (accuracy * 100.0) as u32
        )
    };

    let detected_names: Vec<&str> = detected.iter().map(|n| n.note_name.as_str()).collect();
    let expected_names: Vec<&str> = expected.iter().map(|n| n.as_ref()).collect();

    summary.push_str(&format!("\nDetected notes: {}\n", detected_names.join(", ")));
    summary.push_str(&format!("Expected notes: {}\n\n", expected_names.join(", ")));

    for (name, &ok) in expected_names.iter().zip(matched) {
        let marker = if ok { '✓' } else { '✗' };
        summary.push_str(&format!("{} {}\n", marker, name));
    }

    Feedback { is_valid, summary }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(name: &str) -> DetectedNote {
        DetectedNote {
            note_name: name.to_string(),
            frequency: 0.0,
            timestamp: 0.0,
            confidence: 1.0,
        }
    }

    #[test]
    fn test_passing_summary() {
        let feedback = generate_feedback(
            &[true, true],
            &[note("C4"), note("D4")],
            &["C4", "D4"],
            1.0,
            0.75,
        );

        assert!(feedback.is_valid);
        assert_eq!(
            feedback.summary,
            "✅ Great job! You played the scale correctly.\n\
             \nDetected notes: C4, D4\n\
             Expected notes: C4, D4\n\n\
             ✓ C4\n\
             ✓ D4\n"
        );
    }

    #[test]
    fn test_failing_summary_reports_percentage() {
        let feedback = generate_feedback(
            &[true, false, false],
            &[note("C4"), note("F4")],
            &["C4", "D4", "E4"],
            1.0 / 3.0,
            0.75,
        );

        assert!(!feedback.is_valid);
        assert!(feedback.summary.starts_with("❌ Keep practicing. You got 33% of the notes correct.\n"));
        assert!(feedback.summary.contains("Detected notes: C4, F4\n"));
        assert!(feedback.summary.ends_with("✓ C4\n✗ D4\n✗ E4\n"));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let feedback = generate_feedback(&[true, true, true, false], &[], &["A", "B", "C", "D"], 0.75, 0.75);
        assert!(feedback.is_valid);

        let feedback = generate_feedback(&[true, true, false, false], &[], &["A", "B", "C", "D"], 0.5, 0.75);
        assert!(!feedback.is_valid);
    }

    #[test]
    fn test_nothing_detected() {
        let feedback = generate_feedback(&[false], &[], &["C4"], 0.0, 0.75);
        assert!(feedback.summary.contains("You got 0%"));
        assert!(feedback.summary.contains("Detected notes: \n"));
    }
}
