//! Equal-tempered note <-> frequency conversion
//!
//! Note names follow `<letter>[#|b]<octave>` (e.g. "C4", "F#3", "Db4").
//! Names produced by this module always use sharps. Reference pitch is
//! A4 = 440 Hz.

use crate::error::NoteError;

/// Reference pitch of A4 in Hz
pub const A4_FREQUENCY: f64 = 440.0;

/// MIDI number of A4
const A4_MIDI: i32 = 69;

/// Pitch class names in semitone order, sharp spellings
pub const PITCH_CLASSES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Sharp/flat pairs that name the same pitch class
const ENHARMONICS: [(&str, &str); 5] = [
    ("C#", "Db"),
    ("D#", "Eb"),
    ("F#", "Gb"),
    ("G#", "Ab"),
    ("A#", "Bb"),
];

/// Parse a note name into its MIDI number (C4 = 60, A4 = 69).
pub fn note_to_midi(name: &str) -> Result<i32, NoteError> {
    let mut chars = name.chars();
    let letter = chars.next().ok_or(NoteError::Empty)?;

    let natural = match letter {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return Err(NoteError::UnknownPitchClass(name.to_string())),
    };

    let rest = chars.as_str();
    let (accidental, octave_str) = match rest.chars().next() {
        Some('#') => (1, &rest[1..]),
        Some('b') => (-1, &rest[1..]),
        _ => (0, rest),
    };

    let octave: i32 = octave_str
        .parse()
        .map_err(|_| NoteError::InvalidOctave(name.to_string()))?;

    octave
        .checked_add(1)
        .and_then(|o| o.checked_mul(12))
        .and_then(|m| m.checked_add(natural + accidental))
        .ok_or_else(|| NoteError::InvalidOctave(name.to_string()))
}

/// Frequency of a MIDI note number in Hz
pub fn midi_to_frequency(midi: i32) -> f64 {
    A4_FREQUENCY * 2.0_f64.powf((midi - A4_MIDI) as f64 / 12.0)
}

/// Frequency of a note name in Hz.
///
/// `note_to_frequency("A4")` is exactly 440.0.
pub fn note_to_frequency(name: &str) -> Result<f64, NoteError> {
    note_to_midi(name).map(midi_to_frequency)
}

/// Name of the equal-tempered note nearest to `frequency`.
///
/// `frequency` must be positive; the detector never reports a peak at or
/// below 0 Hz.
pub fn frequency_to_note(frequency: f64) -> String {
    let semitones = (12.0 * (frequency / A4_FREQUENCY).log2()).round() as i32;
    let midi = semitones + A4_MIDI;
    let class = PITCH_CLASSES[midi.rem_euclid(12) as usize];
    let octave = midi.div_euclid(12) - 1;
    format!("{}{}", class, octave)
}

/// Pitch class part of a note name, with the octave stripped ("F#3" -> "F#").
pub fn pitch_class(name: &str) -> &str {
    name.trim_end_matches(|c: char| c.is_ascii_digit() || c == '-')
}

/// True when two note names share a pitch class, ignoring octave and
/// accepting sharp/flat enharmonic spellings.
pub fn same_pitch_class(detected: &str, expected: &str) -> bool {
    let a = pitch_class(detected);
    let b = pitch_class(expected);

    if a == b {
        return true;
    }

    ENHARMONICS
        .iter()
        .any(|&(sharp, flat)| (a == sharp && b == flat) || (a == flat && b == sharp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_a4_is_reference_pitch() {
        assert_eq!(note_to_frequency("A4").unwrap(), 440.0);
    }

    #[test]
    fn test_middle_c() {
        let c4 = note_to_frequency("C4").unwrap();
        assert_abs_diff_eq!(c4, 261.63, epsilon = 0.5);
        assert_eq!(note_to_midi("C4").unwrap(), 60);
    }

    #[test]
    fn test_round_trip_all_octaves() {
        for octave in 0..=8 {
            for class in PITCH_CLASSES {
                let name = format!("{}{}", class, octave);
                let freq = note_to_frequency(&name).unwrap();
                assert_eq!(frequency_to_note(freq), name);
            }
        }
    }

    #[test]
    fn test_negative_octave_round_trip() {
        let freq = note_to_frequency("C-1").unwrap();
        assert_eq!(note_to_midi("C-1").unwrap(), 0);
        assert_eq!(frequency_to_note(freq), "C-1");
    }

    #[test]
    fn test_flat_spelling_parses() {
        assert_eq!(note_to_midi("Db4").unwrap(), note_to_midi("C#4").unwrap());
        assert_eq!(note_to_midi("Cb4").unwrap(), note_to_midi("B3").unwrap());
    }

    #[test]
    fn test_nearest_note_snaps() {
        // A few Hz off still lands on the nearest semitone
        assert_eq!(frequency_to_note(445.0), "A4");
        assert_eq!(frequency_to_note(258.4), "C4");
        assert_eq!(frequency_to_note(82.4), "E2");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(note_to_midi(""), Err(NoteError::Empty));
        assert!(matches!(note_to_midi("H4"), Err(NoteError::UnknownPitchClass(_))));
        assert!(matches!(note_to_midi("C"), Err(NoteError::InvalidOctave(_))));
        assert!(matches!(note_to_midi("C#x"), Err(NoteError::InvalidOctave(_))));
    }

    #[test]
    fn test_huge_octave_is_rejected() {
        assert!(matches!(note_to_midi("C2147483647"), Err(NoteError::InvalidOctave(_))));
        assert!(matches!(note_to_midi("B178956970"), Err(NoteError::InvalidOctave(_))));
        assert!(matches!(note_to_midi("Cb-2147483648"), Err(NoteError::InvalidOctave(_))));
        assert!(note_to_frequency("G#99999999").is_err());
    }


    #[test]
    fn test_pitch_class_strips_octave() {
        assert_eq!(pitch_class("F#3"), "F#");
        assert_eq!(pitch_class("C10"), "C");
        assert_eq!(pitch_class("B-1"), "B");
    }

    #[test]
    fn test_enharmonic_equivalence() {
        assert!(same_pitch_class("Db4", "C#4"));
        assert!(same_pitch_class("C#4", "Db5"));
        assert!(same_pitch_class("Bb2", "A#3"));
        assert!(same_pitch_class("E4", "E2"));
        assert!(!same_pitch_class("D4", "C#4"));
        assert!(!same_pitch_class("E4", "F4"));
    }
}
