//! Scale definitions and the built-in practice catalog

use serde::{Deserialize, Serialize};

/// A named, ordered sequence of expected notes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleDefinition {
    pub name: String,
    pub notes: Vec<String>,
}

impl ScaleDefinition {
    pub fn new<S: Into<String>>(name: S, notes: &[&str]) -> Self {
        Self {
            name: name.into(),
            notes: notes.iter().map(|n| n.to_string()).collect(),
        }
    }
}

/// Scales offered for practice
pub fn catalog() -> Vec<ScaleDefinition> {
    vec![
        ScaleDefinition::new("C Major", &["C4", "D4", "E4", "F4", "G4", "A4", "B4", "C5"]),
        ScaleDefinition::new("G Major", &["G3", "A3", "B3", "C4", "D4", "E4", "F#4", "G4"]),
        ScaleDefinition::new("A Minor", &["A3", "B3", "C4", "D4", "E4", "F4", "G4", "A4"]),
        ScaleDefinition::new("E Major Pentatonic", &["E3", "F#3", "G#3", "B3", "C#4", "E4"]),
        ScaleDefinition::new("A Minor Pentatonic", &["A3", "C4", "D4", "E4", "G4", "A4"]),
    ]
}

/// Look up a catalog scale by name, ignoring case
pub fn find(name: &str) -> Option<ScaleDefinition> {
    catalog()
        .into_iter()
        .find(|scale| scale.name.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::note_to_frequency;

    #[test]
    fn test_catalog_notes_parse() {
        for scale in catalog() {
            assert!(!scale.notes.is_empty());
            for note in &scale.notes {
                assert!(note_to_frequency(note).is_ok(), "{} in {}", note, scale.name);
            }
        }
    }

    #[test]
    fn test_find_ignores_case() {
        let scale = find("g major").unwrap();
        assert_eq!(scale.notes[6], "F#4");
        assert!(find("  A Minor Pentatonic ").is_some());
        assert!(find("Lydian Dominant").is_none());
    }
}
