//! Shared helpers for the scalecheck binaries

pub mod output;

use scalecheck_core::{scales, ScaleDefinition};

/// Initialize logging: silent by default so stdout stays clean JSON
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Off
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

/// Resolve the expected scale from a catalog name or an explicit note list
pub fn resolve_scale(name: Option<&str>, notes: &[String]) -> anyhow::Result<ScaleDefinition> {
    if !notes.is_empty() {
        for note in notes {
            scalecheck_core::notes::note_to_midi(note)
                .map_err(|e| anyhow::anyhow!("Invalid expected note: {}", e))?;
        }
        return Ok(ScaleDefinition {
            name: name.unwrap_or("Custom").to_string(),
            notes: notes.to_vec(),
        });
    }

    let name = name.ok_or_else(|| anyhow::anyhow!("Either --scale or --notes is required"))?;
    scales::find(name).ok_or_else(|| {
        let known: Vec<String> = scales::catalog().into_iter().map(|s| s.name).collect();
        anyhow::anyhow!("Unknown scale '{}' (known: {})", name, known.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_catalog_scale() {
        let scale = resolve_scale(Some("a minor"), &[]).unwrap();
        assert_eq!(scale.name, "A Minor");
        assert_eq!(scale.notes.len(), 8);
    }

    #[test]
    fn test_explicit_notes_win() {
        let notes = vec!["E3".to_string(), "G3".to_string()];
        let scale = resolve_scale(Some("C Major"), &notes).unwrap();
        assert_eq!(scale.notes, notes);
        assert_eq!(scale.name, "C Major");
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(resolve_scale(None, &[]).is_err());
        assert!(resolve_scale(Some("Phrygian"), &[]).is_err());
        assert!(resolve_scale(None, &["Q9".to_string()]).is_err());
    }
}
