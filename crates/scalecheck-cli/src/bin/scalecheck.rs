//! scalecheck - validate a recorded scale performance
//!
//! Usage:
//!   scalecheck <recording> --scale "C Major"
//!   scalecheck <recording> --notes C4,D4,E4,F4
//!   scalecheck --config validation.toml <recording> --scale "G Major"

use anyhow::{Context, Result};
use clap::Parser;
use scalecheck_cli::output::{print_failure, print_feedback, print_validation};
use scalecheck_cli::{init_logging, resolve_scale};
use scalecheck_core::{validate_scale, ValidationConfig};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "scalecheck")]
#[command(about = "Check a recording against an expected scale", long_about = None)]
struct Args {
    /// Recorded take (WAV, MP3, FLAC, OGG, M4A)
    recording: PathBuf,

    /// Built-in scale name, e.g. "C Major"
    #[arg(short, long)]
    scale: Option<String>,

    /// Explicit expected notes, comma separated (overrides the catalog notes)
    #[arg(short, long, value_delimiter = ',')]
    notes: Vec<String>,

    /// Path to a TOML validation config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also print the feedback text to stderr
    #[arg(short, long)]
    feedback: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(args.config.as_deref())?;
    let scale = resolve_scale(args.scale.as_deref(), &args.notes)?;

    let input_file = args.recording.display().to_string();
    let audio_bytes = std::fs::read(&args.recording)
        .with_context(|| format!("Failed to read recording: {}", input_file))?;

    log::info!(
        "Validating {} ({} bytes) against {}",
        input_file,
        audio_bytes.len(),
        scale.name
    );

    let start = std::time::Instant::now();
    match validate_scale(audio_bytes, scale.notes.clone(), config).await {
        Ok(result) => {
            let elapsed = start.elapsed().as_secs_f64();
            if args.feedback {
                print_feedback(&result);
            }
            print_validation(&input_file, &scale.name, &result, elapsed);
            Ok(())
        }
        Err(e) => {
            print_failure(&input_file, &e);
            Err(e.into())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<ValidationConfig> {
    let config = match path {
        Some(path) => {
            log::info!("Loading config from {}", path.display());
            ValidationConfig::load(path)?
        }
        None => ValidationConfig::default(),
    };
    config.validate()?;
    Ok(config)
}
