//! scaletone - render reference tones to a WAV file
//!
//! Usage:
//!   scaletone <output.wav> --scale "E Major Pentatonic"
//!   scaletone <output.wav> --note F#3

use anyhow::{Context, Result};
use clap::Parser;
use scalecheck_cli::{init_logging, resolve_scale};
use scalecheck_core::tone::{encode_wav, synthesize_note, synthesize_scale, NOTE_PREVIEW_SECONDS};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scaletone")]
#[command(about = "Render the reference tones of a scale or note", long_about = None)]
struct Args {
    /// Output WAV path
    output: PathBuf,

    /// Built-in scale name
    #[arg(short, long)]
    scale: Option<String>,

    /// Explicit notes, comma separated
    #[arg(long, value_delimiter = ',')]
    notes: Vec<String>,

    /// Render a single preview note instead of a scale
    #[arg(long, conflicts_with_all = ["scale", "notes"])]
    note: Option<String>,

    /// Output sample rate
    #[arg(long, default_value_t = 44100)]
    sample_rate: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.sample_rate == 0 {
        anyhow::bail!("Sample rate must be > 0");
    }

    let (label, samples) = match &args.note {
        Some(note) => (
            note.clone(),
            synthesize_note(note, NOTE_PREVIEW_SECONDS, args.sample_rate),
        ),
        None => {
            let scale = resolve_scale(args.scale.as_deref(), &args.notes)?;
            let samples = synthesize_scale(&scale.notes, args.sample_rate);
            (scale.name, samples)
        }
    };

    let bytes = encode_wav(&samples, args.sample_rate)?;
    std::fs::write(&args.output, &bytes)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    log::info!(
        "Rendered {} ({:.2}s) to {}",
        label,
        samples.len() as f64 / args.sample_rate as f64,
        args.output.display()
    );

    let result = serde_json::json!({
        "status": "success",
        "output_file": args.output.display().to_string(),
        "source": label,
        "num_samples": samples.len(),
        "sample_rate": args.sample_rate,
    });
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
