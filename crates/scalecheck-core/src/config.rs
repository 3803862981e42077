//! Configuration for scale validation
//!
//! Defaults match the thresholds the practice app shipped with. Every field
//! can be overridden from TOML; missing fields keep their default.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Validation thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Intended pitch tolerance in cents. Documents intent only; matching
    /// compares pitch classes.
    pub pitch_tolerance_cents: f64,
    /// Shortest sustained note kept by the segmenter (seconds)
    pub minimum_note_duration: f64,
    /// Maximum gap between notes (seconds). Reserved, not enforced.
    pub timing_tolerance: f64,
    /// Minimum confidence for a pitch estimate to count
    pub confidence_threshold: f64,
    /// Fraction of expected notes that must match to pass
    pub passing_accuracy: f64,
    /// Spectral analysis parameters
    pub analysis: AnalysisConfig,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            pitch_tolerance_cents: 50.0,
            minimum_note_duration: 0.2,
            timing_tolerance: 2.0,
            confidence_threshold: 0.6,
            passing_accuracy: 0.75,
            analysis: AnalysisConfig::default(),
        }
    }
}

/// Pitch detector parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Rate recordings are resampled to before analysis
    pub sample_rate: u32,
    /// FFT window length in samples, power of two
    pub window_size: usize,
    /// Stride between successive windows
    pub hop_size: usize,
    /// Lowest accepted fundamental (Hz)
    pub min_frequency: f64,
    /// Highest accepted fundamental (Hz)
    pub max_frequency: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        // Guitar range, 50% window overlap
        Self {
            sample_rate: 44100,
            window_size: 4096,
            hop_size: 2048,
            min_frequency: 80.0,
            max_frequency: 1200.0,
        }
    }
}

impl ValidationConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file {}: {}", path.display(), e))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: ValidationConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse TOML config: {}", e))?;
        Ok(config)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            anyhow::bail!("confidence_threshold must be within [0, 1]");
        }
        if !(0.0..=1.0).contains(&self.passing_accuracy) {
            anyhow::bail!("passing_accuracy must be within [0, 1]");
        }
        if self.minimum_note_duration < 0.0 {
            anyhow::bail!("minimum_note_duration must be >= 0");
        }
        if self.timing_tolerance < 0.0 {
            anyhow::bail!("timing_tolerance must be >= 0");
        }
        if self.pitch_tolerance_cents < 0.0 {
            anyhow::bail!("pitch_tolerance_cents must be >= 0");
        }
        self.analysis.validate()
    }
}

impl AnalysisConfig {
    /// Validate analysis parameters
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.sample_rate == 0 {
            anyhow::bail!("Sample rate must be > 0");
        }
        if !self.window_size.is_power_of_two() {
            anyhow::bail!("window_size must be a power of two");
        }
        if self.hop_size == 0 || self.hop_size > self.window_size {
            anyhow::bail!("hop_size must be in 1..=window_size");
        }
        if self.min_frequency.is_nan()
            || self.min_frequency <= 0.0
            || !self.max_frequency.is_finite()
        {
            anyhow::bail!("min_frequency must be > 0 and max_frequency finite");
        }
        if self.min_frequency >= self.max_frequency {
            anyhow::bail!("min_frequency must be < max_frequency");
        }
        Ok(())
    }

    /// Width of one FFT bin in Hz
    pub fn bin_resolution(&self) -> f64 {
        self.sample_rate as f64 / self.window_size as f64
    }
}
