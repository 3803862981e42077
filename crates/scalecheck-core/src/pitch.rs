//! Windowed FFT pitch estimation
//!
//! Slides a Hamming-tapered window over the recording and picks the strongest
//! spectral bin in each window. Resolution is one FFT bin (sample_rate /
//! window_size, about 10.8 Hz at 44.1kHz/4096); there is no interpolation.

use crate::config::AnalysisConfig;
use rayon::prelude::*;
use rustfft::{num_complex::Complex, Fft, FftPlanner};
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::sync::Arc;

/// Dominant frequency of one analysis window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchEstimate {
    /// Peak bin frequency in Hz
    pub frequency: f64,
    /// Peak-to-mean magnitude ratio, scaled and capped at 1.0
    pub confidence: f64,
    /// Window start, seconds from the beginning of the recording
    pub time: f64,
}

/// Pitch detector over a fixed window/hop grid
pub struct PitchDetector {
    window_size: usize,
    hop_size: usize,
    min_frequency: f64,
    max_frequency: f64,
}

impl PitchDetector {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            window_size: config.window_size,
            hop_size: config.hop_size,
            min_frequency: config.min_frequency,
            max_frequency: config.max_frequency,
        }
    }

    /// Number of complete windows that fit in `total_samples`
    pub fn window_count(&self, total_samples: usize) -> usize {
        if self.hop_size == 0 {
            return 0;
        }
        total_samples.saturating_sub(self.window_size) / self.hop_size
    }

    /// Estimate a pitch for every window, in window order.
    ///
    /// Windows without a usable peak (silence, out-of-range peak) yield no
    /// estimate. Confidence filtering is left to the caller.
    pub fn detect(&self, samples: &[f32], sample_rate: u32) -> Vec<PitchEstimate> {
        if samples.is_empty() || sample_rate == 0 {
            return Vec::new();
        }

        let Some(fft) = self.plan() else {
            log::warn!(
                "Cannot plan radix-2 FFT for window size {}, no pitch estimates",
                self.window_size
            );
            return Vec::new();
        };

        let window = create_hamming_window(self.window_size);
        let num_windows = self.window_count(samples.len());

        let estimates: Vec<PitchEstimate> = (0..num_windows)
            .into_par_iter()
            .filter_map(|i| {
                let start = i * self.hop_size;
                let frame = samples.get(start..start + self.window_size)?;

                let (frequency, confidence) =
                    self.estimate_window(frame, &window, fft.as_ref(), sample_rate)?;

                Some(PitchEstimate {
                    frequency,
                    confidence,
                    time: start as f64 / sample_rate as f64,
                })
            })
            .collect();

        log::debug!(
            "Pitch detection: {} of {} windows produced an estimate",
            estimates.len(),
            num_windows
        );

        estimates
    }

    /// Build the forward FFT for this window size; `None` if not radix-2
    fn plan(&self) -> Option<Arc<dyn Fft<f32>>> {
        if self.window_size < 2 || !self.window_size.is_power_of_two() {
            return None;
        }
        let mut planner = FftPlanner::new();
        Some(planner.plan_fft_forward(self.window_size))
    }

    /// Peak frequency and confidence of one window
    fn estimate_window(
        &self,
        frame: &[f32],
        window: &[f32],
        fft: &dyn Fft<f32>,
        sample_rate: u32,
    ) -> Option<(f64, f64)> {
        let mut buffer: Vec<Complex<f32>> = frame
            .iter()
            .zip(window)
            .map(|(&s, &w)| Complex::new(s * w, 0.0))
            .collect();

        fft.process(&mut buffer);

        let magnitudes = spectrum_to_magnitudes(&buffer);
        let (peak_bin, peak) = peak_bin(&magnitudes)?;

        let mean = magnitudes.iter().sum::<f32>() / magnitudes.len() as f32;
        if mean <= 0.0 || !mean.is_finite() {
            // Silent window
            return None;
        }

        let frequency = peak_bin as f64 * sample_rate as f64 / self.window_size as f64;
        let confidence = (peak as f64 / (mean as f64 * 10.0)).min(1.0);

        // Bin 0 is DC, never a pitch
        if peak_bin == 0 || frequency < self.min_frequency || frequency > self.max_frequency {
            log::trace!("Rejected peak at {:.1}Hz (outside range)", frequency);
            return None;
        }

        Some((frequency, confidence))
    }
}

/// Create a periodic Hamming window
fn create_hamming_window(size: usize) -> Vec<f32> {
    (0..size)
        .map(|i| 0.54 - 0.46 * (2.0 * PI * i as f32 / size as f32).cos())
        .collect()
}

/// Magnitudes of the non-negative frequency half of a spectrum
fn spectrum_to_magnitudes(spectrum: &[Complex<f32>]) -> Vec<f32> {
    spectrum
        .iter()
        .take(spectrum.len() / 2)
        .map(|c| c.norm())
        .collect()
}

/// Index and value of the largest magnitude (first one wins on ties)
fn peak_bin(magnitudes: &[f32]) -> Option<(usize, f32)> {
    magnitudes
        .iter()
        .copied()
        .enumerate()
        .fold(None, |best, (i, m)| match best {
            Some((_, best_m)) if best_m >= m => best,
            _ => Some((i, m)),
        })
}
