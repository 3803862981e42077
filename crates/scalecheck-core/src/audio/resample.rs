//! Band-limited sample rate conversion

use anyhow::{Context, Result};
use rubato::{
    Resampler, SincFixedIn, SincInterpolationParameters, SincInterpolationType, WindowFunction,
};

fn interpolation_parameters() -> SincInterpolationParameters {
    SincInterpolationParameters {
        sinc_len: 256,
        f_cutoff: 0.95,
        interpolation: SincInterpolationType::Cubic,
        oversampling_factor: 128,
        window: WindowFunction::BlackmanHarris2,
    }
}

/// Resample mono audio from `from_rate` to `to_rate`.
///
/// The sinc filter cuts off just below the lower of the two Nyquist
/// frequencies, so content the target rate cannot represent is removed
/// instead of folding back into the audible band. The output is aligned
/// with the input (filter delay removed) and holds
/// `ceil(len * to_rate / from_rate)` samples.
pub fn resample_to_target(samples: &[f32], from_rate: u32, to_rate: u32) -> Result<Vec<f32>> {
    if from_rate == 0 || to_rate == 0 {
        anyhow::bail!("Cannot resample {}Hz -> {}Hz", from_rate, to_rate);
    }
    if from_rate == to_rate || samples.is_empty() {
        return Ok(samples.to_vec());
    }

    let ratio = to_rate as f64 / from_rate as f64;
    let expected_len = (samples.len() as f64 * ratio).ceil() as usize;

    let mut resampler =
        SincFixedIn::<f32>::new(ratio, 1.0, interpolation_parameters(), samples.len(), 1)
            .with_context(|| {
                format!("Failed to build resampler {}Hz -> {}Hz", from_rate, to_rate)
            })?;
    let delay = resampler.output_delay();

    let waves_in = vec![samples.to_vec()];
    let mut output = resampler
        .process(&waves_in, None)
        .context("Resampling failed")?
        .swap_remove(0);

    // Flush the samples still held in the filter
    let tail = resampler
        .process_partial(None::<&[Vec<f32>]>, None)
        .context("Resampler flush failed")?
        .swap_remove(0);
    output.extend(tail);

    let mut output: Vec<f32> = output.into_iter().skip(delay).collect();
    output.resize(expected_len, 0.0);

    log::debug!(
        "Resampled {} samples {}Hz -> {} samples {}Hz",
        samples.len(),
        from_rate,
        output.len(),
        to_rate
    );

    Ok(output)
}
