//! Input loading for WAV files.
//!
//! Reads 16-bit PCM WAV files through `hound`, an independent decoder from
//! the writer in `cleartake-audio`. Engines operate on mono streams, so
//! multi-channel input is rejected rather than silently downmixed.

use std::path::Path;

use anyhow::{Context, Result};

/// A decoded mono 16-bit PCM input file.
#[derive(Debug, Clone)]
pub struct WavInput {
    /// The decoded samples.
    pub samples: Vec<i16>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl WavInput {
    /// Duration of the input in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Reads a mono 16-bit PCM WAV file.
///
/// # Arguments
/// * `path` - Path to the WAV file
///
/// # Returns
/// The decoded samples and sample rate, or an error for missing files,
/// malformed containers, or unsupported formats
pub fn read_wav(path: &Path) -> Result<WavInput> {
    let reader = hound::WavReader::open(path)
        .with_context(|| format!("Failed to open WAV file: {}", path.display()))?;

    let spec = reader.spec();
    if spec.channels != 1 {
        anyhow::bail!(
            "Only mono input is supported: {} has {} channels",
            path.display(),
            spec.channels
        );
    }
    if spec.bits_per_sample != 16 || spec.sample_format != hound::SampleFormat::Int {
        anyhow::bail!(
            "Only 16-bit PCM input is supported: {} is {}-bit {}",
            path.display(),
            spec.bits_per_sample,
            match spec.sample_format {
                hound::SampleFormat::Int => "integer",
                hound::SampleFormat::Float => "float",
            }
        );
    }

    let samples = reader
        .into_samples::<i16>()
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Failed to decode samples from {}", path.display()))?;

    Ok(WavInput {
        samples,
        sample_rate: spec.sample_rate,
    })
}
