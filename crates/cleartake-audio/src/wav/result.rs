//! Packaged recording result type.

use crate::error::{AudioError, AudioResult};

use super::format::WavFormat;
use super::writer::{pcm16_to_bytes, write_wav_to_vec};

/// A packaged recording: container bytes plus content identity.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM payload only.
    pub pcm_hash: String,
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples per channel.
    pub num_samples: usize,
}

impl WavResult {
    /// Packages samples into a WAV container with content hash.
    ///
    /// Multi-channel samples must be interleaved and cover every channel;
    /// a sample count that does not divide evenly by the channel count is
    /// rejected rather than padded.
    ///
    /// # Arguments
    /// * `samples` - PCM samples, interleaved if multi-channel
    /// * `format` - WAV format parameters
    ///
    /// # Returns
    /// The packaged recording, or a format/parameter error
    pub fn from_samples(samples: &[i16], format: &WavFormat) -> AudioResult<Self> {
        format.validate()?;

        let channels = format.channels as usize;
        if !samples.len().is_multiple_of(channels) {
            return Err(AudioError::invalid_param(
                "samples",
                format!(
                    "{} samples do not interleave into {} channels",
                    samples.len(),
                    format.channels
                ),
            ));
        }

        let pcm = pcm16_to_bytes(samples);
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let wav_data = write_wav_to_vec(format, &pcm);

        Ok(Self {
            wav_data,
            pcm_hash,
            channels: format.channels,
            sample_rate: format.sample_rate,
            num_samples: samples.len() / channels,
        })
    }

    /// Packages mono samples at the given sample rate.
    pub fn mono(samples: &[i16], sample_rate: u32) -> AudioResult<Self> {
        Self::from_samples(samples, &WavFormat::mono(sample_rate))
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }
}
