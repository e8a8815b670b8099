//! Session configuration.

use crate::engine::EnhancementEngine;
use crate::error::{AudioError, AudioResult};

/// Capability snapshot a recording session is built on.
///
/// Frame length, sample rate, and processing delay come from the engine
/// once it is constructed; they are fixed for the session's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of channels in the captured stream.
    pub channels: u16,
    /// Samples per frame.
    pub frame_length: usize,
    /// Engine processing delay in samples, applied when merging the
    /// enhanced stream.
    pub delay_samples: usize,
}

impl SessionConfig {
    /// Creates a mono, zero-delay configuration.
    pub fn new(sample_rate: u32, frame_length: usize) -> Self {
        Self {
            sample_rate,
            channels: 1,
            frame_length,
            delay_samples: 0,
        }
    }

    /// Snapshots an engine's reported capabilities.
    pub fn from_engine(engine: &dyn EnhancementEngine) -> Self {
        Self {
            sample_rate: engine.sample_rate(),
            channels: 1,
            frame_length: engine.frame_length(),
            delay_samples: engine.delay_samples(),
        }
    }

    /// Overrides the merge delay.
    pub fn with_delay(mut self, delay_samples: usize) -> Self {
        self.delay_samples = delay_samples;
        self
    }

    /// Checks the configuration can drive a session.
    pub fn validate(&self) -> AudioResult<()> {
        if self.frame_length == 0 {
            return Err(AudioError::InvalidFrameLength {
                length: self.frame_length,
            });
        }
        if self.sample_rate == 0 {
            return Err(AudioError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }
        if self.channels == 0 {
            return Err(AudioError::InvalidChannelCount {
                channels: self.channels,
            });
        }
        Ok(())
    }
}
