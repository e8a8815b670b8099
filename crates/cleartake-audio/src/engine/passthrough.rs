//! Passthrough engine with configurable simulated latency.

use std::collections::VecDeque;

use crate::error::{AudioError, AudioResult};
use crate::wav::DEFAULT_SAMPLE_RATE;

use super::EnhancementEngine;

/// Default frame length in samples (10 ms at 16 kHz).
const DEFAULT_FRAME_LENGTH: usize = 160;

/// An engine that returns its input unchanged, optionally routed through
/// a delay line.
///
/// With a nonzero delay the output stream is the input stream shifted
/// right by `delay_samples` zeros, which is exactly the shape of a real
/// engine's warm-up latency. That makes delay compensation observable:
/// merging the output with the reported delay recovers the input, minus
/// the tail still sitting in the delay line when the session stops.
///
/// Compensation is frame-granular, so a delay that is not a multiple of
/// the frame length leaves the merged output misaligned by the remainder.
/// Real engines report whole-frame delays for this reason.
#[derive(Debug)]
pub struct PassthroughEngine {
    frame_length: usize,
    sample_rate: u32,
    delay_samples: usize,
    frames_processed: usize,
    line: VecDeque<i16>,
}

impl PassthroughEngine {
    /// Creates a zero-delay passthrough engine.
    pub fn new(frame_length: usize, sample_rate: u32) -> Self {
        Self {
            frame_length,
            sample_rate,
            delay_samples: 0,
            frames_processed: 0,
            line: VecDeque::new(),
        }
    }

    /// Creates a passthrough engine with the voice-capture defaults
    /// (160-sample frames at 16 kHz).
    pub fn voice() -> Self {
        Self::new(DEFAULT_FRAME_LENGTH, DEFAULT_SAMPLE_RATE)
    }

    /// Sets a simulated processing delay.
    pub fn with_delay(mut self, delay_samples: usize) -> Self {
        self.delay_samples = delay_samples;
        self.line = Self::primed_line(delay_samples);
        self
    }

    /// A delay line pre-filled with silence, one zero per delay sample.
    fn primed_line(delay_samples: usize) -> VecDeque<i16> {
        std::iter::repeat(0).take(delay_samples).collect()
    }
}

impl EnhancementEngine for PassthroughEngine {
    fn frame_length(&self) -> usize {
        self.frame_length
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn delay_samples(&self) -> usize {
        self.delay_samples
    }

    fn process_frame(&mut self, frame: &[i16]) -> AudioResult<Vec<i16>> {
        if frame.len() != self.frame_length {
            return Err(AudioError::FrameSizeMismatch {
                index: self.frames_processed,
                expected: self.frame_length,
                found: frame.len(),
            });
        }

        self.line.extend(frame.iter().copied());
        let out: Vec<i16> = self.line.drain(..self.frame_length).collect();

        self.frames_processed += 1;
        Ok(out)
    }

    fn reset(&mut self) {
        self.frames_processed = 0;
        self.line = Self::primed_line(self.delay_samples);
    }
}
