//! RNNoise denoising engine via the `nnnoiseless` crate.

use nnnoiseless::DenoiseState;

use crate::error::{AudioError, AudioResult};

use super::EnhancementEngine;

/// RNNoise-based noise suppression (pure Rust port).
///
/// Operates on 480-sample frames (10 ms) at 48 kHz, the only rate the
/// model supports. The first output frame is a startup transient rather
/// than denoised audio, so the engine reports one frame of processing
/// delay and merging with it drops that frame again.
pub struct RnnoiseEngine {
    state: Box<DenoiseState<'static>>,
    input_scratch: Vec<f32>,
    output_scratch: Vec<f32>,
    frames_processed: usize,
    last_voice_probability: f32,
}

impl RnnoiseEngine {
    /// Samples per frame (10 ms at 48 kHz).
    pub const FRAME_LENGTH: usize = DenoiseState::FRAME_SIZE;

    /// The model's fixed sample rate in Hz.
    pub const SAMPLE_RATE: u32 = 48_000;

    /// Creates a denoiser with freshly initialized model state.
    pub fn new() -> Self {
        Self {
            state: DenoiseState::new(),
            input_scratch: vec![0.0; Self::FRAME_LENGTH],
            output_scratch: vec![0.0; Self::FRAME_LENGTH],
            frames_processed: 0,
            last_voice_probability: 0.0,
        }
    }

    /// Voice activity probability of the most recent frame, in [0, 1].
    pub fn last_voice_probability(&self) -> f32 {
        self.last_voice_probability
    }
}

impl Default for RnnoiseEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RnnoiseEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RnnoiseEngine")
            .field("frames_processed", &self.frames_processed)
            .field("last_voice_probability", &self.last_voice_probability)
            .finish()
    }
}

impl EnhancementEngine for RnnoiseEngine {
    fn frame_length(&self) -> usize {
        Self::FRAME_LENGTH
    }

    fn sample_rate(&self) -> u32 {
        Self::SAMPLE_RATE
    }

    fn delay_samples(&self) -> usize {
        // One warm-up frame of model output
        Self::FRAME_LENGTH
    }

    fn process_frame(&mut self, frame: &[i16]) -> AudioResult<Vec<i16>> {
        if frame.len() != Self::FRAME_LENGTH {
            return Err(AudioError::FrameSizeMismatch {
                index: self.frames_processed,
                expected: Self::FRAME_LENGTH,
                found: frame.len(),
            });
        }

        // The model expects f32 samples on the i16 scale
        for (dst, &src) in self.input_scratch.iter_mut().zip(frame) {
            *dst = src as f32;
        }

        self.last_voice_probability = self
            .state
            .process_frame(&mut self.output_scratch, &self.input_scratch);

        let out = self
            .output_scratch
            .iter()
            .map(|&v| v.round().clamp(-32768.0, 32767.0) as i16)
            .collect();

        self.frames_processed += 1;
        Ok(out)
    }

    fn reset(&mut self) {
        self.state = DenoiseState::new();
        self.frames_processed = 0;
        self.last_voice_probability = 0.0;
    }
}
