//! Enhancement engine abstraction.
//!
//! An enhancement engine is the frame-stream capability a recording
//! session sits on top of: it declares a fixed frame length and sample
//! rate, reports how many leading output samples are processing latency
//! rather than audio, and transforms the stream one frame at a time.
//!
//! Engines are explicit values. Constructing one performs any setup the
//! backend needs, and the value is threaded through the session; there is
//! no ambient global initialization state.

mod passthrough;
#[cfg(feature = "rnnoise")]
mod rnnoise;

#[cfg(test)]
mod tests_engine;

// Re-export public API
pub use passthrough::PassthroughEngine;
#[cfg(feature = "rnnoise")]
pub use rnnoise::RnnoiseEngine;

use crate::error::AudioResult;

/// A streaming voice-enhancement backend.
///
/// Implementations consume and produce frames of exactly
/// [`frame_length`](EnhancementEngine::frame_length) samples. The first
/// [`delay_samples`](EnhancementEngine::delay_samples) samples of the
/// output stream are warm-up content; merging the output with that delay
/// drops them again.
pub trait EnhancementEngine: Send {
    /// Samples per frame, fixed for the engine's lifetime.
    fn frame_length(&self) -> usize;

    /// Sample rate the engine operates at, in Hz.
    fn sample_rate(&self) -> u32;

    /// Processing delay of the output stream, in samples.
    fn delay_samples(&self) -> usize;

    /// Processes one frame, returning one enhanced frame of equal length.
    ///
    /// # Arguments
    /// * `frame` - Exactly `frame_length()` samples
    ///
    /// # Returns
    /// The enhanced frame, or `FrameSizeMismatch` for a wrong-sized input
    fn process_frame(&mut self, frame: &[i16]) -> AudioResult<Vec<i16>>;

    /// Returns the engine to its freshly-constructed state so it can
    /// serve a new session.
    fn reset(&mut self);
}
