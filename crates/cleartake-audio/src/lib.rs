//! ClearTake Audio Core
//!
//! This crate implements the recording core for ClearTake: frame-based
//! audio capture with noise-suppression engines, delay-compensated
//! reassembly, and deterministic WAV packaging.
//!
//! # Overview
//!
//! Audio arrives as fixed-length frames of 16-bit PCM. A capture session
//! collects two streams, the raw input and the output of an enhancement
//! engine, and on close merges each stream back into a continuous buffer.
//! Engines that buffer internally report a delay in samples; the merge
//! drops the leading frames that carry no usable signal so the enhanced
//! take lines up with the raw one.
//!
//! - **WAV packaging** - a deterministic 44-byte-header PCM container
//! - **Frame reassembly** - ordered merge with delay compensation
//! - **Engines** - passthrough for testing, RNNoise behind the `rnnoise`
//!   feature
//! - **Sessions** - queue-backed collection with out-of-band engine errors
//! - **Synthesis** - seeded tone-plus-noise fixtures for tests and the CLI
//!
//! # Determinism
//!
//! Signal synthesis is deterministic. Given the same [`ToneSpec`], the
//! output is byte-identical across runs (on the same platform). The crate
//! uses PCG32 for all random number generation, with seeds derived via
//! BLAKE3 hashing, and hashes PCM payloads with BLAKE3 for cheap equality
//! checks.
//!
//! # Example
//!
//! ```ignore
//! use cleartake_audio::{enhance_samples, noisy_tone, PassthroughEngine, ToneSpec};
//!
//! let samples = noisy_tone(&ToneSpec::new(440.0))?;
//! let mut engine = PassthroughEngine::voice();
//! let output = enhance_samples(&mut engine, &samples)?;
//!
//! // Write to file
//! std::fs::write("enhanced.wav", &output.enhanced.wav_data)?;
//!
//! // Get PCM hash for validation
//! println!("PCM hash: {}", output.enhanced.pcm_hash);
//! ```
//!
//! # Crate Structure
//!
//! - [`enhance_samples()`] - Offline pipeline entry point
//! - [`engine`] - The [`EnhancementEngine`] trait and its implementations
//! - [`frame`] - Frame accumulation and delay-compensated merging
//! - [`rng`] - Deterministic RNG with seed derivation
//! - [`session`] - Queue-backed capture sessions
//! - [`signal`] - Deterministic test-signal synthesis
//! - [`wav`] - Deterministic WAV container writer and reader

pub mod engine;
pub mod enhance;
pub mod error;
pub mod frame;
pub mod rng;
pub mod session;
pub mod signal;
pub mod wav;

// Re-export main types at crate root
pub use enhance::enhance_samples;
pub use engine::{EnhancementEngine, PassthroughEngine};
#[cfg(feature = "rnnoise")]
pub use engine::RnnoiseEngine;
pub use error::{AudioError, AudioResult};
pub use session::{CaptureSession, SessionConfig, SessionOutput};
pub use signal::{noisy_tone, ToneSpec};
pub use wav::{encode_wav, WavFormat, WavResult};
