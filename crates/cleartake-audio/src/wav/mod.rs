//! WAV container packaging.
//!
//! This module writes 16-bit PCM WAV files byte-exact to the canonical
//! 44-byte header layout, and reads PCM payloads back out of container
//! bytes. No timestamps or variable metadata are written, so identical
//! samples always produce identical files and the BLAKE3 hash of the
//! payload identifies a recording's content.

mod format;
mod reader;
mod result;
mod writer;


// Re-export public API
pub use format::{WavFormat, DEFAULT_SAMPLE_RATE};
pub use reader::{compute_pcm_hash, decode_pcm16, extract_pcm_data};
pub use result::WavResult;
pub use writer::{encode_wav, pcm16_to_bytes, write_wav, write_wav_to_vec};
