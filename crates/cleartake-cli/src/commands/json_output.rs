//! JSON output types for machine-readable CLI output.
//!
//! This module provides structured output types for the `--json` flag.
//! These types let scripts and other tools parse CLI output without
//! scraping the human-readable text.

use serde::{Deserialize, Serialize};

use cleartake_audio::AudioError;

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
/// Format: CLI_XXX for CLI-level errors; engine and library errors pass
/// through their own AUDIO_XXX codes.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// File could not be written
    pub const FILE_WRITE: &str = "CLI_002";
    /// WAV file could not be read or parsed
    pub const WAV_PARSE: &str = "CLI_003";
    /// Signal synthesis failed
    pub const SYNTH_ERROR: &str = "CLI_004";
    /// Enhancement pipeline failed
    pub const ENHANCE_ERROR: &str = "CLI_005";
    /// Requested engine is not available for this input or build
    pub const ENGINE_UNAVAILABLE: &str = "CLI_006";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "AUDIO_004")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl From<&AudioError> for JsonError {
    fn from(err: &AudioError) -> Self {
        Self::new(err.code(), err.to_string())
    }
}

/// JSON output for the `synth` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthOutput {
    /// Whether synthesis succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Synthesis result details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<SynthResult>,
}

/// Synthesis result details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthResult {
    /// Path the WAV was written to
    pub path: String,
    /// Base seed used for the noise stream
    pub seed: u32,
    /// Signal duration in milliseconds
    pub duration_ms: u32,
    /// Tone frequency in Hz
    pub frequency: f64,
    /// Output sample rate in Hz
    pub sample_rate: u32,
    /// Number of samples written
    pub num_samples: usize,
    /// BLAKE3 hash of the PCM payload
    pub pcm_hash: String,
}

impl SynthOutput {
    /// Creates a successful synth output.
    pub fn success(result: SynthResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed synth output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// JSON output for the `enhance` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhanceOutput {
    /// Whether the pipeline succeeded
    pub success: bool,
    /// Errors that stopped the pipeline
    pub errors: Vec<JsonError>,
    /// Pipeline result details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<EnhanceResult>,
}

/// Enhancement result details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhanceResult {
    /// Input file path
    pub input: String,
    /// Path of the raw take
    pub raw_path: String,
    /// Path of the enhanced take
    pub enhanced_path: String,
    /// Engine that processed the frames
    pub engine: String,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Frame length in samples
    pub frame_length: usize,
    /// Engine delay in samples
    pub delay_samples: usize,
    /// Raw frames collected
    pub frames_captured: usize,
    /// Enhanced frames collected
    pub frames_enhanced: usize,
    /// Enhanced frames dropped as delay compensation
    pub frames_dropped: usize,
    /// Input samples too short for a full frame, left unprocessed
    pub trailing_samples: usize,
    /// BLAKE3 hash of the raw PCM payload
    pub raw_hash: String,
    /// BLAKE3 hash of the enhanced PCM payload
    pub enhanced_hash: String,
    /// Duration of the raw take in seconds
    pub raw_duration_seconds: f64,
    /// Duration of the enhanced take in seconds
    pub enhanced_duration_seconds: f64,
    /// Engine errors reported out-of-band (the takes were still written)
    pub engine_errors: Vec<JsonError>,
}

impl EnhanceOutput {
    /// Creates a successful enhance output.
    pub fn success(result: EnhanceResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed enhance output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// JSON output for the `info` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoOutput {
    /// Whether the probe succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Probe result details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<InfoResult>,
}

/// WAV probe details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoResult {
    /// File path
    pub path: String,
    /// Channel count
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Bits per sample
    pub bits_per_sample: u16,
    /// Samples per channel
    pub num_samples: usize,
    /// Duration in seconds
    pub duration_seconds: f64,
    /// BLAKE3 hash of the PCM payload
    pub pcm_hash: String,
}

impl InfoOutput {
    /// Creates a successful info output.
    pub fn success(result: InfoResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed info output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// JSON output for the `compare` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareOutput {
    /// Whether the comparison ran (not whether the files matched)
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Comparison details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<CompareResult>,
}

/// Comparison details for two WAV files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareResult {
    /// First file path
    pub path_a: String,
    /// Second file path
    pub path_b: String,
    /// BLAKE3 hash of file A's bytes
    pub file_hash_a: String,
    /// BLAKE3 hash of file B's bytes
    pub file_hash_b: String,
    /// Whether the containers are byte-identical
    pub identical: bool,
    /// BLAKE3 hash of A's PCM payload
    pub pcm_hash_a: String,
    /// BLAKE3 hash of B's PCM payload
    pub pcm_hash_b: String,
    /// Samples in A's payload
    pub num_samples_a: usize,
    /// Samples in B's payload
    pub num_samples_b: usize,
    /// Whether the PCM payloads are identical
    pub payload_identical: bool,
    /// Largest absolute sample difference over the shared prefix
    pub max_abs_diff: u32,
}

impl CompareOutput {
    /// Creates a successful compare output.
    pub fn success(result: CompareResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed compare output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}
