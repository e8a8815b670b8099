//! Error types for the audio core.

use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur while packaging or reassembling recordings.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Invalid channel count.
    #[error("invalid channel count: {channels}")]
    InvalidChannelCount {
        /// The invalid channel count.
        channels: u16,
    },

    /// Invalid frame length.
    #[error("invalid frame length: {length}")]
    InvalidFrameLength {
        /// The invalid frame length.
        length: usize,
    },

    /// A frame did not match the session frame length.
    #[error("frame {index} has {found} samples, expected {expected}")]
    FrameSizeMismatch {
        /// 0-based index of the offending frame in arrival order.
        index: usize,
        /// Expected frame length in samples.
        expected: usize,
        /// Actual frame length in samples.
        found: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// Enhancement engine failure.
    #[error("engine error: {message}")]
    Engine {
        /// Error message.
        message: String,
    },

    /// Frame pushed into a session that has already been closed.
    #[error("session is closed")]
    SessionClosed,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates an engine error.
    pub fn engine(message: impl Into<String>) -> Self {
        Self::Engine {
            message: message.into(),
        }
    }

    /// Stable error code for machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidSampleRate { .. } => "AUDIO_001",
            AudioError::InvalidChannelCount { .. } => "AUDIO_002",
            AudioError::InvalidFrameLength { .. } => "AUDIO_003",
            AudioError::FrameSizeMismatch { .. } => "AUDIO_004",
            AudioError::InvalidParameter { .. } => "AUDIO_005",
            AudioError::Engine { .. } => "AUDIO_006",
            AudioError::SessionClosed => "AUDIO_007",
            AudioError::Io(_) => "AUDIO_008",
        }
    }
}
