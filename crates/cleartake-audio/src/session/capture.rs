//! Recording session with an explicit close-and-merge lifecycle.

use crate::error::{AudioError, AudioResult};
use crate::frame::{dropped_frame_count, FrameAccumulator};
use crate::wav::{WavFormat, WavResult};

use super::config::SessionConfig;
use super::queue::{error_queue, frame_queue, ErrorSender, FrameSender};
use super::queue::{ErrorReceiver, FrameReceiver};

/// An active recording session collecting a raw and an enhanced take.
///
/// The session owns the receiving halves of three queues: raw frames as
/// captured, enhanced frames as the engine emits them, and out-of-band
/// engine errors. Producers push through cloned sender handles while the
/// session is open.
///
/// [`close`](CaptureSession::close) is the session-closed signal. It
/// drains each queue exactly once, merges the raw take with no delay and
/// the enhanced take with the engine's reported delay, and packages both
/// as WAV containers. Callers stop their producers first; frames still in
/// flight when `close` runs are not guaranteed to land.
#[derive(Debug)]
pub struct CaptureSession {
    config: SessionConfig,
    raw_tx: FrameSender,
    raw_rx: FrameReceiver,
    enhanced_tx: FrameSender,
    enhanced_rx: FrameReceiver,
    error_tx: ErrorSender,
    error_rx: ErrorReceiver,
}

/// Everything a closed session produced.
///
/// Engine errors reported during the session do not discard it: both
/// takes carry whatever frames were collected, and the caller decides
/// whether errors make the recording unusable.
#[derive(Debug)]
pub struct SessionOutput {
    /// The captured stream, packaged as recorded.
    pub raw: WavResult,
    /// The engine output stream, delay-compensated and packaged.
    pub enhanced: WavResult,
    /// Raw frames collected.
    pub frames_captured: usize,
    /// Enhanced frames collected.
    pub frames_enhanced: usize,
    /// Enhanced frames dropped as delay compensation.
    pub frames_dropped: usize,
    /// Input samples too short for a full frame, left unprocessed.
    /// Only the offline pipeline produces a nonzero value here.
    pub trailing_samples: usize,
    /// Engine errors reported out-of-band during the session.
    pub engine_errors: Vec<AudioError>,
}

impl SessionOutput {
    /// Returns true if the engine reported any errors.
    pub fn has_engine_errors(&self) -> bool {
        !self.engine_errors.is_empty()
    }
}

impl CaptureSession {
    /// Opens a session for the given configuration.
    ///
    /// # Returns
    /// The session, or a validation error if the configuration cannot
    /// drive one
    pub fn start(config: SessionConfig) -> AudioResult<Self> {
        config.validate()?;

        let (raw_tx, raw_rx) = frame_queue();
        let (enhanced_tx, enhanced_rx) = frame_queue();
        let (error_tx, error_rx) = error_queue();

        Ok(Self {
            config,
            raw_tx,
            raw_rx,
            enhanced_tx,
            enhanced_rx,
            error_tx,
            error_rx,
        })
    }

    /// The configuration this session was opened with.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// A handle for pushing captured frames.
    pub fn raw_sender(&self) -> FrameSender {
        self.raw_tx.clone()
    }

    /// A handle for pushing engine output frames.
    pub fn enhanced_sender(&self) -> FrameSender {
        self.enhanced_tx.clone()
    }

    /// A handle for reporting engine errors out-of-band.
    pub fn error_sender(&self) -> ErrorSender {
        self.error_tx.clone()
    }

    /// Closes the session: drains the queues once, merges both takes,
    /// and packages them.
    ///
    /// # Returns
    /// The session output, or an error if the collected frames were
    /// ragged or the configuration could not be packaged
    pub fn close(mut self) -> AudioResult<SessionOutput> {
        let mut raw_take = FrameAccumulator::new(self.config.frame_length);
        for frame in self.raw_rx.drain() {
            raw_take.push(frame);
        }
        let mut enhanced_take = FrameAccumulator::new(self.config.frame_length);
        for frame in self.enhanced_rx.drain() {
            enhanced_take.push(frame);
        }
        let engine_errors = self.error_rx.drain();

        let frames_captured = raw_take.frame_count();
        let frames_enhanced = enhanced_take.frame_count();
        let frames_dropped = dropped_frame_count(
            frames_enhanced,
            self.config.delay_samples,
            self.config.frame_length,
        );

        // The raw take carries no engine latency, so it merges with delay 0.
        let raw_samples = raw_take.merge(0)?;
        let enhanced_samples = enhanced_take.merge(self.config.delay_samples)?;

        let format = WavFormat {
            channels: self.config.channels,
            sample_rate: self.config.sample_rate,
            bits_per_sample: 16,
        };
        let raw = WavResult::from_samples(&raw_samples, &format)?;
        let enhanced = WavResult::from_samples(&enhanced_samples, &format)?;

        Ok(SessionOutput {
            raw,
            enhanced,
            frames_captured,
            frames_enhanced,
            frames_dropped,
            trailing_samples: 0,
            engine_errors,
        })
    }
}
