//! Frame and error queues connecting capture stages to the session.
//!
//! Producers hold cloneable sender handles and push as frames arrive,
//! possibly from another thread. The session keeps the receiving halves
//! and drains each exactly once when it closes. Sends never block; the
//! queues are unbounded because a recording session's frame count is
//! bounded by its duration.

use tokio::sync::mpsc;

use crate::error::{AudioError, AudioResult};

/// Sending half of a frame queue.
#[derive(Debug, Clone)]
pub struct FrameSender {
    tx: mpsc::UnboundedSender<Vec<i16>>,
}

impl FrameSender {
    /// Queues a frame in arrival order.
    ///
    /// # Returns
    /// `SessionClosed` if the owning session has already been closed
    pub fn send(&self, frame: Vec<i16>) -> AudioResult<()> {
        self.tx.send(frame).map_err(|_| AudioError::SessionClosed)
    }
}

/// Receiving half of a frame queue.
#[derive(Debug)]
pub(crate) struct FrameReceiver {
    rx: mpsc::UnboundedReceiver<Vec<i16>>,
}

impl FrameReceiver {
    /// Takes every queued frame, in arrival order.
    pub(crate) fn drain(&mut self) -> Vec<Vec<i16>> {
        let mut frames = Vec::new();
        while let Ok(frame) = self.rx.try_recv() {
            frames.push(frame);
        }
        frames
    }
}

/// Creates a connected frame queue.
pub(crate) fn frame_queue() -> (FrameSender, FrameReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (FrameSender { tx }, FrameReceiver { rx })
}

/// Sending half of the out-of-band engine error queue.
///
/// Reporting never fails: an error raised after the session is gone has
/// no observer left and is dropped.
#[derive(Debug, Clone)]
pub struct ErrorSender {
    tx: mpsc::UnboundedSender<AudioError>,
}

impl ErrorSender {
    /// Reports an engine error without interrupting collection.
    pub fn send(&self, error: AudioError) {
        let _ = self.tx.send(error);
    }
}

/// Receiving half of the engine error queue.
#[derive(Debug)]
pub(crate) struct ErrorReceiver {
    rx: mpsc::UnboundedReceiver<AudioError>,
}

impl ErrorReceiver {
    /// Takes every reported error, in arrival order.
    pub(crate) fn drain(&mut self) -> Vec<AudioError> {
        let mut errors = Vec::new();
        while let Ok(error) = self.rx.try_recv() {
            errors.push(error);
        }
        errors
    }
}

/// Creates a connected error queue.
pub(crate) fn error_queue() -> (ErrorSender, ErrorReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ErrorSender { tx }, ErrorReceiver { rx })
}
