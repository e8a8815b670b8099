//! Ordered frame collection for an active recording session.

use crate::error::AudioResult;

use super::merge::merge_frames;

/// Collects frames in arrival order until a session merges them.
///
/// The accumulator is append-only while recording. Merging consumes it,
/// matching the session lifecycle: frames are merged exactly once, after
/// the stream has stopped, and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct FrameAccumulator {
    frames: Vec<Vec<i16>>,
    frame_length: usize,
}

impl FrameAccumulator {
    /// Creates an empty accumulator for frames of `frame_length` samples.
    pub fn new(frame_length: usize) -> Self {
        Self {
            frames: Vec::new(),
            frame_length,
        }
    }

    /// Appends a frame in arrival order.
    pub fn push(&mut self, frame: Vec<i16>) {
        self.frames.push(frame);
    }

    /// Number of frames collected so far.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Returns true if no frames have been collected.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Total samples across all collected frames.
    pub fn total_samples(&self) -> usize {
        self.frames.iter().map(|frame| frame.len()).sum()
    }

    /// The frame length this accumulator expects, in samples.
    pub fn frame_length(&self) -> usize {
        self.frame_length
    }

    /// Merges the collected frames, dropping the delay window.
    ///
    /// Consumes the accumulator; see [`merge_frames`] for the drop policy
    /// and validation rules.
    pub fn merge(self, delay_samples: usize) -> AudioResult<Vec<i16>> {
        merge_frames(&self.frames, delay_samples, self.frame_length)
    }
}
