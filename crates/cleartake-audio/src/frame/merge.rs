//! Delay-compensated frame merging.

use crate::error::{AudioError, AudioResult};

/// Merges an ordered sequence of fixed-length frames into one contiguous
/// buffer, dropping the leading frames that fall inside the engine's
/// processing delay.
///
/// Frame `i` (0-based, arrival order) is dropped while
/// `i * frame_length < delay_samples`; every later frame is packed
/// immediately after the previous retained one. Frames emitted during the
/// delay window are engine warm-up artifacts, and skipping them keeps the
/// merged output time-aligned with the stream that fed the engine.
///
/// The result is trimmed to the retained content: `delay_samples = 0`
/// concatenates everything, and a delay covering the whole sequence yields
/// an empty buffer.
///
/// Frames MUST be supplied in original temporal order. The drop policy
/// assumes the first frames by index are the first frames by time, so a
/// reordered sequence merges to a corrupted buffer.
///
/// # Arguments
/// * `frames` - Frames in arrival order, each exactly `frame_length` samples
/// * `delay_samples` - Engine processing delay in samples
/// * `frame_length` - Samples per frame
///
/// # Returns
/// The merged samples, or `InvalidFrameLength` / `FrameSizeMismatch` if the
/// frames do not all match `frame_length`
pub fn merge_frames(
    frames: &[Vec<i16>],
    delay_samples: usize,
    frame_length: usize,
) -> AudioResult<Vec<i16>> {
    if frame_length == 0 {
        return Err(AudioError::InvalidFrameLength {
            length: frame_length,
        });
    }

    for (index, frame) in frames.iter().enumerate() {
        if frame.len() != frame_length {
            return Err(AudioError::FrameSizeMismatch {
                index,
                expected: frame_length,
                found: frame.len(),
            });
        }
    }

    let dropped = dropped_frame_count(frames.len(), delay_samples, frame_length);

    let mut merged = Vec::with_capacity((frames.len() - dropped) * frame_length);
    for frame in &frames[dropped..] {
        merged.extend_from_slice(frame);
    }

    Ok(merged)
}

/// Number of leading frames the delay window swallows.
///
/// This is `ceil(delay_samples / frame_length)`, capped at the frame count:
/// frame `i` is dropped exactly when `i * frame_length < delay_samples`.
pub fn dropped_frame_count(
    frame_count: usize,
    delay_samples: usize,
    frame_length: usize,
) -> usize {
    if frame_length == 0 {
        return 0;
    }
    delay_samples.div_ceil(frame_length).min(frame_count)
}
