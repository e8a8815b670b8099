//! Frame reassembly with processing-delay compensation.
//!
//! Streaming enhancement engines emit fixed-length frames, and the first
//! frames carry warm-up output rather than real audio. This module merges
//! an ordered frame sequence back into one contiguous buffer, excising the
//! frames that fall inside the engine's reported delay so the result stays
//! time-aligned with the original input.

mod accumulator;
mod merge;

#[cfg(test)]
mod tests_accumulator;
#[cfg(test)]
mod tests_merge;

// Re-export public API
pub use accumulator::FrameAccumulator;
pub use merge::{dropped_frame_count, merge_frames};
