//! Recording sessions: queue-fed frame collection with a single
//! close-and-merge step.
//!
//! A session decouples frame production from reassembly. Capture and
//! enhancement stages push frames onto queues through sender handles as
//! they arrive; nothing is merged, inspected, or mutated until the caller
//! signals that recording stopped by closing the session. Closing drains
//! the queues exactly once, applies delay compensation to the enhanced
//! stream, and packages both takes as WAV containers.

mod capture;
mod config;
mod queue;

#[cfg(test)]
mod tests_session;

// Re-export public API
pub use capture::{CaptureSession, SessionOutput};
pub use config::SessionConfig;
pub use queue::{ErrorSender, FrameSender};
