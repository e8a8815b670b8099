//! Offline enhancement pipeline.
//!
//! Drives a full capture session synchronously: frames an input buffer,
//! feeds each frame through an engine, and closes the session. The same
//! queue-backed [`CaptureSession`] serves threaded producers; this module
//! is the single-call path for buffers that are already in memory.

use crate::engine::EnhancementEngine;
use crate::error::AudioResult;
use crate::session::{CaptureSession, SessionConfig, SessionOutput};

/// Runs `samples` through `engine` and returns both takes.
///
/// The input is split into engine-sized frames. A trailing chunk shorter
/// than one frame is never fed to the engine; its length is reported as
/// `trailing_samples` in the output. Engine failures on individual frames
/// are collected out-of-band and do not stop the pipeline.
///
/// # Arguments
/// * `engine` - The enhancement engine to run
/// * `samples` - Mono 16-bit PCM input
///
/// # Returns
/// The session output with raw and enhanced takes, or an error if the
/// engine configuration cannot drive a session
pub fn enhance_samples(
    engine: &mut dyn EnhancementEngine,
    samples: &[i16],
) -> AudioResult<SessionOutput> {
    let config = SessionConfig::from_engine(engine);
    let session = CaptureSession::start(config)?;

    let raw = session.raw_sender();
    let enhanced = session.enhanced_sender();
    let errors = session.error_sender();

    let frame_length = engine.frame_length();
    for frame in samples.chunks_exact(frame_length) {
        raw.send(frame.to_vec())?;
        match engine.process_frame(frame) {
            Ok(output) => enhanced.send(output)?,
            Err(err) => errors.send(err),
        }
    }

    let mut output = session.close()?;
    output.trailing_samples = samples.len() % frame_length;
    Ok(output)
}
