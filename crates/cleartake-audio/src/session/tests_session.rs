//! Tests for the recording session lifecycle.

use pretty_assertions::assert_eq;

use super::*;
use crate::error::AudioError;
use crate::wav::decode_pcm16;

fn config_4() -> SessionConfig {
    SessionConfig::new(16000, 4)
}

#[test]
fn test_start_validates_config() {
    let err = CaptureSession::start(SessionConfig::new(16000, 0)).unwrap_err();
    assert!(matches!(err, AudioError::InvalidFrameLength { length: 0 }));

    let err = CaptureSession::start(SessionConfig::new(0, 160)).unwrap_err();
    assert!(matches!(err, AudioError::InvalidSampleRate { rate: 0 }));
}

#[test]
fn test_session_collects_both_takes() {
    let session = CaptureSession::start(config_4()).unwrap();
    let raw = session.raw_sender();
    let enhanced = session.enhanced_sender();

    raw.send(vec![1, 2, 3, 4]).unwrap();
    raw.send(vec![5, 6, 7, 8]).unwrap();
    enhanced.send(vec![10, 20, 30, 40]).unwrap();
    enhanced.send(vec![50, 60, 70, 80]).unwrap();

    let output = session.close().unwrap();

    assert_eq!(output.frames_captured, 2);
    assert_eq!(output.frames_enhanced, 2);
    assert_eq!(output.frames_dropped, 0);
    assert!(!output.has_engine_errors());

    assert_eq!(
        decode_pcm16(&output.raw.wav_data).unwrap(),
        vec![1, 2, 3, 4, 5, 6, 7, 8]
    );
    assert_eq!(
        decode_pcm16(&output.enhanced.wav_data).unwrap(),
        vec![10, 20, 30, 40, 50, 60, 70, 80]
    );
}

#[test]
fn test_session_applies_delay_to_enhanced_only() {
    let session = CaptureSession::start(config_4().with_delay(4)).unwrap();
    let raw = session.raw_sender();
    let enhanced = session.enhanced_sender();

    for i in 0..3i16 {
        raw.send(vec![i; 4]).unwrap();
        enhanced.send(vec![100 + i; 4]).unwrap();
    }

    let output = session.close().unwrap();

    // Raw take keeps every frame
    assert_eq!(output.raw.num_samples, 12);
    assert_eq!(
        decode_pcm16(&output.raw.wav_data).unwrap(),
        vec![0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2]
    );

    // Enhanced take loses the warm-up frame
    assert_eq!(output.frames_dropped, 1);
    assert_eq!(output.enhanced.num_samples, 8);
    assert_eq!(
        decode_pcm16(&output.enhanced.wav_data).unwrap(),
        vec![101, 101, 101, 101, 102, 102, 102, 102]
    );
}

#[test]
fn test_session_output_metadata() {
    let session = CaptureSession::start(SessionConfig::new(48000, 2)).unwrap();
    session.raw_sender().send(vec![1, 2]).unwrap();
    session.enhanced_sender().send(vec![3, 4]).unwrap();

    let output = session.close().unwrap();

    assert_eq!(output.raw.sample_rate, 48000);
    assert_eq!(output.raw.channels, 1);
    assert_eq!(output.enhanced.sample_rate, 48000);
    assert_eq!(output.raw.pcm_hash.len(), 64);
    assert_ne!(output.raw.pcm_hash, output.enhanced.pcm_hash);
}

#[test]
fn test_empty_session_produces_valid_containers() {
    let session = CaptureSession::start(config_4()).unwrap();
    let output = session.close().unwrap();

    assert_eq!(output.frames_captured, 0);
    assert_eq!(output.frames_enhanced, 0);
    assert_eq!(output.frames_dropped, 0);
    assert_eq!(output.raw.wav_data.len(), 44);
    assert_eq!(output.enhanced.wav_data.len(), 44);
}

#[test]
fn test_senders_work_across_threads() {
    let session = CaptureSession::start(config_4()).unwrap();
    let raw = session.raw_sender();

    let producer = std::thread::spawn(move || {
        for i in 0..64i16 {
            raw.send(vec![i, i, i, i]).unwrap();
        }
    });
    producer.join().unwrap();

    let output = session.close().unwrap();
    assert_eq!(output.frames_captured, 64);

    // Arrival order survives the thread hop
    let samples = decode_pcm16(&output.raw.wav_data).unwrap();
    assert_eq!(samples[0..4], [0, 0, 0, 0]);
    assert_eq!(samples[252..256], [63, 63, 63, 63]);
}

#[test]
fn test_send_after_close_fails() {
    let session = CaptureSession::start(config_4()).unwrap();
    let raw = session.raw_sender();

    session.close().unwrap();

    let err = raw.send(vec![0, 0, 0, 0]).unwrap_err();
    assert!(matches!(err, AudioError::SessionClosed));
}

#[test]
fn test_engine_errors_ride_out_of_band() {
    let session = CaptureSession::start(config_4()).unwrap();
    let raw = session.raw_sender();
    let errors = session.error_sender();

    raw.send(vec![7, 7, 7, 7]).unwrap();
    errors.send(AudioError::engine("mid-session hiccup"));
    raw.send(vec![8, 8, 8, 8]).unwrap();

    let output = session.close().unwrap();

    // Collection continued past the error and the take survives
    assert_eq!(output.frames_captured, 2);
    assert!(output.has_engine_errors());
    assert_eq!(output.engine_errors.len(), 1);
    assert!(output.engine_errors[0]
        .to_string()
        .contains("mid-session hiccup"));
}

#[test]
fn test_close_rejects_ragged_frames() {
    let session = CaptureSession::start(config_4()).unwrap();
    session.raw_sender().send(vec![1, 2, 3, 4]).unwrap();
    session.raw_sender().send(vec![1, 2]).unwrap();

    let err = session.close().unwrap_err();
    assert!(matches!(
        err,
        AudioError::FrameSizeMismatch {
            index: 1,
            expected: 4,
            found: 2,
        }
    ));
}
