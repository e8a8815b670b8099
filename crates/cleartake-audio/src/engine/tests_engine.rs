//! Tests for the enhancement engine implementations.

use super::*;
use crate::error::AudioError;
use crate::frame::merge_frames;

fn ramp(len: usize, start: i16) -> Vec<i16> {
    (0..len).map(|i| start + i as i16).collect()
}

// =========================================================================
// PassthroughEngine
// =========================================================================

#[test]
fn test_passthrough_voice_defaults() {
    let engine = PassthroughEngine::voice();
    assert_eq!(engine.frame_length(), 160);
    assert_eq!(engine.sample_rate(), 16000);
    assert_eq!(engine.delay_samples(), 0);
}

#[test]
fn test_passthrough_zero_delay_is_identity() {
    let mut engine = PassthroughEngine::new(8, 16000);
    let frame = ramp(8, 100);

    let out = engine.process_frame(&frame).unwrap();
    assert_eq!(out, frame);
}

#[test]
fn test_passthrough_delay_shifts_output() {
    let mut engine = PassthroughEngine::new(4, 16000).with_delay(2);

    let out1 = engine.process_frame(&[10, 20, 30, 40]).unwrap();
    // Two zeros of warm-up, then the input head
    assert_eq!(out1, vec![0, 0, 10, 20]);

    let out2 = engine.process_frame(&[50, 60, 70, 80]).unwrap();
    // The line carries the previous tail across frames
    assert_eq!(out2, vec![30, 40, 50, 60]);
}

#[test]
fn test_passthrough_merge_recovers_input() {
    // With a whole-frame delay, merging the output with that delay gives
    // back the input minus the tail still in the delay line.
    let frame_length = 4;
    let delay = 4;
    let mut engine = PassthroughEngine::new(frame_length, 16000).with_delay(delay);

    let input: Vec<i16> = (1..=16).collect();
    let mut output_frames = Vec::new();
    for frame in input.chunks_exact(frame_length) {
        output_frames.push(engine.process_frame(frame).unwrap());
    }

    let merged = merge_frames(&output_frames, delay, frame_length).unwrap();
    assert_eq!(merged, input[..input.len() - delay]);
}

#[test]
fn test_passthrough_rejects_wrong_size() {
    let mut engine = PassthroughEngine::new(160, 16000);
    engine.process_frame(&[0; 160]).unwrap();

    let err = engine.process_frame(&[0; 100]).unwrap_err();
    match err {
        AudioError::FrameSizeMismatch {
            index,
            expected,
            found,
        } => {
            // Index counts frames already accepted
            assert_eq!(index, 1);
            assert_eq!(expected, 160);
            assert_eq!(found, 100);
        }
        other => panic!("expected FrameSizeMismatch, got {:?}", other),
    }
}

#[test]
fn test_passthrough_reset_reprimes_delay_line() {
    let mut engine = PassthroughEngine::new(4, 16000).with_delay(2);
    engine.process_frame(&[1, 2, 3, 4]).unwrap();

    engine.reset();

    // After reset the warm-up zeros are back
    let out = engine.process_frame(&[5, 6, 7, 8]).unwrap();
    assert_eq!(out, vec![0, 0, 5, 6]);
}

#[test]
fn test_engines_usable_as_trait_objects() {
    let mut engines: Vec<Box<dyn EnhancementEngine>> = vec![
        Box::new(PassthroughEngine::voice()),
        Box::new(PassthroughEngine::new(320, 32000).with_delay(320)),
    ];

    for engine in &mut engines {
        let frame = vec![0i16; engine.frame_length()];
        let out = engine.process_frame(&frame).unwrap();
        assert_eq!(out.len(), engine.frame_length());
    }
}

// =========================================================================
// RnnoiseEngine
// =========================================================================

#[cfg(feature = "rnnoise")]
mod rnnoise_tests {
    use super::*;

    fn tone_frame(amplitude: f32) -> Vec<i16> {
        (0..RnnoiseEngine::FRAME_LENGTH)
            .map(|i| {
                let t = i as f32 / RnnoiseEngine::SAMPLE_RATE as f32;
                (amplitude * (2.0 * std::f32::consts::PI * 440.0 * t).sin()) as i16
            })
            .collect()
    }

    #[test]
    fn test_rnnoise_capabilities() {
        let engine = RnnoiseEngine::new();
        assert_eq!(engine.frame_length(), 480);
        assert_eq!(engine.sample_rate(), 48000);
        // One warm-up frame of model output
        assert_eq!(engine.delay_samples(), 480);
    }

    #[test]
    fn test_rnnoise_output_shape() {
        let mut engine = RnnoiseEngine::new();
        let out = engine.process_frame(&tone_frame(8000.0)).unwrap();
        assert_eq!(out.len(), RnnoiseEngine::FRAME_LENGTH);
    }

    #[test]
    fn test_rnnoise_rejects_wrong_size() {
        let mut engine = RnnoiseEngine::new();
        let err = engine.process_frame(&[0i16; 100]).unwrap_err();
        assert!(matches!(
            err,
            AudioError::FrameSizeMismatch {
                expected: 480,
                found: 100,
                ..
            }
        ));
    }

    #[test]
    fn test_rnnoise_is_deterministic() {
        let frames: Vec<Vec<i16>> = (0..3).map(|_| tone_frame(8000.0)).collect();

        let mut engine_a = RnnoiseEngine::new();
        let mut engine_b = RnnoiseEngine::new();

        for frame in &frames {
            let out_a = engine_a.process_frame(frame).unwrap();
            let out_b = engine_b.process_frame(frame).unwrap();
            assert_eq!(out_a, out_b);
        }
    }

    #[test]
    fn test_rnnoise_voice_probability_in_range() {
        let mut engine = RnnoiseEngine::new();
        for _ in 0..4 {
            engine.process_frame(&tone_frame(8000.0)).unwrap();
            let vad = engine.last_voice_probability();
            assert!((0.0..=1.0).contains(&vad), "vad out of range: {}", vad);
        }
    }

    #[test]
    fn test_rnnoise_reset_restores_initial_state() {
        let frame = tone_frame(8000.0);

        let mut fresh = RnnoiseEngine::new();
        let fresh_out = fresh.process_frame(&frame).unwrap();

        let mut reused = RnnoiseEngine::new();
        reused.process_frame(&frame).unwrap();
        reused.process_frame(&frame).unwrap();
        reused.reset();
        let reused_out = reused.process_frame(&frame).unwrap();

        // A reset engine replays its first-frame behavior
        assert_eq!(fresh_out, reused_out);
    }
}
