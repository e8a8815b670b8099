//! Tests for delay-compensated frame merging.

use pretty_assertions::assert_eq;

use super::*;
use crate::error::AudioError;

/// Builds a frame whose samples encode its index and position, so merged
/// output can be checked sample by sample.
fn ramp_frame(index: usize, frame_length: usize) -> Vec<i16> {
    (0..frame_length)
        .map(|j| (index * 1000 + j) as i16)
        .collect()
}

#[test]
fn test_delay_zero_identity() {
    let frames: Vec<Vec<i16>> = (0..4).map(|i| ramp_frame(i, 160)).collect();

    let merged = merge_frames(&frames, 0, 160).unwrap();

    assert_eq!(merged.len(), 4 * 160);
    let expected: Vec<i16> = frames.iter().flatten().copied().collect();
    assert_eq!(merged, expected);
}

#[test]
fn test_delay_skip_drops_leading_frames() {
    // frame_length 160, delay 320: frames 0 and 1 fall inside the delay
    // window (0*160 < 320, 1*160 < 320), frame 2 starts the output.
    let frames: Vec<Vec<i16>> = (0..5).map(|i| ramp_frame(i, 160)).collect();

    let merged = merge_frames(&frames, 320, 160).unwrap();

    assert_eq!(merged.len(), 3 * 160);
    assert_eq!(merged[0..160], ramp_frame(2, 160));
    assert_eq!(merged[160..320], ramp_frame(3, 160));
    assert_eq!(merged[320..480], ramp_frame(4, 160));
}

#[test]
fn test_delay_not_a_frame_multiple_rounds_up() {
    // delay 300 with frame_length 160 still swallows two frames:
    // 0*160 = 0 < 300 and 1*160 = 160 < 300, but 2*160 = 320 is not.
    let frames: Vec<Vec<i16>> = (0..4).map(|i| ramp_frame(i, 160)).collect();

    let merged = merge_frames(&frames, 300, 160).unwrap();

    assert_eq!(merged.len(), 2 * 160);
    assert_eq!(merged[0..160], ramp_frame(2, 160));
}

#[test]
fn test_all_frames_delayed() {
    let frames: Vec<Vec<i16>> = (0..3).map(|i| ramp_frame(i, 160)).collect();

    // delay equals the whole recording
    let merged = merge_frames(&frames, 3 * 160, 160).unwrap();
    assert!(merged.is_empty());

    // delay beyond the recording behaves the same
    let merged = merge_frames(&frames, 10_000, 160).unwrap();
    assert!(merged.is_empty());
}

#[test]
fn test_empty_frames() {
    let merged = merge_frames(&[], 0, 160).unwrap();
    assert!(merged.is_empty());

    // delay is irrelevant when nothing was collected
    let merged = merge_frames(&[], 480, 160).unwrap();
    assert!(merged.is_empty());
}

#[test]
fn test_single_frame_no_delay() {
    let frames = vec![ramp_frame(0, 512)];
    let merged = merge_frames(&frames, 0, 512).unwrap();
    assert_eq!(merged, frames[0]);
}

#[test]
fn test_order_sensitivity() {
    // Same frames, same delay, swapped order: the delay window swallows
    // whichever frames arrive first, so the results differ.
    let ordered: Vec<Vec<i16>> = (0..4).map(|i| ramp_frame(i, 8)).collect();
    let mut shuffled = ordered.clone();
    shuffled.swap(0, 3);
    shuffled.swap(1, 2);

    let merged_ordered = merge_frames(&ordered, 16, 8).unwrap();
    let merged_shuffled = merge_frames(&shuffled, 16, 8).unwrap();

    assert_ne!(merged_ordered, merged_shuffled);
}

#[test]
fn test_rejects_zero_frame_length() {
    let err = merge_frames(&[vec![1, 2, 3]], 0, 0).unwrap_err();
    assert!(matches!(err, AudioError::InvalidFrameLength { length: 0 }));
}

#[test]
fn test_rejects_mismatched_frame() {
    let frames = vec![vec![0i16; 160], vec![0i16; 160], vec![0i16; 158]];

    let err = merge_frames(&frames, 0, 160).unwrap_err();
    match err {
        AudioError::FrameSizeMismatch {
            index,
            expected,
            found,
        } => {
            assert_eq!(index, 2);
            assert_eq!(expected, 160);
            assert_eq!(found, 158);
        }
        other => panic!("expected FrameSizeMismatch, got {:?}", other),
    }
}

#[test]
fn test_rejects_mismatched_frame_even_when_dropped() {
    // The short frame sits inside the delay window, but validation still
    // catches it: a ragged sequence means the producer misbehaved.
    let frames = vec![vec![0i16; 10], vec![0i16; 160]];

    let err = merge_frames(&frames, 160, 160).unwrap_err();
    assert!(matches!(
        err,
        AudioError::FrameSizeMismatch { index: 0, .. }
    ));
}

#[test]
fn test_dropped_frame_count() {
    // Exact multiples
    assert_eq!(dropped_frame_count(5, 0, 160), 0);
    assert_eq!(dropped_frame_count(5, 160, 160), 1);
    assert_eq!(dropped_frame_count(5, 320, 160), 2);

    // Rounds up between multiples
    assert_eq!(dropped_frame_count(5, 1, 160), 1);
    assert_eq!(dropped_frame_count(5, 161, 160), 2);

    // Capped at the frame count
    assert_eq!(dropped_frame_count(5, 800, 160), 5);
    assert_eq!(dropped_frame_count(5, 10_000, 160), 5);
    assert_eq!(dropped_frame_count(0, 320, 160), 0);
}

#[test]
fn test_merge_preserves_sample_values() {
    // Extremes survive the merge untouched
    let frames = vec![vec![i16::MIN; 4], vec![i16::MAX; 4]];

    let merged = merge_frames(&frames, 0, 4).unwrap();
    assert_eq!(
        merged,
        vec![
            i16::MIN,
            i16::MIN,
            i16::MIN,
            i16::MIN,
            i16::MAX,
            i16::MAX,
            i16::MAX,
            i16::MAX
        ]
    );
}
