//! Tests for the session frame accumulator.

use super::*;
use crate::error::AudioError;

#[test]
fn test_accumulator_starts_empty() {
    let acc = FrameAccumulator::new(160);
    assert!(acc.is_empty());
    assert_eq!(acc.frame_count(), 0);
    assert_eq!(acc.total_samples(), 0);
    assert_eq!(acc.frame_length(), 160);
}

#[test]
fn test_accumulator_push_preserves_order() {
    let mut acc = FrameAccumulator::new(4);
    acc.push(vec![1, 1, 1, 1]);
    acc.push(vec![2, 2, 2, 2]);
    acc.push(vec![3, 3, 3, 3]);

    assert_eq!(acc.frame_count(), 3);
    assert_eq!(acc.total_samples(), 12);

    let merged = acc.merge(0).unwrap();
    assert_eq!(merged, vec![1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3]);
}

#[test]
fn test_accumulator_merge_applies_delay() {
    let mut acc = FrameAccumulator::new(4);
    acc.push(vec![9, 9, 9, 9]); // warm-up frame
    acc.push(vec![5, 5, 5, 5]);

    let merged = acc.merge(4).unwrap();
    assert_eq!(merged, vec![5, 5, 5, 5]);
}

#[test]
fn test_accumulator_merge_empty() {
    let acc = FrameAccumulator::new(160);
    let merged = acc.merge(480).unwrap();
    assert!(merged.is_empty());
}

#[test]
fn test_accumulator_merge_rejects_ragged_frames() {
    let mut acc = FrameAccumulator::new(4);
    acc.push(vec![1, 2, 3, 4]);
    acc.push(vec![1, 2, 3]); // short frame slips in at index 1

    let err = acc.merge(0).unwrap_err();
    assert!(matches!(
        err,
        AudioError::FrameSizeMismatch {
            index: 1,
            expected: 4,
            found: 3,
        }
    ));
}
