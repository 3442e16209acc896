/*!
 * Tests for the two-track combiner
 */

use vidcap::captions::{CaptionCue, combine};
use vidcap::errors::CaptionError;

/// Test combining two aligned tracks
#[test]
fn test_combine_withAlignedTracks_shouldStackSecondaryTextUnderPrimary() {
    let primary = vec![
        CaptionCue::new(1, 0.0, 3.76, "First cue."),
        CaptionCue::new(2, 3.76, 7.2, "Second cue."),
    ];
    let secondary = vec![
        CaptionCue::new(1, 0.0, 3.76, "最初のキュー。"),
        CaptionCue::new(2, 3.76, 7.2, "二番目のキュー。"),
    ];

    let combined = combine(&primary, &secondary).unwrap();
    assert_eq!(combined.len(), 2);
    assert_eq!(combined[0].text, "First cue.\n最初のキュー。");
    assert_eq!(combined[1].text, "Second cue.\n二番目のキュー。");
}

/// Test that the primary track's index and timing win
#[test]
fn test_combine_withDivergentSecondaryTiming_shouldKeepPrimaryTiming() {
    let primary = vec![CaptionCue::new(4, 1.0, 2.5, "Hello.")];
    let secondary = vec![CaptionCue::new(9, 7.0, 8.0, "こんにちは。")];

    let combined = combine(&primary, &secondary).unwrap();
    assert_eq!(combined[0].index, 4);
    assert_eq!(combined[0].start, 1.0);
    assert_eq!(combined[0].end, 2.5);
    assert_eq!(combined[0].duration, 1.5);
}

/// Test length mismatch rejection
#[test]
fn test_combine_withMismatchedLengths_shouldFail() {
    let primary = vec![
        CaptionCue::new(1, 0.0, 1.0, "One."),
        CaptionCue::new(2, 1.0, 2.0, "Two."),
    ];
    let secondary = vec![CaptionCue::new(1, 0.0, 1.0, "Uno.")];

    let result = combine(&primary, &secondary);
    assert!(matches!(
        result,
        Err(CaptionError::LengthMismatch {
            primary: 2,
            secondary: 1
        })
    ));
}

/// Test empty tracks
#[test]
fn test_combine_withEmptyTracks_shouldReturnEmpty() {
    let combined = combine(&[], &[]).unwrap();
    assert!(combined.is_empty());
}
