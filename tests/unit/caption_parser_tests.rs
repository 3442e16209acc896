/*!
 * Tests for the cue-block parser
 */

use vidcap::captions::{CaptionCue, CaptionFormat, parse_cue_blocks};

use crate::common;

/// Test parsing a well-formed SRT track
#[test]
fn test_parse_cue_blocks_withSrtTrack_shouldReturnAllCues() {
    let cues = parse_cue_blocks(&common::sample_srt(), CaptionFormat::Srt);
    assert_eq!(cues.len(), 4);

    let expected = CaptionCue {
        index: 3,
        start: 7.2,
        end: 13.68,
        duration: 6.48,
        text: "28 years after the web was conceived, Sir Tim Berners-Lee wrote about 3 trends that worried him."
            .to_string(),
    };
    assert_eq!(cues[2], expected);
}

/// Test parsing a well-formed VTT track, header included
#[test]
fn test_parse_cue_blocks_withVttTrack_shouldSkipHeaderAndReturnAllCues() {
    let cues = parse_cue_blocks(&common::sample_vtt(), CaptionFormat::Vtt);
    assert_eq!(cues.len(), 4);
    assert_eq!(cues[2].start, 7.2);
    assert_eq!(cues[2].end, 13.68);
    assert_eq!(cues[2].duration, 6.48);
}

/// Test index synthesis when the index line is absent
#[test]
fn test_parse_cue_blocks_withoutIndexLines_shouldSynthesizePositions() {
    let cues = parse_cue_blocks(&common::sample_srt_no_index(), CaptionFormat::Srt);
    assert_eq!(cues.len(), 4);
    for (i, cue) in cues.iter().enumerate() {
        assert_eq!(cue.index, i + 1);
    }
    assert_eq!(cues[2].start, 7.2);
}

/// Test that literal index lines survive unchanged, even out of order
#[test]
fn test_parse_cue_blocks_withIrregularIndices_shouldKeepLiteralValues() {
    let content = "\
10
00:00:01,000 --> 00:00:02,000
First cue.

4
00:00:03,000 --> 00:00:04,000
Second cue.

4
00:00:05,000 --> 00:00:06,000
Third cue.
";
    let cues = parse_cue_blocks(content, CaptionFormat::Srt);
    let indices: Vec<usize> = cues.iter().map(|c| c.index).collect();
    assert_eq!(indices, vec![10, 4, 4]);
}

/// Test multi-line text flattening and non-breaking-space normalization
#[test]
fn test_parse_cue_blocks_withMultilineText_shouldFlattenToSingleLine() {
    let content = "1\n00:00:01,000 --> 00:00:02,000\nFirst line\nsecond\u{a0}line  \n";
    let cues = parse_cue_blocks(content, CaptionFormat::Srt);
    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0].text, "First line second line");
}

/// Test that malformed input yields an empty track, not an error
#[test]
fn test_parse_cue_blocks_withMalformedInput_shouldReturnEmpty() {
    assert!(parse_cue_blocks("", CaptionFormat::Srt).is_empty());
    assert!(parse_cue_blocks("no cues here\njust text\n", CaptionFormat::Srt).is_empty());
    // SRT timecodes do not match the VTT grammar
    assert!(parse_cue_blocks(&common::sample_srt(), CaptionFormat::Vtt).is_empty());
}

/// Test CRLF line endings
#[test]
fn test_parse_cue_blocks_withCrlfLineEndings_shouldParse() {
    let content = common::sample_srt().replace('\n', "\r\n");
    let cues = parse_cue_blocks(&content, CaptionFormat::Srt);
    assert_eq!(cues.len(), 4);
    assert_eq!(cues[0].text, "For the last 25 years I've been working on the web.");
}

/// Test input without a trailing newline
#[test]
fn test_parse_cue_blocks_withoutTrailingNewline_shouldParseLastCue() {
    let content = "1\n00:00:01,000 --> 00:00:02,000\nNo trailing newline";
    let cues = parse_cue_blocks(content, CaptionFormat::Srt);
    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0].text, "No trailing newline");
}

/// Test that the derived duration is recomputed at construction
#[test]
fn test_caption_cue_new_withRawTimes_shouldRoundAndDeriveDuration() {
    let cue = CaptionCue::new(1, 3.7600001, 13.6800004, "text");
    assert_eq!(cue.start, 3.76);
    assert_eq!(cue.end, 13.68);
    assert_eq!(cue.duration, 9.92);
}
