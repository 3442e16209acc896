/*!
 * Common test utilities for the vidcap test suite
 */

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;

use vidcap::captions::CaptionCue;

// Re-export the mock providers module
pub mod mock_providers;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// A small SRT track: two complete sentences spread over three cues plus an
/// unterminated trailing fragment
pub fn sample_srt() -> String {
    "\
1
00:00:00,000 --> 00:00:03,760
For the last 25 years I've been working on the web.

2
00:00:03,760 --> 00:00:07,200
But it's not without its problems. In 2017,

3
00:00:07,200 --> 00:00:13,680
28 years after the web was conceived, Sir Tim Berners-Lee wrote about 3 trends that worried him.

4
00:00:13,680 --> 00:00:17,600
Together we can change

"
    .to_string()
}

/// The same track in WebVTT form
pub fn sample_vtt() -> String {
    let body: String = sample_srt()
        .lines()
        .map(|line| {
            if line.contains("-->") {
                line.replace(',', ".")
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("WEBVTT\n\n{}\n", body)
}

/// The same track without index lines
pub fn sample_srt_no_index() -> String {
    let mut out = String::new();
    for block in sample_srt().split("\n\n").filter(|b| !b.trim().is_empty()) {
        let without_index: Vec<&str> = block.lines().skip(1).collect();
        out.push_str(&without_index.join("\n"));
        out.push_str("\n\n");
    }
    out
}

/// The cues that parsing `sample_srt` should produce
pub fn sample_cues() -> Vec<CaptionCue> {
    vec![
        CaptionCue::new(
            1,
            0.0,
            3.76,
            "For the last 25 years I've been working on the web.",
        ),
        CaptionCue::new(2, 3.76, 7.2, "But it's not without its problems. In 2017,"),
        CaptionCue::new(
            3,
            7.2,
            13.68,
            "28 years after the web was conceived, Sir Tim Berners-Lee wrote about 3 trends that worried him.",
        ),
        CaptionCue::new(4, 13.68, 17.6, "Together we can change"),
    ]
}
