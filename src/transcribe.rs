//! Speech-to-text collaborator.
//!
//! Runs the `whisper` CLI as a subprocess with JSON output and word-level
//! timestamps, then parses the JSON into caption cues (one per segment)
//! plus the flattened word-timestamp stream.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use log::{debug, info};
use serde::Deserialize;
use tokio::process::Command;

use crate::captions::{CaptionCue, WordToken, round3};

/// Whisper JSON output, only the fields the caption engine reads
#[derive(Debug, Deserialize)]
struct WhisperOutput {
    segments: Vec<WhisperSegment>,
}

#[derive(Debug, Deserialize)]
struct WhisperSegment {
    start: f64,
    end: f64,
    text: String,
    #[serde(default)]
    words: Vec<WhisperWord>,
}

#[derive(Debug, Deserialize)]
struct WhisperWord {
    word: String,
    start: f64,
    end: f64,
}

/// Result of transcribing one audio file
#[derive(Debug)]
pub struct Transcription {
    /// One cue per whisper segment, indexed from 1
    pub cues: Vec<CaptionCue>,

    /// Word-level timestamps flattened across all segments, time-ordered
    pub words: Vec<WordToken>,
}

/// Whisper CLI wrapper
pub struct Transcriber {
    /// Model name passed to whisper (e.g., "base", "small")
    model: String,
}

impl Transcriber {
    /// Create a transcriber for the given whisper model
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }

    /// Transcribe an audio file, writing whisper's JSON next to it in
    /// `output_dir` and returning the parsed result.
    pub async fn transcribe<P: AsRef<Path>>(
        &self,
        audio_path: P,
        output_dir: P,
    ) -> Result<Transcription> {
        let audio_path = audio_path.as_ref();
        let output_dir = output_dir.as_ref();

        if !audio_path.exists() {
            return Err(anyhow!("Audio file does not exist: {:?}", audio_path));
        }

        info!("Transcribing {:?} with whisper model '{}'", audio_path, self.model);

        let output = Command::new("whisper")
            .args([
                audio_path.to_str().unwrap_or_default(),
                "--model",
                &self.model,
                "--output_format",
                "json",
                "--output_dir",
                output_dir.to_str().unwrap_or_default(),
                "--word_timestamps",
                "True",
            ])
            .output()
            .await
            .map_err(|e| anyhow!("Failed to execute whisper command: {}", e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!("whisper transcription failed: {}", stderr.trim()));
        }

        let stem = audio_path
            .file_stem()
            .ok_or_else(|| anyhow!("Audio path has no file name: {:?}", audio_path))?
            .to_string_lossy();
        let json_path = output_dir.join(format!("{}.json", stem));

        let json_text = std::fs::read_to_string(&json_path)
            .with_context(|| format!("Failed to read whisper output: {:?}", json_path))?;

        let parsed: WhisperOutput = serde_json::from_str(&json_text)
            .context("Failed to parse whisper JSON output")?;

        debug!("Whisper produced {} segments", parsed.segments.len());

        Ok(Self::into_transcription(parsed))
    }

    fn into_transcription(output: WhisperOutput) -> Transcription {
        let cues = output
            .segments
            .iter()
            .enumerate()
            .map(|(i, segment)| {
                CaptionCue::new(i + 1, segment.start, segment.end, segment.text.trim())
            })
            .collect();

        let words = output
            .segments
            .into_iter()
            .flat_map(|segment| segment.words)
            .map(|word| WordToken::new(word.word.trim(), round3(word.start), round3(word.end)))
            .collect();

        Transcription { cues, words }
    }
}
