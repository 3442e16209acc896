//! Media muxing collaborator.
//!
//! ffmpeg subprocess wrappers: muxing the separately downloaded audio
//! stream into a silent video, and embedding a subtitle track with
//! language/title metadata into the final file.

use std::path::Path;

use anyhow::{Result, anyhow};
use log::{error, info};
use tokio::process::Command;

/// Mux an audio file into a silent video, copying the video stream and
/// encoding the audio as AAC.
pub async fn mux_audio<P: AsRef<Path>>(video_path: P, audio_path: P, output_path: P) -> Result<()> {
    let video_path = video_path.as_ref();
    let audio_path = audio_path.as_ref();
    let output_path = output_path.as_ref();

    // Writing over the input video corrupts the mux
    if video_path == output_path {
        return Err(anyhow!(
            "Output path must differ from the input video: {:?}",
            output_path
        ));
    }

    info!("Muxing audio into {:?}", output_path);

    let output = Command::new("ffmpeg")
        .args([
            "-y",
            "-i",
            video_path.to_str().unwrap_or_default(),
            "-i",
            audio_path.to_str().unwrap_or_default(),
            "-map",
            "0:v:0",
            "-map",
            "1:a:0",
            "-c:v",
            "copy",
            "-c:a",
            "aac",
            output_path.to_str().unwrap_or_default(),
        ])
        .output()
        .await
        .map_err(|e| anyhow!("Failed to execute ffmpeg command for audio mux: {}", e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let filtered = filter_ffmpeg_stderr(&stderr);
        error!("Audio mux failed: {}", filtered);
        return Err(anyhow!("ffmpeg audio mux failed: {}", filtered));
    }

    Ok(())
}

/// Embed a subtitle file as a `mov_text` track in an mp4 container,
/// copying all other streams. Stream copy is fast, so a stuck ffmpeg is
/// cut off after two minutes.
pub async fn embed_subtitle<P: AsRef<Path>>(
    video_path: P,
    subtitle_path: P,
    output_path: P,
    language: &str,
) -> Result<()> {
    let video_path = video_path.as_ref();
    let subtitle_path = subtitle_path.as_ref();
    let output_path = output_path.as_ref();

    let track_title = subtitle_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| "subtitles".to_string());

    info!("Embedding subtitle track into {:?}", output_path);

    let ffmpeg_future = Command::new("ffmpeg")
        .args([
            "-y",
            "-i",
            video_path.to_str().unwrap_or_default(),
            "-i",
            subtitle_path.to_str().unwrap_or_default(),
            "-c",
            "copy",
            "-c:s",
            "mov_text",
            "-metadata:s:s:0",
            &format!("language={}", language),
            "-metadata:s:s:1",
            &format!("title={}", track_title),
            output_path.to_str().unwrap_or_default(),
        ])
        .output();

    let timeout_duration = std::time::Duration::from_secs(120);
    let output = tokio::select! {
        result = ffmpeg_future => {
            result.map_err(|e| anyhow!("Failed to execute ffmpeg command for subtitle embed: {}", e))?
        },
        _ = tokio::time::sleep(timeout_duration) => {
            return Err(anyhow!("ffmpeg subtitle embed timed out after 2 minutes"));
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let filtered = filter_ffmpeg_stderr(&stderr);
        error!("Subtitle embed failed: {}", filtered);
        return Err(anyhow!("ffmpeg subtitle embed failed: {}", filtered));
    }

    Ok(())
}

/// Filter ffmpeg stderr to only show meaningful error lines, stripping the
/// version banner, build configuration, and stream metadata noise.
fn filter_ffmpeg_stderr(stderr: &str) -> String {
    let noise_prefixes = [
        "ffmpeg version",
        "  built with",
        "  configuration:",
        "  lib",
        "Input #",
        "  Metadata:",
        "  Duration:",
        "  Stream #",
        "      Metadata:",
        "Output #",
        "Stream mapping:",
        "Press [q]",
        "size=",
        "frame=",
    ];

    let meaningful: Vec<&str> = stderr
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return false;
            }
            !noise_prefixes.iter().any(|p| line.starts_with(p))
        })
        .collect();

    if meaningful.is_empty() {
        "unknown ffmpeg error (stderr was empty after filtering)".to_string()
    } else {
        meaningful.join("\n")
    }
}
