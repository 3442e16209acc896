//! YouTube download collaborator.
//!
//! Thin wrapper over the `yt-dlp` CLI: audio stream extraction to mp3,
//! video-only stream selection by resolution preference, and caption-file
//! download. High-resolution video streams carry no audio, so video and
//! audio are fetched separately and muxed afterwards (see `media`).

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use log::{info, warn};
use tokio::process::Command;

use crate::captions::CaptionFormat;
use crate::file_utils::FileManager;

/// Build the canonical watch URL for a video id
pub fn video_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

/// yt-dlp wrapper for one video
pub struct Downloader;

impl Downloader {
    /// Download the best audio stream as mp3 into `output_dir/filename`
    pub async fn download_audio<P: AsRef<Path>>(
        video_id: &str,
        output_dir: P,
        filename: &str,
    ) -> Result<PathBuf> {
        let output_path = output_dir.as_ref().join(filename);
        info!("Downloading audio for video {}", video_id);

        Self::run_yt_dlp(&[
            "-f",
            "bestaudio",
            "-x",
            "--audio-format",
            "mp3",
            "-o",
            output_path.to_str().unwrap_or_default(),
            &video_url(video_id),
        ])
        .await?;

        Ok(output_path)
    }

    /// Download a video-only mp4 stream, trying each resolution in order
    /// of preference before falling back to the best available
    pub async fn download_video<P: AsRef<Path>>(
        video_id: &str,
        resolutions: &[String],
        output_dir: P,
        filename: &str,
    ) -> Result<PathBuf> {
        let output_path = output_dir.as_ref().join(filename);

        let mut selectors: Vec<String> = resolutions
            .iter()
            .filter_map(|res| res.trim_end_matches('p').parse::<u32>().ok())
            .map(|height| format!("bestvideo[height={}][ext=mp4]", height))
            .collect();
        selectors.push("bestvideo[ext=mp4]".to_string());
        let format_selector = selectors.join("/");

        info!(
            "Downloading video {} (format selector: {})",
            video_id, format_selector
        );

        Self::run_yt_dlp(&[
            "-f",
            &format_selector,
            "-o",
            output_path.to_str().unwrap_or_default(),
            &video_url(video_id),
        ])
        .await?;

        Ok(output_path)
    }

    /// Download caption files without downloading the video. Both uploaded
    /// and auto-generated captions are requested; yt-dlp converts them to
    /// each requested format. Returns the paths that were actually written.
    pub async fn download_captions<P: AsRef<Path>>(
        video_id: &str,
        output_dir: P,
        basename: &str,
        language: &str,
        formats: &[CaptionFormat],
    ) -> Result<Vec<PathBuf>> {
        if formats.is_empty() {
            return Err(anyhow!("No caption format is provided."));
        }

        let output_dir = output_dir.as_ref();
        let template = output_dir.join(basename);
        let mut written = Vec::new();

        for format in formats {
            info!("Downloading {} captions for video {}", format, video_id);

            Self::run_yt_dlp(&[
                "--skip-download",
                "--write-subs",
                "--write-auto-subs",
                "--sub-langs",
                language,
                "--convert-subs",
                format.extension(),
                "-o",
                template.to_str().unwrap_or_default(),
                &video_url(video_id),
            ])
            .await?;

            // yt-dlp names the file <basename>.<lang>.<ext>
            let caption_path =
                FileManager::caption_output_path(output_dir, basename, language, format.extension());
            if caption_path.exists() {
                written.push(caption_path);
            } else {
                warn!(
                    "No {} captions available for video {} in language '{}'",
                    format, video_id, language
                );
            }
        }

        if written.is_empty() {
            return Err(anyhow!("No captions were downloaded for video {}", video_id));
        }

        Ok(written)
    }

    async fn run_yt_dlp(args: &[&str]) -> Result<()> {
        let output = Command::new("yt-dlp")
            .args(args)
            .output()
            .await
            .map_err(|e| anyhow!("Failed to execute yt-dlp command: {}", e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!("yt-dlp failed: {}", stderr.trim()));
        }

        Ok(())
    }
}
