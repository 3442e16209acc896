use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use log::{info, warn};

use crate::app_config::Config;
use crate::captions::{self, CaptionFormat};
use crate::downloader::{Downloader, video_url};
use crate::file_utils::FileManager;
use crate::language_utils;
use crate::media;
use crate::providers::DeepL;
use crate::transcribe::Transcriber;
use crate::translation::BatchTranslator;

// @module: Application controller for the download/caption pipeline

/// What the download pipeline should produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadMode {
    /// Full captioned video (default)
    Video,
    /// Audio and captions only
    Audio,
}

/// Per-invocation options for the download pipeline
#[derive(Debug, Clone)]
pub struct DownloadOptions {
    /// Output directory name under the configured output root; defaults to
    /// the video id
    pub output_name: Option<String>,

    /// Whether to stop after audio and captions
    pub mode: DownloadMode,

    /// Transcribe the downloaded audio with whisper
    pub transcribe: bool,

    /// Translate the transcribed captions (requires `transcribe`)
    pub translate: bool,
}

/// Main application controller for the captioned-video pipeline
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Run the full download pipeline for one video id.
    ///
    /// Mirrors the output layout: `url.txt`, `audio.mp3`, caption files,
    /// optional `transcribe.vtt`/`translated.vtt`, and `video.mp4` with the
    /// caption track embedded when one was available.
    pub async fn run_download(&self, video_id: &str, options: &DownloadOptions) -> Result<()> {
        let out_dir = PathBuf::from(&self.config.download.output_root)
            .join(options.output_name.as_deref().unwrap_or(video_id));
        FileManager::ensure_dir(&out_dir)?;

        FileManager::write_to_file(out_dir.join("url.txt"), &video_url(video_id))?;

        let audio_path = Downloader::download_audio(video_id, &out_dir, "audio.mp3").await?;

        // The video is still worth producing when YouTube has no captions
        let caption_formats = self.caption_formats()?;
        let caption_file = match Downloader::download_captions(
            video_id,
            &out_dir,
            "caption",
            &self.config.source_language,
            &caption_formats,
        )
        .await
        {
            Ok(paths) => paths.into_iter().next(),
            Err(e) => {
                warn!("Failed to load caption: {}", e);
                None
            }
        };

        if options.transcribe {
            self.transcribe_to_captions(&audio_path, &out_dir).await?;
        }

        if options.transcribe && options.translate {
            let transcribed = out_dir.join("transcribe.vtt");
            let translated = out_dir.join("translated.vtt");
            self.run_translate(&transcribed, &translated, false).await?;
        }

        if options.mode == DownloadMode::Audio {
            info!("Audio mode, skipping video download");
            return Ok(());
        }

        Downloader::download_video(
            video_id,
            &self.config.download.resolutions,
            &out_dir,
            "no_audio.mp4",
        )
        .await?;

        // Muxing into the input path corrupts the file, hence the staging names
        let no_audio = out_dir.join("no_audio.mp4");
        let no_caption = out_dir.join("no_caption.mp4");
        let final_video = out_dir.join("video.mp4");

        media::mux_audio(&no_audio, &audio_path, &no_caption).await?;
        FileManager::remove_file(&no_audio)?;

        match caption_file {
            Some(caption_path) => {
                media::embed_subtitle(
                    &no_caption,
                    &caption_path,
                    &final_video,
                    &self.config.source_language,
                )
                .await?;
                FileManager::remove_file(&no_caption)?;
            }
            None => {
                FileManager::rename(&no_caption, &final_video)?;
            }
        }

        info!("Successfully saved a video to {:?}.", out_dir);
        Ok(())
    }

    /// Transcribe an audio file and save the sentence-grouped captions
    /// next to it as `transcribe.vtt`
    pub async fn run_transcribe(&self, audio_path: &Path) -> Result<PathBuf> {
        let out_dir = audio_path
            .parent()
            .unwrap_or(Path::new("."))
            .to_path_buf();
        self.transcribe_to_captions(audio_path, &out_dir).await
    }

    async fn transcribe_to_captions(&self, audio_path: &Path, out_dir: &Path) -> Result<PathBuf> {
        let transcriber = Transcriber::new(&self.config.transcription.model);
        let transcription = transcriber.transcribe(audio_path, out_dir).await?;

        // Word timestamps regrouped on sentence boundaries give cleaner
        // cues than whisper's raw segments
        let cues = captions::merge_word_timestamps(&transcription.words);
        if cues.is_empty() {
            warn!("Transcription produced no sentence-terminated captions");
        }

        let save_path = out_dir.join("transcribe.vtt");
        captions::save_caption(&cues, &save_path)?;
        info!("Saved transcribed captions to {:?}", save_path);

        Ok(save_path)
    }

    /// Translate a caption file and save the result, optionally merging
    /// cues into whole sentences first.
    ///
    /// A partially translated track is saved as-is with a warning; the
    /// batch translator truncates on the first failed batch by design.
    pub async fn run_translate(
        &self,
        caption_path: &Path,
        save_path: &Path,
        trim_to_sentences: bool,
    ) -> Result<()> {
        let mut cues = captions::load_caption_file(caption_path)?;
        if trim_to_sentences {
            cues = captions::to_sentences(&cues);
        }

        if cues.is_empty() {
            return Err(anyhow!("No cues found in caption file: {:?}", caption_path));
        }

        let source = language_utils::to_deepl_code(&self.config.source_language)
            .context("Invalid source language")?;
        let target = language_utils::to_deepl_code(&self.config.target_language)
            .context("Invalid target language")?;

        let backend = DeepL::new(
            self.config.translation.api_key.clone(),
            self.config.translation.endpoint.clone(),
            self.config.translation.timeout_secs,
        );
        let translator = BatchTranslator::new(Box::new(backend), self.config.translation.batch_size)?;

        let translated = translator.translate_cues(&cues, &source, &target).await;
        if translated.is_empty() {
            return Err(anyhow!("Failed to translate caption."));
        }
        if translated.len() < cues.len() {
            warn!(
                "Partial translation: {} of {} cues translated",
                translated.len(),
                cues.len()
            );
        }

        captions::save_caption(&translated, save_path)?;
        info!("Saved translated captions to {:?}", save_path);
        Ok(())
    }

    /// Combine two caption files into one bilingual track and save it
    pub async fn run_combine(
        &self,
        primary_path: &Path,
        secondary_path: &Path,
        save_path: &Path,
    ) -> Result<()> {
        let primary = captions::load_caption_file(primary_path)?;
        let secondary = captions::load_caption_file(secondary_path)?;

        let combined = captions::combine(&primary, &secondary)?;
        captions::save_caption(&combined, save_path)?;

        info!("Saved combined captions to {:?}", save_path);
        Ok(())
    }

    fn caption_formats(&self) -> Result<Vec<CaptionFormat>> {
        self.config
            .download
            .caption_formats
            .iter()
            .map(|ext| CaptionFormat::from_path(format!("caption.{}", ext)).map_err(Into::into))
            .collect()
    }
}
