// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use app_controller::{Controller, DownloadMode, DownloadOptions};

mod app_config;
mod app_controller;
mod captions;
mod downloader;
mod errors;
mod file_utils;
mod language_utils;
mod media;
mod providers;
mod transcribe;
mod translation;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LevelFilter {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LevelFilter::Error,
            CliLogLevel::Warn => LevelFilter::Warn,
            CliLogLevel::Info => LevelFilter::Info,
            CliLogLevel::Debug => LevelFilter::Debug,
            CliLogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// CLI wrapper for DownloadMode
#[derive(Debug, Clone, ValueEnum)]
enum CliDownloadMode {
    Mp4,
    Mp3,
}

impl From<CliDownloadMode> for DownloadMode {
    fn from(mode: CliDownloadMode) -> Self {
        match mode {
            CliDownloadMode::Mp4 => DownloadMode::Video,
            CliDownloadMode::Mp3 => DownloadMode::Audio,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Download a YouTube video with audio, captions, and optional
    /// transcription/translation
    Download(DownloadArgs),

    /// Transcribe an audio file into a WebVTT caption file
    Transcribe(TranscribeArgs),

    /// Translate a caption file via DeepL
    Translate(TranslateArgs),

    /// Combine two caption files into one bilingual track
    Combine(CombineArgs),

    /// Generate shell completions for vidcap
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct DownloadArgs {
    /// YouTube video ID
    #[arg(value_name = "VIDEO_ID")]
    video_id: String,

    /// The name of the output dir (defaults to the video id)
    #[arg(short, long)]
    output: Option<String>,

    /// Download format
    #[arg(short, long, value_enum, default_value = "mp4")]
    mode: CliDownloadMode,

    /// Video resolutions to try, in order of preference
    #[arg(short, long)]
    resolution: Vec<String>,

    /// Transcribe the downloaded audio with whisper
    #[arg(long)]
    transcribe: bool,

    /// Translate the transcribed captions (implies --transcribe)
    #[arg(long)]
    translate: bool,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Parser, Debug)]
struct TranscribeArgs {
    /// Audio file to transcribe
    #[arg(value_name = "AUDIO_FILE")]
    audio_file: PathBuf,

    /// Whisper model name
    #[arg(long)]
    model: Option<String>,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Caption file to translate (.srt or .vtt)
    #[arg(value_name = "CAPTION_FILE")]
    caption_file: PathBuf,

    /// Output caption file (defaults to translated.<ext> next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Merge cues into whole sentences before translating
    #[arg(long)]
    sentences: bool,

    /// Source language code (e.g., 'en')
    #[arg(short = 's', long)]
    source_language: Option<String>,

    /// Target language code (e.g., 'ja')
    #[arg(short = 't', long)]
    target_language: Option<String>,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Parser, Debug)]
struct CombineArgs {
    /// Primary caption file; its timing is kept
    #[arg(value_name = "PRIMARY")]
    primary: PathBuf,

    /// Secondary caption file; its text is stacked under the primary's
    #[arg(value_name = "SECONDARY")]
    secondary: PathBuf,

    /// Output caption file
    #[arg(short, long)]
    output: PathBuf,
}

#[derive(Parser, Debug)]
struct CommonArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// DeepL API key (overrides the config file)
    #[arg(long, env = "DEEPL_API_KEY")]
    api_key: Option<String>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// vidcap - captioned YouTube video builder
///
/// Downloads a video's audio/video streams and captions, optionally
/// transcribes the audio with whisper, optionally translates captions with
/// DeepL, and muxes a subtitle track into the final video.
#[derive(Parser, Debug)]
#[command(name = "vidcap")]
#[command(version = "0.1.0")]
#[command(about = "Captioned YouTube video builder")]
#[command(long_about = "vidcap downloads a YouTube video's audio/video streams and captions,
optionally transcribes the audio with whisper, optionally translates captions
with DeepL, and muxes a subtitle track into the final video.

EXAMPLES:
    vidcap download dQw4w9WgXcQ                      # Full captioned video
    vidcap download dQw4w9WgXcQ -m mp3               # Audio and captions only
    vidcap download dQw4w9WgXcQ --transcribe         # Also transcribe with whisper
    vidcap transcribe outputs/talk/audio.mp3         # Transcribe an existing file
    vidcap translate outputs/talk/transcribe.vtt     # Translate captions
    vidcap combine a.srt b.srt -o bilingual.srt      # Stack two tracks
    vidcap completions bash > vidcap.bash            # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different file with --config-path. If the config file doesn't exist, a
    default one will be created automatically. The DeepL API key can also be
    provided via the DEEPL_API_KEY environment variable.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger { level }))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Load the config file, creating a default one when missing, and apply
/// CLI overrides
fn load_config(common: &CommonArgs) -> Result<Config> {
    let config_path = &common.config_path;

    let mut config = if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    if let Some(api_key) = &common.api_key {
        config.translation.api_key = api_key.clone();
    }

    if let Some(log_level) = &common.log_level {
        log::set_max_level(log_level.clone().into());
    } else {
        let level = match config.log_level {
            app_config::LogLevel::Error => LevelFilter::Error,
            app_config::LogLevel::Warn => LevelFilter::Warn,
            app_config::LogLevel::Info => LevelFilter::Info,
            app_config::LogLevel::Debug => LevelFilter::Debug,
            app_config::LogLevel::Trace => LevelFilter::Trace,
        };
        log::set_max_level(level);
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default; the level is
    // updated after the config is loaded
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "vidcap", &mut std::io::stdout());
            Ok(())
        }
        Commands::Download(args) => run_download(args).await,
        Commands::Transcribe(args) => run_transcribe(args).await,
        Commands::Translate(args) => run_translate(args).await,
        Commands::Combine(args) => run_combine(args).await,
    }
}

async fn run_download(args: DownloadArgs) -> Result<()> {
    let mut config = load_config(&args.common)?;
    if !args.resolution.is_empty() {
        config.download.resolutions = args.resolution.clone();
    }
    config.validate().context("Configuration validation failed")?;

    let controller = Controller::with_config(config)?;
    let options = DownloadOptions {
        output_name: args.output.clone(),
        mode: args.mode.into(),
        // --translate without --transcribe has nothing to translate
        transcribe: args.transcribe || args.translate,
        translate: args.translate,
    };

    controller.run_download(&args.video_id, &options).await
}

async fn run_transcribe(args: TranscribeArgs) -> Result<()> {
    let mut config = load_config(&args.common)?;
    if let Some(model) = &args.model {
        config.transcription.model = model.clone();
    }
    config.validate().context("Configuration validation failed")?;

    let controller = Controller::with_config(config)?;
    let saved = controller.run_transcribe(&args.audio_file).await?;
    println!("{}", saved.display());
    Ok(())
}

async fn run_translate(args: TranslateArgs) -> Result<()> {
    let mut config = load_config(&args.common)?;
    if let Some(source) = &args.source_language {
        config.source_language = source.clone();
    }
    if let Some(target) = &args.target_language {
        config.target_language = target.clone();
    }
    config.validate().context("Configuration validation failed")?;

    let output = match &args.output {
        Some(path) => path.clone(),
        None => {
            let ext = args
                .caption_file
                .extension()
                .ok_or_else(|| anyhow!("Caption file has no extension: {:?}", args.caption_file))?;
            args.caption_file
                .parent()
                .unwrap_or(Path::new("."))
                .join("translated")
                .with_extension(ext)
        }
    };

    let trim = args.sentences || config.translation.trim_to_sentences;
    let controller = Controller::with_config(config)?;
    controller
        .run_translate(&args.caption_file, &output, trim)
        .await
}

async fn run_combine(args: CombineArgs) -> Result<()> {
    // Combining needs no configuration; build a controller from defaults
    let controller = Controller::with_config(Config::default())?;
    controller
        .run_combine(&args.primary, &args.secondary, &args.output)
        .await
}
