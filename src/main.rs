use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use chapterize::audio;
use chapterize::chapters;
use chapterize::download;
use chapterize::summarize::{OpenAiSummarizer, Summarizer};
use chapterize::timestamp::format_timestamp;
use chapterize::transcription::{self, SpeechModel, WHISPER_SAMPLE_RATE};
use chapterize::types::{BoundaryStrategy, ChapterConfig, RuntimeConfig, TitleStrategy, Transcript};

/// Chapterize - video chapter generator
///
/// Downloads a video's audio track, transcribes it, and segments the
/// transcript into timestamped chapters.
#[derive(Parser, Debug)]
#[command(name = "chapterize")]
#[command(version = "0.1.0")]
#[command(about = "Generate navigable chapters from a video's speech", long_about = None)]
struct Args {
    /// Video URL or local audio file path
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Precomputed transcript JSON ({"segments": [{"start", "end", "text"}]});
    /// skips download and transcription entirely
    #[arg(long, value_name = "PATH", conflicts_with = "input")]
    transcript_json: Option<PathBuf>,

    /// Boundary detection strategy
    #[arg(long, value_enum, value_name = "STRATEGY")]
    boundary: Option<BoundaryStrategy>,

    /// Title synthesis strategy
    #[arg(long, value_enum, value_name = "STRATEGY")]
    titles: Option<TitleStrategy>,

    /// Minimum seconds between lexical chapter boundaries
    #[arg(long, value_name = "SECONDS")]
    min_spacing: Option<u32>,

    /// Cadence in seconds for time-window boundaries
    #[arg(long, value_name = "SECONDS")]
    time_window: Option<u32>,

    /// JSON engine configuration (inline JSON string)
    #[arg(long, value_name = "JSON", conflicts_with = "config_file")]
    config_json: Option<String>,

    /// Path to JSON engine configuration
    #[arg(long, value_name = "PATH", conflicts_with = "config_json")]
    config_file: Option<PathBuf>,

    /// Whisper model path (default: $WHISPER_MODEL_PATH or ./models/ggml-base.en.bin)
    #[arg(long, value_name = "PATH")]
    model: Option<PathBuf>,

    /// Chat model used for summarized titles
    #[arg(long, value_name = "MODEL", default_value = "gpt-4o-mini")]
    summary_model: String,

    /// Directory for downloaded audio files
    #[arg(long, value_name = "DIR", default_value = "temp")]
    work_dir: PathBuf,

    /// Emit the chapter list as JSON instead of formatted lines
    #[arg(long)]
    json: bool,
}

impl Args {
    /// Validate command-line arguments
    fn validate(&self) -> Result<()> {
        if self.input.is_none() && self.transcript_json.is_none() {
            bail!("Provide a video URL, a local audio file, or --transcript-json");
        }

        if let Some(input) = &self.input {
            if !download::is_remote_url(input) && !PathBuf::from(input).is_file() {
                bail!("Input is neither a URL nor an existing file: {}", input);
            }
        }

        if let Some(path) = &self.transcript_json {
            if !path.is_file() {
                bail!("Transcript file does not exist: {:?}", path);
            }
        }

        if self.work_dir.exists() && !self.work_dir.is_dir() {
            bail!("Work path must be a directory: {:?}", self.work_dir);
        }

        Ok(())
    }

    /// Resolve the engine configuration: defaults, then the optional JSON
    /// config, then explicit CLI flags on top.
    fn chapter_config(&self) -> Result<ChapterConfig> {
        let mut config = ChapterConfig::default();

        if let Some(runtime) = self.runtime_config()? {
            runtime
                .validate()
                .context("Engine configuration validation failed")?;
            runtime.apply_to(&mut config)?;
        }

        if let Some(boundary) = self.boundary {
            config.boundary_strategy = boundary;
        }
        if let Some(titles) = self.titles {
            config.title_strategy = titles;
        }
        if let Some(spacing) = self.min_spacing {
            config.min_spacing_seconds = spacing;
        }
        if let Some(window) = self.time_window {
            config.time_window_seconds = window;
        }

        config.validate().context("Invalid engine configuration")?;
        Ok(config)
    }

    fn runtime_config(&self) -> Result<Option<RuntimeConfig>> {
        let raw = if let Some(path) = &self.config_file {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {:?}", path))?
        } else if let Some(json) = &self.config_json {
            json.clone()
        } else {
            return Ok(None);
        };

        let runtime: RuntimeConfig =
            serde_json::from_str(&raw).context("Failed to parse engine configuration JSON")?;
        Ok(Some(runtime))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    args.validate()
        .context("Failed to validate command-line arguments")?;
    let config = args.chapter_config()?;

    println!("Chapterize v0.1.0 - Video Chapter Generator");
    println!(
        "Boundary strategy: {:?}, title strategy: {:?}",
        config.boundary_strategy, config.title_strategy
    );

    let transcript = obtain_transcript(&args)?;
    println!("   Transcript has {} segments", transcript.segments.len());

    let summarizer = build_summarizer(&args, &config)?;
    let summarizer_ref = summarizer.as_ref().map(|s| s as &dyn Summarizer);

    println!("\nBuilding chapters...");
    let chapter_list = chapters::build_chapters(&transcript, &config, summarizer_ref)
        .context("Chapter building failed")?;
    println!("   Found {} chapters\n", chapter_list.len());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&chapter_list)?);
    } else {
        for chapter in &chapter_list {
            println!("{}  {}", format_timestamp(chapter.time), chapter.title);
        }
    }

    Ok(())
}

fn obtain_transcript(args: &Args) -> Result<Transcript> {
    if let Some(path) = &args.transcript_json {
        println!("\n1. Loading transcript from {:?}...", path);
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read transcript file {:?}", path))?;
        let transcript: Transcript =
            serde_json::from_str(&raw).context("Failed to parse transcript JSON")?;
        return Ok(transcript);
    }

    let input = args
        .input
        .as_deref()
        .expect("validated: input or transcript_json is present");

    println!("\n1. Acquiring audio...");
    let audio_path = if download::is_remote_url(input) {
        let asset = download::fetch_audio(input, &args.work_dir)
            .context("Failed to download audio track")?;
        println!("   Downloaded audio for video {}", asset.video_id);
        asset.audio_path
    } else {
        println!("   Using local file {}", input);
        PathBuf::from(input)
    };

    println!("\n2. Decoding audio...");
    let decoded = audio::decode_audio(&audio_path).context("Failed to decode audio")?;
    println!(
        "   Loaded {} samples at {} Hz",
        decoded.samples.len(),
        decoded.sample_rate
    );
    let audio = audio::resample_to(decoded, WHISPER_SAMPLE_RATE)
        .context("Failed to resample audio for transcription")?;

    println!("\n3. Transcribing audio with Whisper...");
    let model_path = transcription::resolve_model_path(args.model.as_deref());
    let model = SpeechModel::load(&model_path)?;
    model.transcribe(&audio).context("Transcription failed")
}

fn build_summarizer(args: &Args, config: &ChapterConfig) -> Result<Option<OpenAiSummarizer>> {
    if config.title_strategy != TitleStrategy::Summarized {
        return Ok(None);
    }
    let summarizer = OpenAiSummarizer::from_env(args.summary_model.clone())
        .context("Summarized titles need a summarization collaborator")?;
    Ok(Some(summarizer))
}
