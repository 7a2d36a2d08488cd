//! Core types for the chapterize transcript-to-chapters pipeline

use anyhow::{ensure, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Raw audio data representation (mono, f32 samples)
#[derive(Debug, Clone)]
pub struct AudioData {
    /// Audio samples, normalized to [-1.0, 1.0]
    pub samples: Vec<f32>,
    /// Sample rate in Hz (e.g., 44100)
    pub sample_rate: u32,
}

/// Transcription output containing timestamped segments
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    pub segments: Vec<Segment>,
}

/// A segment of transcribed speech with timing information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    /// Start of the segment in seconds
    #[serde(alias = "start_time")]
    pub start: f64,
    /// End of the segment in seconds
    #[serde(alias = "end_time")]
    pub end: f64,
}

/// A single chapter marker: where it begins and what to call it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chapter {
    /// Chapter start in whole seconds from the beginning of the video
    pub time: u32,
    pub title: String,
}

/// How chapter boundaries are detected
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BoundaryStrategy {
    /// A short sentence opening with a topic-introducing phrase starts a chapter
    Lexical,
    /// A chapter starts whenever a fixed amount of time has elapsed
    TimeWindow,
}

/// How chapter titles are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TitleStrategy {
    /// The triggering sentence itself becomes the title
    Verbatim,
    /// Accumulated text is condensed by the summarization collaborator
    Summarized,
}

/// Default opener phrases, from observing how speakers announce new topics
pub const DEFAULT_OPENERS: &[&str] = &[
    "how", "why", "what", "first", "second", "third", "now", "next", "let us", "let's",
    "important", "overview",
];

/// Configuration for the chapter builder
#[derive(Debug, Clone)]
pub struct ChapterConfig {
    pub boundary_strategy: BoundaryStrategy,
    pub title_strategy: TitleStrategy,
    /// Minimum gap between accepted lexical boundaries, in seconds
    pub min_spacing_seconds: u32,
    /// Cadence of time-window boundaries, in seconds
    pub time_window_seconds: u32,
    /// Phrases that mark a sentence as a likely topic opener (lower-case).
    /// Empirically chosen; tune or localize rather than treating as exact.
    pub lexical_openers: Vec<String>,
    /// A sentence longer than this many words is never a lexical boundary
    pub max_opener_words: usize,
    /// Only the most recent N characters of accumulated text are summarized
    pub summary_tail_chars: usize,
    /// Timeout handed to the summarization collaborator
    pub summary_timeout_seconds: u64,
}

impl Default for ChapterConfig {
    fn default() -> Self {
        Self {
            boundary_strategy: BoundaryStrategy::Lexical,
            title_strategy: TitleStrategy::Verbatim,
            min_spacing_seconds: 60,
            time_window_seconds: 180,
            lexical_openers: DEFAULT_OPENERS.iter().map(|s| s.to_string()).collect(),
            max_opener_words: 10,
            summary_tail_chars: 1000,
            summary_timeout_seconds: 30,
        }
    }
}

impl ChapterConfig {
    /// Reject parameter combinations that indicate a programming or config
    /// mistake. Runtime data problems (empty or unordered transcripts) are
    /// handled by the builder, never here.
    pub fn validate(&self) -> Result<()> {
        if self.boundary_strategy == BoundaryStrategy::TimeWindow {
            ensure!(
                self.time_window_seconds > 0,
                "time_window_seconds must be greater than zero"
            );
        }
        if self.boundary_strategy == BoundaryStrategy::Lexical {
            ensure!(
                !self.lexical_openers.is_empty(),
                "lexical strategy requires at least one opener phrase"
            );
            ensure!(
                self.max_opener_words > 0,
                "max_opener_words must be greater than zero"
            );
        }
        if self.title_strategy == TitleStrategy::Summarized {
            ensure!(
                self.summary_tail_chars > 0,
                "summary_tail_chars must be greater than zero"
            );
        }
        Ok(())
    }
}

/// Runtime-configurable engine settings parsed from JSON input
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "boundary")]
    pub boundary_strategy: Option<String>,
    #[serde(default, alias = "titles")]
    pub title_strategy: Option<String>,
    #[serde(default, alias = "minSpacing", alias = "min_spacing")]
    pub min_spacing_seconds: Option<i64>,
    #[serde(default, alias = "timeWindow", alias = "time_window")]
    pub time_window_seconds: Option<i64>,
    #[serde(default, alias = "openers")]
    pub lexical_openers: Option<Vec<String>>,
    #[serde(default, alias = "maxOpenerWords")]
    pub max_opener_words: Option<usize>,
    #[serde(default, alias = "summaryTailChars")]
    pub summary_tail_chars: Option<usize>,
    #[serde(default, alias = "summaryTimeoutSeconds")]
    pub summary_timeout_seconds: Option<u64>,
}

impl RuntimeConfig {
    pub fn validate(&self) -> Result<()> {
        if let Some(strategy) = self.boundary_strategy.as_deref() {
            parse_boundary_strategy(strategy)?;
        }
        if let Some(strategy) = self.title_strategy.as_deref() {
            parse_title_strategy(strategy)?;
        }
        if let Some(spacing) = self.min_spacing_seconds {
            ensure!(
                spacing >= 0,
                "min_spacing_seconds must be non-negative, got {}",
                spacing
            );
        }
        if let Some(window) = self.time_window_seconds {
            ensure!(
                window > 0,
                "time_window_seconds must be positive, got {}",
                window
            );
        }
        Ok(())
    }

    /// Overlay these settings onto `base`, leaving unset fields alone
    pub fn apply_to(&self, base: &mut ChapterConfig) -> Result<()> {
        if let Some(strategy) = self.boundary_strategy.as_deref() {
            base.boundary_strategy = parse_boundary_strategy(strategy)?;
        }
        if let Some(strategy) = self.title_strategy.as_deref() {
            base.title_strategy = parse_title_strategy(strategy)?;
        }
        if let Some(spacing) = self.min_spacing_seconds {
            ensure!(spacing >= 0, "min_spacing_seconds must be non-negative");
            base.min_spacing_seconds = spacing as u32;
        }
        if let Some(window) = self.time_window_seconds {
            ensure!(window > 0, "time_window_seconds must be positive");
            base.time_window_seconds = window as u32;
        }
        if let Some(openers) = &self.lexical_openers {
            base.lexical_openers = openers.clone();
        }
        if let Some(cap) = self.max_opener_words {
            base.max_opener_words = cap;
        }
        if let Some(tail) = self.summary_tail_chars {
            base.summary_tail_chars = tail;
        }
        if let Some(timeout) = self.summary_timeout_seconds {
            base.summary_timeout_seconds = timeout;
        }
        Ok(())
    }
}

fn parse_boundary_strategy(raw: &str) -> Result<BoundaryStrategy> {
    match raw.to_ascii_lowercase().as_str() {
        "lexical" => Ok(BoundaryStrategy::Lexical),
        "time-window" | "time_window" | "timewindow" => Ok(BoundaryStrategy::TimeWindow),
        other => anyhow::bail!("Unknown boundary strategy '{}'", other),
    }
}

fn parse_title_strategy(raw: &str) -> Result<TitleStrategy> {
    match raw.to_ascii_lowercase().as_str() {
        "verbatim" => Ok(TitleStrategy::Verbatim),
        "summarized" | "summarised" => Ok(TitleStrategy::Summarized),
        other => anyhow::bail!("Unknown title strategy '{}'", other),
    }
}
