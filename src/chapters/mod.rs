//! Chapter segmentation engine - turns a timestamped transcript into an
//! ordered list of chapter markers.
//!
//! The builder drives one of two boundary strategies (lexical opener
//! heuristic or fixed time window) and one of two title strategies
//! (verbatim sentence or external summarization), all selected by
//! [`ChapterConfig`]. Every run owns its own state, so independent
//! transcripts can be processed concurrently without locking.

mod accumulator;
mod boundary;
mod titles;


pub use titles::{synthesize_title, FALLBACK_TITLE, INTRODUCTION_TITLE};

use std::cmp::Ordering;

use anyhow::Result;

use crate::summarize::Summarizer;
use crate::types::{Chapter, ChapterConfig, Segment, Transcript};

use accumulator::ChapterAccumulator;

/// Build the chapter list for a transcript.
///
/// Returns `Err` only for invalid configuration. Malformed transcript data
/// is repaired in place: out-of-order segments are sorted before iteration
/// and an empty transcript degrades to the single mandatory
/// `{0, "Introduction"}` chapter. Summarizer failures degrade to a
/// fallback title and never abort the run.
pub fn build_chapters(
    transcript: &Transcript,
    config: &ChapterConfig,
    summarizer: Option<&dyn Summarizer>,
) -> Result<Vec<Chapter>> {
    config.validate()?;

    let mut segments: Vec<&Segment> = transcript.segments.iter().collect();
    segments.sort_by(|a, b| a.start.partial_cmp(&b.start).unwrap_or(Ordering::Equal));

    let mut accumulator = ChapterAccumulator::new();
    for segment in segments {
        accumulator.handle_segment(segment, config, summarizer);
    }
    Ok(accumulator.into_chapters())
}
