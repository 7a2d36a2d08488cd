//! Title synthesis for accepted chapter boundaries

use std::time::Duration;

use tracing::warn;

use crate::summarize::Summarizer;
use crate::text::{capitalize_first, normalize, tail_chars, title_case};
use crate::types::{ChapterConfig, TitleStrategy};

/// Title of the mandatory chapter at 0:00:00. Never summarized.
pub const INTRODUCTION_TITLE: &str = "Introduction";

/// Substitute when the summarization collaborator fails or returns nothing
pub const FALLBACK_TITLE: &str = "Untitled Section";

/// Produce the display title for a chapter span.
///
/// Verbatim mode capitalizes the normalized text as-is. Summarized mode
/// bounds the input to the most recent `summary_tail_chars` characters
/// before invoking the collaborator, then post-processes its output; a
/// failed or empty result falls back to [`FALLBACK_TITLE`] rather than
/// propagating.
pub fn synthesize_title(
    accumulated_text: &str,
    is_first_chapter: bool,
    config: &ChapterConfig,
    summarizer: Option<&dyn Summarizer>,
) -> String {
    if is_first_chapter {
        return INTRODUCTION_TITLE.to_string();
    }
    match config.title_strategy {
        TitleStrategy::Verbatim => capitalize_first(&normalize(accumulated_text)),
        TitleStrategy::Summarized => summarized_title(accumulated_text, config, summarizer),
    }
}

fn summarized_title(
    accumulated_text: &str,
    config: &ChapterConfig,
    summarizer: Option<&dyn Summarizer>,
) -> String {
    let Some(summarizer) = summarizer else {
        warn!("summarized titles requested but no summarizer available");
        return FALLBACK_TITLE.to_string();
    };

    let normalized = normalize(accumulated_text);
    let input = tail_chars(&normalized, config.summary_tail_chars);
    let timeout = Duration::from_secs(config.summary_timeout_seconds);

    match summarizer.summarize(input, timeout) {
        Ok(raw) => {
            let cleaned = title_case(raw.trim().trim_end_matches('.').trim());
            if cleaned.is_empty() {
                warn!("summarizer returned an empty title, using fallback");
                FALLBACK_TITLE.to_string()
            } else {
                cleaned
            }
        }
        Err(error) => {
            warn!(%error, "summarization failed, using fallback title");
            FALLBACK_TITLE.to_string()
        }
    }
}
