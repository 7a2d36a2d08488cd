//! Boundary classification predicates
//!
//! Pure functions over a segment and the running builder context; the
//! accumulator owns all state and decides what to do with a positive
//! classification.

use crate::types::ChapterConfig;

/// Does this normalized sentence read like the opening of a new topic?
///
/// Short, imperative-sounding openers ("how", "first", "let's", ...)
/// correlate with spoken topic transitions; the word cap filters long
/// incidental sentences that merely begin with a common word. Approximate
/// by design - both the phrase set and the cap come from configuration.
pub(super) fn looks_like_section_opener(sentence: &str, config: &ChapterConfig) -> bool {
    if sentence.is_empty() {
        return false;
    }
    let lowered = sentence.to_lowercase();
    config
        .lexical_openers
        .iter()
        .any(|opener| lowered.starts_with(opener.as_str()))
        && sentence.split_whitespace().count() <= config.max_opener_words
}

/// Has the configured window strictly elapsed since the last boundary anchor?
pub(super) fn window_elapsed(segment_start: f64, last_boundary_time: f64, config: &ChapterConfig) -> bool {
    segment_start - last_boundary_time > config.time_window_seconds as f64
}
