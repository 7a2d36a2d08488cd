use crate::summarize::Summarizer;
use crate::text::normalize;
use crate::types::{BoundaryStrategy, Chapter, ChapterConfig, Segment};

use super::boundary::{looks_like_section_opener, window_elapsed};
use super::titles::{synthesize_title, INTRODUCTION_TITLE};

/// Running state of a single chapter-building pass.
///
/// Seeded with the mandatory introduction chapter; consumes segments in
/// order and appends a chapter for each accepted boundary. Spacing and
/// duplicate-timestamp gates run before title synthesis so a discarded
/// candidate never pays for a summarization call.
pub(super) struct ChapterAccumulator {
    chapters: Vec<Chapter>,
    last_boundary_time: f64,
    pending_text: String,
}

impl ChapterAccumulator {
    pub(super) fn new() -> Self {
        Self {
            chapters: vec![Chapter {
                time: 0,
                title: INTRODUCTION_TITLE.to_string(),
            }],
            last_boundary_time: 0.0,
            pending_text: String::new(),
        }
    }

    pub(super) fn handle_segment(
        &mut self,
        segment: &Segment,
        config: &ChapterConfig,
        summarizer: Option<&dyn Summarizer>,
    ) {
        let sentence = normalize(&segment.text);
        if !sentence.is_empty() {
            if !self.pending_text.is_empty() {
                self.pending_text.push(' ');
            }
            self.pending_text.push_str(&sentence);
        }
        // A segment that is empty after normalization still contributes
        // (nothing) to the accumulation, but cannot itself form a boundary.
        if sentence.is_empty() {
            return;
        }

        match config.boundary_strategy {
            BoundaryStrategy::TimeWindow => {
                if !window_elapsed(segment.start, self.last_boundary_time, config) {
                    return;
                }
                if !self.accepts_timestamp(segment.start) {
                    return;
                }
                let title = synthesize_title(&self.pending_text, false, config, summarizer);
                self.push_chapter(segment.start, title);
                // Anchor at the segment end so the next window starts after
                // the sentence that closed this one.
                self.last_boundary_time = segment.end;
            }
            BoundaryStrategy::Lexical => {
                // Spacing gate first: suppress near-duplicate chapters.
                // A tie at exactly the threshold is accepted.
                if segment.start - self.last_boundary_time < config.min_spacing_seconds as f64 {
                    return;
                }
                if !looks_like_section_opener(&sentence, config) {
                    return;
                }
                if !self.accepts_timestamp(segment.start) {
                    return;
                }
                let title = synthesize_title(&sentence, false, config, summarizer);
                self.push_chapter(segment.start, title);
                self.last_boundary_time = segment.start;
            }
        }
    }

    pub(super) fn into_chapters(self) -> Vec<Chapter> {
        self.chapters
    }

    /// Would a chapter at this start time keep timestamps strictly increasing?
    fn accepts_timestamp(&self, start: f64) -> bool {
        let candidate = clamp_to_seconds(start);
        match self.chapters.last() {
            Some(previous) => candidate > previous.time,
            None => true,
        }
    }

    fn push_chapter(&mut self, start: f64, title: String) {
        self.chapters.push(Chapter {
            time: clamp_to_seconds(start),
            title,
        });
        self.pending_text.clear();
    }
}

fn clamp_to_seconds(start: f64) -> u32 {
    start.max(0.0) as u32
}
