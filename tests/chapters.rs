//! End-to-end engine tests over the public API

use std::cell::RefCell;
use std::time::Duration;

use anyhow::Result;
use chapterize::summarize::Summarizer;
use chapterize::types::{BoundaryStrategy, ChapterConfig, Segment, TitleStrategy, Transcript};
use chapterize::{build_chapters, format_timestamp, INTRODUCTION_TITLE};

fn segment(start: f64, end: f64, text: &str) -> Segment {
    Segment {
        text: text.to_string(),
        start,
        end,
    }
}

/// Records the last input it was asked to summarize
struct RecordingSummarizer {
    last_input: RefCell<Option<String>>,
}

impl RecordingSummarizer {
    fn new() -> Self {
        Self {
            last_input: RefCell::new(None),
        }
    }
}

impl Summarizer for RecordingSummarizer {
    fn summarize(&self, text: &str, _timeout: Duration) -> Result<String> {
        *self.last_input.borrow_mut() = Some(text.to_string());
        Ok("Condensed Topic".to_string())
    }
}

fn talk_transcript() -> Transcript {
    Transcript {
        segments: vec![
            segment(0.0, 5.0, "hello everyone and welcome"),
            segment(65.0, 70.0, "first, project setup"),
            segment(100.0, 104.0, "we keep going with details"),
            segment(150.0, 155.0, "next, the architecture"),
            segment(260.0, 266.0, "now, wrapping things up"),
        ],
    }
}

#[test]
fn lexical_run_satisfies_all_invariants() {
    let config = ChapterConfig::default();
    let chapters = build_chapters(&talk_transcript(), &config, None).unwrap();

    assert_eq!(chapters[0].time, 0);
    assert_eq!(chapters[0].title, INTRODUCTION_TITLE);
    for pair in chapters.windows(2) {
        assert!(pair[1].time > pair[0].time, "times must strictly increase");
        assert!(
            pair[1].time - pair[0].time >= config.min_spacing_seconds,
            "lexical chapters must honor minimum spacing"
        );
    }
    let titles: Vec<&str> = chapters.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            INTRODUCTION_TITLE,
            "First, project setup",
            "Next, the architecture",
            "Now, wrapping things up",
        ]
    );
}

#[test]
fn time_window_run_satisfies_all_invariants() {
    let config = ChapterConfig {
        boundary_strategy: BoundaryStrategy::TimeWindow,
        title_strategy: TitleStrategy::Summarized,
        time_window_seconds: 120,
        ..ChapterConfig::default()
    };
    let summarizer = RecordingSummarizer::new();
    let chapters = build_chapters(&talk_transcript(), &config, Some(&summarizer)).unwrap();

    assert_eq!(chapters[0].title, INTRODUCTION_TITLE);
    assert!(chapters.len() > 1);
    for pair in chapters.windows(2) {
        assert!(pair[1].time > pair[0].time);
        assert!(
            pair[1].time - pair[0].time > config.time_window_seconds,
            "each accepted boundary fires only once the window has elapsed"
        );
    }
}

#[test]
fn summarizer_input_is_bounded_by_tail_config() {
    let long_text = "words and more words ".repeat(50);
    let transcript = Transcript {
        segments: vec![
            segment(0.0, 100.0, &long_text),
            segment(130.0, 135.0, "and a closing remark"),
        ],
    };
    let config = ChapterConfig {
        boundary_strategy: BoundaryStrategy::TimeWindow,
        title_strategy: TitleStrategy::Summarized,
        time_window_seconds: 120,
        summary_tail_chars: 40,
        ..ChapterConfig::default()
    };
    let summarizer = RecordingSummarizer::new();
    build_chapters(&transcript, &config, Some(&summarizer)).unwrap();

    let seen = summarizer.last_input.borrow().clone().unwrap();
    assert!(
        seen.chars().count() <= 40,
        "summarizer received {} chars, expected at most 40",
        seen.chars().count()
    );
    // The most recent text survives the truncation
    assert!(seen.ends_with("and a closing remark"));
}

#[test]
fn empty_transcript_formats_cleanly() {
    let chapters = build_chapters(&Transcript::default(), &ChapterConfig::default(), None).unwrap();
    assert_eq!(chapters.len(), 1);
    assert_eq!(
        format!("{}  {}", format_timestamp(chapters[0].time), chapters[0].title),
        "0:00:00  Introduction"
    );
}

#[test]
fn each_run_owns_its_state() {
    // Two consecutive runs over the same inputs give identical results;
    // nothing leaks between invocations.
    let config = ChapterConfig::default();
    let first = build_chapters(&talk_transcript(), &config, None).unwrap();
    let second = build_chapters(&talk_transcript(), &config, None).unwrap();
    assert_eq!(first, second);
}
