//! chapterize - turn a video's speech into navigable chapter markers
//!
//! The pipeline: acquire audio (yt-dlp), transcribe it (whisper-rs), then
//! run the chapter segmentation engine over the timestamped transcript.
//! The engine in [`chapters`] is the heart of the crate; everything else is
//! a thin collaborator behind a narrow seam.

pub mod audio;
pub mod chapters;
pub mod download;
pub mod summarize;
pub mod text;
pub mod timestamp;
pub mod transcription;
pub mod types;

pub use chapters::{build_chapters, FALLBACK_TITLE, INTRODUCTION_TITLE};
pub use timestamp::format_timestamp;
pub use types::{
    BoundaryStrategy, Chapter, ChapterConfig, Segment, TitleStrategy, Transcript,
};
