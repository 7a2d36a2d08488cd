//! Transcription collaborator - converts audio to timestamped text
//!
//! Wraps whisper-rs. The model is expensive to load, so callers construct a
//! [`SpeechModel`] once and reuse it across runs; the engine itself never
//! touches model state.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::types::{AudioData, Segment, Transcript};

/// Sample rate whisper.cpp expects
pub const WHISPER_SAMPLE_RATE: u32 = 16_000;

/// Resolve the model file path: explicit override, then the
/// `WHISPER_MODEL_PATH` environment variable, then the conventional
/// `./models/ggml-base.en.bin` location.
pub fn resolve_model_path(override_path: Option<&Path>) -> PathBuf {
    if let Some(path) = override_path {
        return path.to_path_buf();
    }
    std::env::var("WHISPER_MODEL_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./models/ggml-base.en.bin"))
}

/// A loaded speech-to-text model
pub struct SpeechModel {
    context: WhisperContext,
}

impl SpeechModel {
    pub fn load(model_path: &Path) -> Result<Self> {
        let context = WhisperContext::new_with_params(
            &model_path.to_string_lossy(),
            WhisperContextParameters::default(),
        )
        .with_context(|| {
            format!(
                "Failed to load Whisper model at {}. Download one with: \
                 wget https://huggingface.co/ggerganov/whisper.cpp/resolve/main/ggml-base.en.bin -P ./models/",
                model_path.display()
            )
        })?;
        info!(model = %model_path.display(), "loaded speech model");
        Ok(Self { context })
    }

    /// Transcribe 16 kHz mono audio into ordered, timestamped segments
    pub fn transcribe(&self, audio: &AudioData) -> Result<Transcript> {
        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);

        let mut state = self
            .context
            .create_state()
            .context("Failed to create Whisper state")?;
        state
            .full(params, &audio.samples)
            .context("Failed to transcribe audio")?;

        let mut segments = Vec::new();
        for segment in state.as_iter() {
            let text = segment
                .to_str()
                .context("Failed to get segment text")?
                .to_string();
            // Whisper timestamps are centiseconds
            segments.push(Segment {
                text,
                start: segment.start_timestamp() as f64 / 100.0,
                end: segment.end_timestamp() as f64 / 100.0,
            });
        }

        info!(segments = segments.len(), "transcription complete");
        Ok(Transcript { segments })
    }
}
