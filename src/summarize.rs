//! Summarization collaborator - condenses accumulated transcript text
//! into a short chapter title via an external language model.
//!
//! The engine only depends on the [`Summarizer`] trait; tests inject fakes
//! and the CLI wires in [`OpenAiSummarizer`] when summarized titles are
//! requested. A call may block up to the given timeout and may fail; the
//! title synthesizer recovers from both.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// External text condenser. Must be safely callable repeatedly and
/// sequentially; no per-call state is retained by the engine.
pub trait Summarizer {
    /// Condense `text` into a short title-like phrase.
    fn summarize(&self, text: &str, timeout: Duration) -> Result<String>;
}

const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";

const SYSTEM_PROMPT: &str = "You title sections of a spoken-word transcript. \
    Reply with a single concise chapter title of three to eight words. \
    No quotes, no numbering, no trailing punctuation.";

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct CompletionRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Chat-completions-backed summarizer
pub struct OpenAiSummarizer {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
}

impl OpenAiSummarizer {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Build from the `OPENAI_API_KEY` environment variable
    pub fn from_env(model: impl Into<String>) -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .context("OPENAI_API_KEY must be set for summarized titles")?;
        Ok(Self::new(api_key, model))
    }
}

impl Summarizer for OpenAiSummarizer {
    fn summarize(&self, text: &str, timeout: Duration) -> Result<String> {
        let request = CompletionRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: text.to_string(),
                },
            ],
            temperature: 0.3,
        };

        debug!(model = %self.model, chars = text.len(), "requesting chapter title");
        let response = self
            .client
            .post(OPENAI_CHAT_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .timeout(timeout)
            .send()
            .context("Summarization request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(anyhow!("Summarization API error: HTTP {} - {}", status, body));
        }

        let completion: ChatCompletion = response
            .json()
            .context("Failed to parse summarization response")?;
        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("Summarization response contained no choices"))?;

        Ok(choice.message.content)
    }
}
