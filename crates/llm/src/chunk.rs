//! Response payloads from the Gemini generateContent API.
//!
//! Gemini streams full response objects rather than deltas, so the same
//! [`GenerateChunk`] shape covers both the non-streaming response and
//! every streamed chunk.

use crate::Content;
use serde::Deserialize;

/// The reason the model stopped generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinishReason {
    /// Natural stop
    Stop,
    /// Output token cap reached
    MaxTokens,
    /// Blocked by the safety filter
    Safety,
    /// Blocked for recitation
    Recitation,
    /// Anything else the API may add
    #[serde(other)]
    Other,
}

/// One generation candidate.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Candidate {
    /// The generated content, if any
    pub content: Option<Content>,

    /// The reason generation stopped (final chunk only)
    #[serde(rename = "finishReason")]
    pub finish_reason: Option<FinishReason>,
}

/// Token usage statistics.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct UsageMetadata {
    /// Tokens in the prompt
    #[serde(default, rename = "promptTokenCount")]
    pub prompt_tokens: u64,

    /// Tokens across all candidates
    #[serde(default, rename = "candidatesTokenCount")]
    pub candidates_tokens: u64,

    /// Total tokens
    #[serde(default, rename = "totalTokenCount")]
    pub total_tokens: u64,
}

/// A generateContent response payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateChunk {
    /// The list of generation candidates
    #[serde(default)]
    pub candidates: Vec<Candidate>,

    /// Token usage statistics
    #[serde(rename = "usageMetadata")]
    pub usage: Option<UsageMetadata>,
}

impl GenerateChunk {
    /// Create a chunk carrying a single model text part.
    pub fn of_text(text: impl Into<String>) -> Self {
        Self {
            candidates: vec![Candidate {
                content: Some(Content::model(text)),
                finish_reason: None,
            }],
            usage: None,
        }
    }

    /// Create a terminal chunk carrying only a finish reason.
    pub fn finish(reason: FinishReason) -> Self {
        Self {
            candidates: vec![Candidate {
                content: None,
                finish_reason: Some(reason),
            }],
            usage: None,
        }
    }

    /// Join the text of the first candidate's text-bearing parts.
    pub fn text(&self) -> Option<String> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(Content::text)
    }

    /// Get the reason the model stopped generating
    pub fn reason(&self) -> Option<FinishReason> {
        self.candidates.first().and_then(|c| c.finish_reason)
    }

    /// Take the first candidate's content, consuming the chunk.
    pub fn into_content(self) -> Option<Content> {
        self.candidates.into_iter().next().and_then(|c| c.content)
    }
}

/// Split a raw SSE body fragment into its `data: ` payloads.
///
/// Gemini's `alt=sse` stream frames each chunk as a `data: ` line; the
/// stream has no `[DONE]` sentinel and simply ends with the body.
pub fn sse_payloads(text: &str) -> impl Iterator<Item = &str> {
    text.split("data: ")
        .skip(1)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
