//! HTTP client for the chat backend.

use serde::Deserialize;
use thiserror::Error;

/// Shown when a successful response lacks the response field.
pub const NO_RESPONSE_TEXT: &str = "No response text found.";

/// Failure kinds for one backend call.
#[derive(Debug, Error)]
pub enum AskError {
    /// The backend answered with a non-200 status.
    #[error("Error: {0}")]
    Status(u16),

    /// The request never completed (connection refused, timeout, DNS).
    #[error("Connection failed: {0}")]
    Transport(String),
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    response: Option<String>,
}

/// Thin wrapper over the backend's `/chat` endpoint.
pub struct BackendClient {
    http: reqwest::Client,
    base: String,
}

impl BackendClient {
    /// Create a client for the given base URL.
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_owned();
        Self {
            http: reqwest::Client::new(),
            base,
        }
    }

    /// The backend base URL.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Send one prompt and return the agent's reply text.
    ///
    /// No retry and no timeout override; a hung backend blocks until the
    /// client's default timeout, if any, elapses.
    pub async fn ask(&self, prompt: &str) -> Result<String, AskError> {
        let response = self
            .http
            .post(format!("{}/chat", self.base))
            .json(&serde_json::json!({ "prompt": prompt }))
            .send()
            .await
            .map_err(|e| AskError::Transport(e.to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(AskError::Status(status.as_u16()));
        }

        let reply: ChatReply = response
            .json()
            .await
            .map_err(|e| AskError::Transport(e.to_string()))?;
        Ok(reply
            .response
            .unwrap_or_else(|| NO_RESPONSE_TEXT.to_owned()))
    }
}
