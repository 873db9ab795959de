//! Error kinds for the chat endpoint.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use runtime::RunnerError;
use serde::Serialize;

/// Error payload returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    /// Human-readable failure description.
    pub detail: String,
}

/// Failure kinds for a chat request.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// The model endpoint could not be reached at the transport level.
    #[error(transparent)]
    UpstreamUnavailable(RunnerError),

    /// The agent run itself failed.
    #[error(transparent)]
    Upstream(RunnerError),
}

impl ChatError {
    /// Classify a runner error: transport-level failures reaching the
    /// model endpoint map to [`ChatError::UpstreamUnavailable`],
    /// everything else to [`ChatError::Upstream`].
    pub fn classify(err: RunnerError) -> Self {
        if let RunnerError::Provider(ref source) = err {
            let unreachable = source.chain().any(|cause| {
                cause
                    .downcast_ref::<reqwest::Error>()
                    .is_some_and(|e| e.is_connect() || e.is_timeout())
            });
            if unreachable {
                return Self::UpstreamUnavailable(err);
            }
        }
        Self::Upstream(err)
    }

    /// The HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UpstreamUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!(status = %status, "chat request failed: {self}");
        (
            status,
            Json(ErrorDetail {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}
