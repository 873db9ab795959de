//! HTTP surface: `POST /chat` and `GET /health`.

use crate::{config, error::ChatError, state::AppState};
use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use futures_util::StreamExt;
use llm::{Content, GenAi};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Returned when a run produces no text at all.
pub const NO_RESPONSE: &str = "No response generated.";

/// Request body for `POST /chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The user prompt. No validation beyond schema parsing.
    pub prompt: String,
}

/// Response body for `POST /chat`.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// The concatenated agent reply.
    pub response: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Build the backend router over the given state.
pub fn router<P>(state: AppState<P>) -> Router
where
    P: GenAi + Send + Sync + 'static,
{
    Router::new()
        .route("/chat", post(chat::<P>))
        .route("/health", get(health))
        .with_state(state)
}

/// Process one chat turn through the agent runner.
///
/// Every request registers a fresh single-use session, runs the agent
/// once, and concatenates the text of the streamed events in arrival
/// order. The session is abandoned afterwards on purpose: this service
/// is single-turn stateless, and expiry belongs to the session service.
async fn chat<P>(
    State(state): State<AppState<P>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ChatError>
where
    P: GenAi + Send + Sync + 'static,
{
    let session_id = Uuid::new_v4().to_string();
    tracing::info!(session = %session_id, "POST /chat");

    state
        .runner
        .sessions()
        .create(config::APP_NAME, config::USER_ID, session_id.as_str())
        .map_err(ChatError::classify)?;

    let message = Content::user(&request.prompt);
    let stream = state.runner.run(config::USER_ID, &session_id, message);
    futures_util::pin_mut!(stream);

    let mut response = String::new();
    while let Some(event) = stream.next().await {
        let event = event.map_err(ChatError::classify)?;
        if let Some(text) = event.text() {
            response.push_str(&text);
        }
    }

    if response.is_empty() {
        response = NO_RESPONSE.to_owned();
    }
    Ok(Json(ChatResponse { response }))
}

/// Liveness probe. Always ok; performs no dependency check.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
