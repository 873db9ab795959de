//! Waypoint chat service.
//!
//! Translates `POST /chat` into one agent run and the streamed result
//! back into a JSON response.

pub mod config;
pub mod error;
pub mod routes;
pub mod serve;
pub mod state;

pub use config::BackendConfig;
pub use error::ChatError;
pub use routes::{ChatRequest, ChatResponse, NO_RESPONSE, router};
pub use serve::{ServeHandle, serve};
pub use state::AppState;
