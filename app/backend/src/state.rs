//! Shared application state for the chat service.

use llm::GenAi;
use runtime::Runner;
use std::sync::Arc;

/// Shared state available to all request handlers.
///
/// Constructed once at startup and cloned per request; there is no
/// process-global state.
pub struct AppState<P: GenAi> {
    /// The agent runner (immutable after init).
    pub runner: Arc<Runner<P>>,
}

impl<P: GenAi> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            runner: Arc::clone(&self.runner),
        }
    }
}
