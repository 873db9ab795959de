//! Waypoint runtime: the agent execution layer.
//!
//! The [`Runner`] is the entry point. It holds the agent definition, the
//! model provider, and the session service, and executes one
//! conversation turn as a stream of [`Event`]s.
//!
//! # Example
//!
//! ```rust,ignore
//! use waypoint_runtime::{Agent, InMemorySessionService, Runner};
//! use llm::{Content, GeminiProvider};
//!
//! let agent = Agent::new("travel_helper").instruction("Keep answers short.");
//! let runner = Runner::new("waypoint", agent, Arc::new(InMemorySessionService::new()), provider);
//! runner.sessions().create("waypoint", "user", "s-1")?;
//! let events = runner.run("user", "s-1", Content::user("hello"));
//! ```

pub use agent::Agent;
pub use event::Event;
pub use session::{InMemorySessionService, Session};

use compact_str::CompactString;
use futures_core::Stream;
use futures_util::StreamExt;
use llm::{Content, GenAi, GenConfig};
use std::sync::Arc;

mod agent;
mod event;
mod session;

/// Errors from session registration and agent runs.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// A session with this id is already registered.
    #[error("session '{id}' already exists")]
    SessionExists {
        /// The colliding session id.
        id: CompactString,
    },

    /// No session is registered under this id for the caller.
    #[error("unknown session '{id}'")]
    UnknownSession {
        /// The missing session id.
        id: CompactString,
    },

    /// The model provider failed.
    #[error(transparent)]
    Provider(#[from] anyhow::Error),
}

/// Executes agent turns against registered sessions.
pub struct Runner<P: GenAi> {
    app_name: CompactString,
    agent: Agent,
    config: GenConfig,
    sessions: Arc<InMemorySessionService>,
    provider: P,
}

impl<P: GenAi> Runner<P> {
    /// Create a new runner for the given app, agent, and provider.
    pub fn new(
        app_name: impl Into<CompactString>,
        agent: Agent,
        sessions: Arc<InMemorySessionService>,
        provider: P,
    ) -> Self {
        let config = GenConfig::new(agent.model.clone());
        Self {
            app_name: app_name.into(),
            agent,
            config,
            sessions,
            provider,
        }
    }

    /// The application name sessions are registered under.
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// The agent this runner executes.
    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    /// The session service backing this runner.
    pub fn sessions(&self) -> &InMemorySessionService {
        &self.sessions
    }

    /// Build the contents list for a turn: recorded history plus the
    /// new message.
    fn api_contents(&self, session: &Session, new_message: &Content) -> Vec<Content> {
        let mut contents = session.history.clone();
        contents.push(new_message.clone());
        contents
    }

    /// Run one turn for the given session, streaming events as they
    /// arrive from the provider.
    ///
    /// The session must have been registered through
    /// [`Runner::sessions`] under this runner's app name and the same
    /// `user_id`. When the stream completes, the user message and the
    /// accumulated model reply are appended to the session history.
    pub fn run<'a>(
        &'a self,
        user_id: &'a str,
        session_id: &'a str,
        new_message: Content,
    ) -> impl Stream<Item = Result<Event, RunnerError>> + Send + 'a
    where
        P: Sync,
    {
        async_stream::try_stream! {
            let session = self
                .sessions
                .get(session_id)
                .filter(|s| s.app_name == self.app_name && s.user_id == user_id)
                .ok_or_else(|| RunnerError::UnknownSession {
                    id: session_id.into(),
                })?;

            let contents = self.api_contents(&session, &new_message);
            tracing::debug!(session = session_id, turns = contents.len(), "running agent");

            let mut reply = String::new();
            let inner = self.provider.stream(
                self.config.clone(),
                &contents,
                Some(&self.agent.instruction),
            );
            futures_util::pin_mut!(inner);

            while let Some(result) = inner.next().await {
                let chunk = result?;
                let event = Event::from(chunk);
                if let Some(text) = event.text() {
                    reply.push_str(&text);
                }
                yield event;
            }

            self.sessions
                .record_turn(session_id, new_message, Content::model(reply));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use llm::ScriptedProvider;

    fn test_runner() -> Runner<ScriptedProvider> {
        let agent = Agent::new("travel_helper")
            .model("gemini-2.5-pro")
            .instruction("You are a helpful travel assistant.");
        Runner::new(
            "waypoint",
            agent,
            Arc::new(InMemorySessionService::new()),
            ScriptedProvider::empty(),
        )
    }

    #[test]
    fn api_contents_appends_new_message() {
        let runner = test_runner();
        let mut session = runner
            .sessions()
            .create("waypoint", "user", "s-1")
            .unwrap();
        session.history = vec![Content::user("hi"), Content::model("hello")];

        let contents = runner.api_contents(&session, &Content::user("again"));
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[2].text().as_deref(), Some("again"));
    }

    #[test]
    fn config_follows_agent_model() {
        let runner = test_runner();
        assert_eq!(runner.config.model, "gemini-2.5-pro");
        assert_eq!(runner.agent().name, "travel_helper");
    }
}
