//! In-memory conversation session store.
//!
//! Sessions are conversation-scoped contexts required by the runner to
//! process a turn. Callers that create a fresh session per request and
//! abandon it rely on this service's own lifecycle policy
//! ([`InMemorySessionService::cleanup_expired`]) or process exit.

use crate::RunnerError;
use compact_str::CompactString;
use llm::Content;
use std::{
    collections::BTreeMap,
    sync::Mutex,
    time::{SystemTime, UNIX_EPOCH},
};

/// A conversation session.
#[derive(Debug, Clone)]
pub struct Session {
    /// Unique session identifier.
    pub id: CompactString,
    /// The application the session belongs to.
    pub app_name: CompactString,
    /// The owning caller identity.
    pub user_id: CompactString,
    /// Creation timestamp (unix seconds).
    pub created_at: u64,
    /// Last activity timestamp (unix seconds).
    pub last_active: u64,
    /// Recorded turn history.
    pub history: Vec<Content>,
}

/// Stores sessions in memory with thread-safe interior mutability.
pub struct InMemorySessionService {
    sessions: Mutex<BTreeMap<CompactString, Session>>,
}

impl InMemorySessionService {
    /// Create a new empty session service.
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(BTreeMap::new()),
        }
    }

    /// Register a new session under the given app and user.
    ///
    /// Session ids are single-use: registering an id that already exists
    /// is an error.
    pub fn create(
        &self,
        app_name: impl Into<CompactString>,
        user_id: impl Into<CompactString>,
        session_id: impl Into<CompactString>,
    ) -> Result<Session, RunnerError> {
        let id: CompactString = session_id.into();
        let now = unix_now();
        let session = Session {
            id: id.clone(),
            app_name: app_name.into(),
            user_id: user_id.into(),
            created_at: now,
            last_active: now,
            history: Vec::new(),
        };

        let mut sessions = self.sessions.lock().unwrap();
        if sessions.contains_key(&id) {
            return Err(RunnerError::SessionExists { id });
        }
        sessions.insert(id, session.clone());
        Ok(session)
    }

    /// Get a session by id (cloned).
    pub fn get(&self, id: &str) -> Option<Session> {
        self.sessions.lock().unwrap().get(id).cloned()
    }

    /// Remove a session by id.
    pub fn remove(&self, id: &str) -> Option<Session> {
        self.sessions.lock().unwrap().remove(id)
    }

    /// Append a completed turn to a session's history and touch it.
    pub fn record_turn(&self, id: &str, user: Content, model: Content) {
        if let Some(session) = self.sessions.lock().unwrap().get_mut(id) {
            session.history.push(user);
            session.history.push(model);
            session.last_active = unix_now();
        }
    }

    /// Remove all sessions older than `max_age_secs` since last activity.
    pub fn cleanup_expired(&self, max_age_secs: u64) -> usize {
        let cutoff = unix_now().saturating_sub(max_age_secs);
        let mut sessions = self.sessions.lock().unwrap();
        let before = sessions.len();
        sessions.retain(|_, s| s.last_active >= cutoff);
        before - sessions.len()
    }

    /// Get the number of active sessions.
    pub fn len(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    /// Check if there are no active sessions.
    pub fn is_empty(&self) -> bool {
        self.sessions.lock().unwrap().is_empty()
    }
}

impl Default for InMemorySessionService {
    fn default() -> Self {
        Self::new()
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
