//! Backend configuration, read once from the process environment.

/// Application name sessions are registered under.
pub const APP_NAME: &str = "waypoint";
/// Fixed placeholder caller identity. There is no identity layer; every
/// session is owned by this constant.
pub const USER_ID: &str = "user";
/// The agent name.
pub const AGENT_NAME: &str = "travel_helper";
/// The model the agent runs on.
pub const AGENT_MODEL: &str = "gemini-2.5-pro";
/// The agent system instruction.
pub const AGENT_INSTRUCTION: &str =
    "You are a helpful travel assistant. Keep answers short and fun.";

/// Process configuration with fixed fallbacks for unset variables.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Use the Vertex AI endpoint (`GOOGLE_GENAI_USE_VERTEXAI`, default true).
    pub use_vertex: bool,
    /// Cloud project id (`GOOGLE_CLOUD_PROJECT`, falling back to `PROJECT_ID`).
    pub project: String,
    /// Cloud region (`GOOGLE_CLOUD_LOCATION`, default `us-central1`).
    pub region: String,
    /// Credential for the active endpoint mode (`GOOGLE_API_KEY`).
    pub api_key: String,
    /// Listen address (`WAYPOINT_BIND`, default `0.0.0.0:8080`).
    pub bind: String,
}

impl BackendConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through a lookup function.
    ///
    /// Split out from [`BackendConfig::from_env`] so tests can inject
    /// values without touching the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let use_vertex = lookup("GOOGLE_GENAI_USE_VERTEXAI")
            .map(|v| parse_flag(&v))
            .unwrap_or(true);
        let project = lookup("GOOGLE_CLOUD_PROJECT")
            .or_else(|| lookup("PROJECT_ID"))
            .unwrap_or_default();
        let region = lookup("GOOGLE_CLOUD_LOCATION").unwrap_or_else(|| "us-central1".to_owned());
        let api_key = lookup("GOOGLE_API_KEY").unwrap_or_default();
        let bind = lookup("WAYPOINT_BIND").unwrap_or_else(|| "0.0.0.0:8080".to_owned());

        Self {
            use_vertex,
            project,
            region,
            api_key,
            bind,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
