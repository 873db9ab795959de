//! Client configuration.

use std::path::PathBuf;

/// Default backend address: the in-cluster service name, resolvable via
/// platform DNS. Override with `BACKEND_URL` for local development.
pub const DEFAULT_BACKEND_URL: &str = "http://adk-backend:80";

/// Resolve the backend base URL from the environment.
pub fn backend_url() -> String {
    std::env::var("BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_owned())
}

/// Resolve the history file path at `~/.config/waypoint/history`.
pub fn history_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("waypoint").join("history"))
}
