//! Waypoint chat client — a terminal front end for the chat backend.

pub mod client;
pub mod config;
pub mod repl;

pub use client::{AskError, BackendClient, NO_RESPONSE_TEXT};
pub use repl::ChatRepl;
