//! Gemini generateContent interface types and transport.
//!
//! This crate provides the wire model shared by everything that talks to
//! the model endpoint: `Content`, `Part`, `GenerateRequest`,
//! `GenerateChunk`, and the `GenAi` trait. `GeminiProvider` implements
//! the trait over HTTP; `ScriptedProvider` implements it from a canned
//! script for tests.

pub use chunk::{Candidate, FinishReason, GenerateChunk, UsageMetadata, sse_payloads};
pub use content::{Content, Part, Role};
pub use gemini::GeminiProvider;
pub use provider::GenAi;
pub use request::{GenConfig, GenerateRequest, GenerationConfig, SystemInstruction};
pub use reqwest::{self, Client};
pub use scripted::ScriptedProvider;

mod chunk;
mod content;
mod gemini;
mod provider;
mod request;
mod scripted;
