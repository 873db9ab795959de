//! The request body for the Gemini generateContent API

use crate::{Content, Part};
use compact_str::CompactString;
use serde::Serialize;

/// Model configuration for a generate call.
///
/// The model id selects the endpoint path; the remaining knobs land in
/// the request's `generationConfig`.
#[derive(Debug, Clone)]
pub struct GenConfig {
    /// The model to use
    pub model: CompactString,
    /// Sampling temperature
    pub temperature: Option<f32>,
    /// Cap on generated tokens
    pub max_output_tokens: Option<u32>,
}

impl GenConfig {
    /// Create a new configuration for the given model.
    pub fn new(model: impl Into<CompactString>) -> Self {
        Self {
            model: model.into(),
            temperature: None,
            max_output_tokens: None,
        }
    }
}

/// System text, carried outside the contents list.
#[derive(Debug, Clone, Serialize)]
pub struct SystemInstruction {
    /// The parts of the instruction
    pub parts: Vec<Part>,
}

/// The `generationConfig` request section.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationConfig {
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Cap on generated tokens
    #[serde(
        rename = "maxOutputTokens",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_output_tokens: Option<u32>,
}

impl GenerationConfig {
    fn is_empty(&self) -> bool {
        self.temperature.is_none() && self.max_output_tokens.is_none()
    }
}

/// The request body for the Gemini generateContent API
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    /// The conversation contents
    pub contents: Vec<Content>,

    /// The system instruction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<SystemInstruction>,

    /// Generation parameters
    #[serde(
        rename = "generationConfig",
        skip_serializing_if = "Option::is_none"
    )]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateRequest {
    /// Build a request body from a configuration, the conversation
    /// contents, and an optional system instruction.
    pub fn build(config: &GenConfig, contents: &[Content], system: Option<&str>) -> Self {
        let generation_config = GenerationConfig {
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        };

        Self {
            contents: contents.to_vec(),
            system_instruction: system.filter(|s| !s.is_empty()).map(|s| SystemInstruction {
                parts: vec![Part::text(s)],
            }),
            generation_config: (!generation_config.is_empty()).then_some(generation_config),
        }
    }
}
