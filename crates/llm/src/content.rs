//! Conversation content in the Gemini parts format.

use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

/// The role of a content block.
///
/// Gemini has no assistant role; model output uses `model`, and system
/// text travels outside the contents list as `system_instruction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Default)]
pub enum Role {
    /// The user role
    #[serde(rename = "user")]
    #[default]
    User,
    /// The model role
    #[serde(rename = "model")]
    Model,
}

/// One fragment of a content block.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Part {
    /// Text carried by this part, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Part {
    /// Create a text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// A content block in the conversation
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Content {
    /// The role of the block
    #[serde(default)]
    pub role: Role,

    /// The parts of the block
    #[serde(default, skip_serializing_if = "SmallVec::is_empty")]
    pub parts: SmallVec<[Part; 1]>,
}

impl Content {
    /// Create a new user content block
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            parts: smallvec![Part::text(text)],
        }
    }

    /// Create a new model content block
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            parts: smallvec![Part::text(text)],
        }
    }

    /// Join the text of all text-bearing parts, in order.
    ///
    /// Returns `None` when no part carries non-empty text.
    pub fn text(&self) -> Option<String> {
        let mut joined = String::new();
        for part in &self.parts {
            if let Some(ref text) = part.text {
                joined.push_str(text);
            }
        }
        if joined.is_empty() { None } else { Some(joined) }
    }
}
