//! Streamed agent output events.

use llm::{Content, GenerateChunk};

/// One unit of streamed output from a run.
///
/// Not every event carries content; terminal chunks may hold only a
/// finish reason.
#[derive(Debug, Clone, Default)]
pub struct Event {
    /// The content carried by this event, if any.
    pub content: Option<Content>,
}

impl Event {
    /// Join the text of this event's text-bearing parts, in order.
    pub fn text(&self) -> Option<String> {
        self.content.as_ref().and_then(Content::text)
    }
}

impl From<GenerateChunk> for Event {
    fn from(chunk: GenerateChunk) -> Self {
        Self {
            content: chunk.into_content(),
        }
    }
}
