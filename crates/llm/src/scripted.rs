//! Scripted provider for testing.
//!
//! Implements [`GenAi`] from a canned script instead of the network.
//! Intended for tests that exercise session and accumulation logic
//! without making real model calls.

use crate::{Content, FinishReason, GenAi, GenConfig, GenerateChunk};
use anyhow::Result;
use futures_core::Stream;

#[derive(Clone)]
enum Script {
    /// Emit one chunk per text, then a stop chunk.
    Texts(Vec<String>),
    /// Stream the last user content back, split into word-sized chunks.
    Echo,
    /// Fail with the given message.
    Fail(String),
}

/// A provider that replays a fixed script.
#[derive(Clone)]
pub struct ScriptedProvider {
    script: Script,
}

impl ScriptedProvider {
    /// Emit the given texts as one chunk each, in order.
    pub fn texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: Script::Texts(texts.into_iter().map(Into::into).collect()),
        }
    }

    /// Emit no text-bearing chunks at all, only a stop chunk.
    pub fn empty() -> Self {
        Self::texts::<_, String>([])
    }

    /// Stream the last content block's text back in pieces.
    pub fn echo() -> Self {
        Self {
            script: Script::Echo,
        }
    }

    /// Fail every call with the given error message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            script: Script::Fail(message.into()),
        }
    }

    fn chunks(&self, contents: &[Content]) -> Result<Vec<GenerateChunk>> {
        match &self.script {
            Script::Texts(texts) => {
                let mut chunks: Vec<GenerateChunk> =
                    texts.iter().map(GenerateChunk::of_text).collect();
                chunks.push(GenerateChunk::finish(FinishReason::Stop));
                Ok(chunks)
            }
            Script::Echo => {
                let text = contents
                    .last()
                    .and_then(Content::text)
                    .unwrap_or_default();
                let mut chunks: Vec<GenerateChunk> = text
                    .split_inclusive(' ')
                    .map(GenerateChunk::of_text)
                    .collect();
                chunks.push(GenerateChunk::finish(FinishReason::Stop));
                Ok(chunks)
            }
            Script::Fail(message) => Err(anyhow::anyhow!("{message}")),
        }
    }
}

impl GenAi for ScriptedProvider {
    async fn send(
        &self,
        _config: &GenConfig,
        contents: &[Content],
        _system: Option<&str>,
    ) -> Result<GenerateChunk> {
        let chunks = self.chunks(contents)?;
        let text: String = chunks.iter().filter_map(GenerateChunk::text).collect();
        Ok(if text.is_empty() {
            GenerateChunk::finish(FinishReason::Stop)
        } else {
            GenerateChunk::of_text(text)
        })
    }

    fn stream(
        &self,
        _config: GenConfig,
        contents: &[Content],
        _system: Option<&str>,
    ) -> impl Stream<Item = Result<GenerateChunk>> + Send {
        let items: Vec<Result<GenerateChunk>> = match self.chunks(contents) {
            Ok(chunks) => chunks.into_iter().map(Ok).collect(),
            Err(e) => vec![Err(e)],
        };
        futures_util::stream::iter(items)
    }
}
