//! Provider abstraction over the generateContent API

use crate::{Content, GenConfig, GenerateChunk};
use anyhow::Result;
use futures_core::Stream;

/// A trait for generateContent providers
pub trait GenAi: Clone {
    /// Run a single generate call and return the full response
    fn send(
        &self,
        config: &GenConfig,
        contents: &[Content],
        system: Option<&str>,
    ) -> impl Future<Output = Result<GenerateChunk>> + Send;

    /// Run a generate call with streaming
    fn stream(
        &self,
        config: GenConfig,
        contents: &[Content],
        system: Option<&str>,
    ) -> impl Stream<Item = Result<GenerateChunk>> + Send;
}
