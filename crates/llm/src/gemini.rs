//! The Gemini HTTP provider implementation

use crate::{Content, GenAi, GenConfig, GenerateChunk, GenerateRequest, sse_payloads};
use anyhow::Result;
use async_stream::try_stream;
use futures_core::Stream;
use futures_util::StreamExt;
use reqwest::{
    Client, Method,
    header::{self, HeaderMap},
};

const VERTEX_HOST_SUFFIX: &str = "aiplatform.googleapis.com";
const GENAI_ROOT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini generateContent provider over HTTP.
///
/// Two endpoint modes: Vertex AI (project/region path, bearer token) and
/// the Gemini API (fixed host, `x-goog-api-key` header).
#[derive(Clone)]
pub struct GeminiProvider {
    client: Client,
    headers: HeaderMap,
    root: String,
}

impl GeminiProvider {
    /// Create a Vertex AI provider for the given project and region.
    pub fn vertex(client: Client, token: &str, project: &str, region: &str) -> Result<Self> {
        let mut headers = base_headers()?;
        headers.insert(header::AUTHORIZATION, format!("Bearer {token}").parse()?);
        Ok(Self {
            client,
            headers,
            root: format!(
                "https://{region}-{VERTEX_HOST_SUFFIX}/v1/projects/{project}/locations/{region}/publishers/google/models"
            ),
        })
    }

    /// Create a Gemini API provider authenticated by API key.
    pub fn api_key(client: Client, key: &str) -> Result<Self> {
        let mut headers = base_headers()?;
        headers.insert("x-goog-api-key", key.parse()?);
        Ok(Self {
            client,
            headers,
            root: GENAI_ROOT.to_owned(),
        })
    }

    /// The request headers sent with every call.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The endpoint root (up to, but excluding, the model segment).
    pub fn root(&self) -> &str {
        &self.root
    }

    fn url(&self, model: &str, action: &str) -> String {
        format!("{}/{model}:{action}", self.root)
    }
}

fn base_headers() -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, "application/json".parse()?);
    headers.insert(header::ACCEPT, "application/json".parse()?);
    Ok(headers)
}

impl GenAi for GeminiProvider {
    /// Run a single generate call and return the full response
    async fn send(
        &self,
        config: &GenConfig,
        contents: &[Content],
        system: Option<&str>,
    ) -> Result<GenerateChunk> {
        let body = GenerateRequest::build(config, contents, system);
        tracing::debug!("request: {}", serde_json::to_string(&body)?);
        let text = self
            .client
            .request(Method::POST, self.url(&config.model, "generateContent"))
            .headers(self.headers.clone())
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        tracing::debug!("response: {text}");
        serde_json::from_str(&text).map_err(Into::into)
    }

    /// Run a generate call with streaming
    fn stream(
        &self,
        config: GenConfig,
        contents: &[Content],
        system: Option<&str>,
    ) -> impl Stream<Item = Result<GenerateChunk>> + Send {
        let body = GenerateRequest::build(&config, contents, system);
        let url = format!("{}?alt=sse", self.url(&config.model, "streamGenerateContent"));
        let request = self
            .client
            .request(Method::POST, url)
            .headers(self.headers.clone())
            .json(&body);

        try_stream! {
            let response = request.send().await?.error_for_status()?;
            tracing::debug!("Gemini responded with status: {}", response.status());
            let mut stream = response.bytes_stream();

            // SSE frames may split across transport chunks; buffer until a
            // blank-line frame boundary.
            let mut buf = String::new();
            let mut chunk_count = 0usize;
            while let Some(bytes) = stream.next().await {
                let bytes = bytes?;
                buf.push_str(&String::from_utf8_lossy(&bytes));

                while let Some(pos) = buf.find("\n\n") {
                    let frame = buf[..pos].to_owned();
                    buf.drain(..pos + 2);

                    for data in sse_payloads(&frame) {
                        match serde_json::from_str::<GenerateChunk>(data) {
                            Ok(chunk) => {
                                chunk_count += 1;
                                yield chunk;
                            }
                            Err(e) => tracing::warn!("Failed to parse chunk: {e}, data: {data}"),
                        }
                    }
                }
            }

            // Trailing frame without a final blank line.
            for data in sse_payloads(&buf) {
                match serde_json::from_str::<GenerateChunk>(data) {
                    Ok(chunk) => {
                        chunk_count += 1;
                        yield chunk;
                    }
                    Err(e) => tracing::warn!("Failed to parse chunk: {e}, data: {data}"),
                }
            }
            tracing::debug!("Gemini stream closed after {chunk_count} chunks");
        }
    }
}
