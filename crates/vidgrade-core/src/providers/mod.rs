//! Generative provider adapters.
//!
//! Both providers share one call path ([`ProviderClient`]): a single POST, no
//! retry, first completion text returned verbatim. They differ only in their
//! [`ProviderEnvelope`].

pub mod gemini;
pub mod openai;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;
use tracing::debug;

use crate::error::{AnalysisError, AnalysisResult};

pub use gemini::{GeminiClient, GeminiEnvelope};
pub use openai::{OpenAiClient, OpenAiEnvelope};

/// User agent for provider requests.
const USER_AGENT_VALUE: &str = concat!("vidgrade/", env!("CARGO_PKG_VERSION"));

/// Error bodies longer than this many characters are cut before logging.
const MAX_ERROR_DETAIL_CHARS: usize = 512;

/// Anything that can turn a prompt into raw reply text.
#[async_trait]
pub trait GenerativeProvider: Send + Sync {
    fn provider_name(&self) -> &'static str;

    fn model(&self) -> &str;

    /// One round trip; the reply is returned unparsed.
    async fn complete(&self, prompt: &str) -> AnalysisResult<String>;
}

/// Provider-specific request and response shape.
pub trait ProviderEnvelope: Send + Sync {
    fn name(&self) -> &'static str;

    fn model(&self) -> &str;

    /// Full request URL, without credentials.
    fn endpoint(&self) -> String;

    fn build_request(&self, prompt: &str) -> Value;

    /// Attach the credential to the request.
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder;

    /// First textual completion in a success body.
    fn extract_text<'a>(&self, body: &'a Value) -> Option<&'a str>;
}

/// HTTP client for one provider envelope.
#[derive(Debug, Clone)]
pub struct ProviderClient<E> {
    client: reqwest::Client,
    envelope: E,
}

impl<E: ProviderEnvelope> ProviderClient<E> {
    pub fn new(envelope: E) -> AnalysisResult<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(default_headers)
            .build()
            .map_err(|e| AnalysisError::Config {
                message: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self { client, envelope })
    }

    pub fn envelope(&self) -> &E {
        &self.envelope
    }
}

#[async_trait]
impl<E: ProviderEnvelope + 'static> GenerativeProvider for ProviderClient<E> {
    fn provider_name(&self) -> &'static str {
        self.envelope.name()
    }

    fn model(&self) -> &str {
        self.envelope.model()
    }

    async fn complete(&self, prompt: &str) -> AnalysisResult<String> {
        let provider = self.envelope.name();
        let url = self.envelope.endpoint();
        let body = self.envelope.build_request(prompt);

        debug!(
            provider,
            model = %self.envelope.model(),
            url = %url,
            prompt_length = prompt.len(),
            "calling provider"
        );

        // without_url: the generate-content credential travels in the query string.
        let response = self
            .envelope
            .authorize(self.client.post(&url))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                AnalysisError::provider_call(provider, format!("request failed: {}", e.without_url()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());
            return Err(AnalysisError::ProviderCall {
                provider: provider.to_string(),
                status: Some(status.as_u16()),
                message: format!("HTTP {}: {}", status.as_u16(), truncate_detail(&body)),
            });
        }

        let json: Value = response.json().await.map_err(|e| {
            AnalysisError::provider_call(
                provider,
                format!("invalid response envelope: {}", e.without_url()),
            )
        })?;

        let text = self
            .envelope
            .extract_text(&json)
            .ok_or_else(|| AnalysisError::provider_call(provider, "response missing completion text"))?;

        debug!(provider, reply_length = text.len(), "provider reply received");
        Ok(text.to_string())
    }
}

fn truncate_detail(body: &str) -> String {
    match body.char_indices().nth(MAX_ERROR_DETAIL_CHARS) {
        Some((cut, _)) => format!("{}... ({} bytes total)", &body[..cut], body.len()),
        None => body.to_string(),
    }
}
