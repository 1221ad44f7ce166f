use reqwest::header::AUTHORIZATION;
use serde_json::{json, Value};

use super::{ProviderClient, ProviderEnvelope};
use crate::config::ProviderCredential;

/// Chat-completions client.
pub type OpenAiClient = ProviderClient<OpenAiEnvelope>;

/// `POST {base}/chat/completions` with a bearer credential; reply at
/// `choices[0].message.content`.
#[derive(Debug, Clone)]
pub struct OpenAiEnvelope {
    base_url: String,
    model: String,
    api_key: ProviderCredential,
    temperature: f64,
}

impl OpenAiEnvelope {
    pub fn new(
        base_url: &str,
        model: impl Into<String>,
        api_key: ProviderCredential,
        temperature: f64,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.into(),
            api_key,
            temperature,
        }
    }
}

impl ProviderEnvelope for OpenAiEnvelope {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn build_request(&self, prompt: &str) -> Value {
        json!({
            "model": self.model,
            "messages": [
                { "role": "user", "content": prompt }
            ],
            "temperature": self.temperature,
        })
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request.header(AUTHORIZATION, format!("Bearer {}", self.api_key.expose()))
    }

    fn extract_text<'a>(&self, body: &'a Value) -> Option<&'a str> {
        body.pointer("/choices/0/message/content")
            .and_then(Value::as_str)
    }
}
