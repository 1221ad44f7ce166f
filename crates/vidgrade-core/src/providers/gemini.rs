use serde_json::{json, Value};

use super::{ProviderClient, ProviderEnvelope};
use crate::config::ProviderCredential;

/// Generate-content client.
pub type GeminiClient = ProviderClient<GeminiEnvelope>;

/// `POST {base}/models/{model}:generateContent?key=...`; reply at
/// `candidates[0].content.parts[0].text`.
#[derive(Debug, Clone)]
pub struct GeminiEnvelope {
    base_url: String,
    model: String,
    api_key: ProviderCredential,
}

impl GeminiEnvelope {
    pub fn new(base_url: &str, model: impl Into<String>, api_key: ProviderCredential) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.into(),
            api_key,
        }
    }
}

impl ProviderEnvelope for GeminiEnvelope {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn build_request(&self, prompt: &str) -> Value {
        json!({
            "contents": [
                { "parts": [ { "text": prompt } ] }
            ]
        })
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request.query(&[("key", self.api_key.expose())])
    }

    fn extract_text<'a>(&self, body: &'a Value) -> Option<&'a str> {
        body.pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope() -> GeminiEnvelope {
        GeminiEnvelope::new(
            "https://generativelanguage.googleapis.com/v1beta",
            "gemini-2.0-flash",
            ProviderCredential::new("g-test").unwrap(),
        )
    }

    #[test]
    fn endpoint_embeds_model_without_credential() {
        let endpoint = envelope().endpoint();
        assert_eq!(
            endpoint,
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
        assert!(!endpoint.contains("g-test"));
    }

    #[test]
    fn request_has_single_text_part() {
        let body = envelope().build_request("grade this");
        assert_eq!(body["contents"].as_array().unwrap().len(), 1);
        assert_eq!(body["contents"][0]["parts"][0]["text"], "grade this");
    }

    #[test]
    fn extracts_first_candidate_part() {
        let body = json!({
            "candidates": [
                { "content": { "parts": [ { "text": "first" }, { "text": "second" } ] } }
            ]
        });
        assert_eq!(envelope().extract_text(&body), Some("first"));
        assert_eq!(envelope().extract_text(&json!({ "candidates": [] })), None);
    }
}
