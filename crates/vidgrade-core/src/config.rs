//! Analyzer configuration and provider selection.

use std::fmt;
use std::time::Duration;

pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// A provider secret. Debug output never shows the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderCredential(String);

impl ProviderCredential {
    /// Wrap a secret; empty or whitespace-only values count as absent.
    pub fn new(secret: impl Into<String>) -> Option<Self> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            None
        } else {
            Some(Self(secret))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ProviderCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ProviderCredential([REDACTED])")
    }
}

/// Which provider (if any) handles analysis requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProviderSelection {
    /// No credential available; every request gets the fallback record.
    #[default]
    None,
    /// OpenAI-style chat completions.
    OpenAi(ProviderCredential),
    /// Gemini-style generate-content.
    Gemini(ProviderCredential),
}

impl ProviderSelection {
    /// Pick a provider by fixed priority: OpenAI first, then Gemini.
    pub fn from_credentials(openai: Option<String>, gemini: Option<String>) -> Self {
        if let Some(cred) = openai.and_then(ProviderCredential::new) {
            Self::OpenAi(cred)
        } else if let Some(cred) = gemini.and_then(ProviderCredential::new) {
            Self::Gemini(cred)
        } else {
            Self::None
        }
    }

    /// Selection from `OPENAI_API_KEY` / `GEMINI_API_KEY`.
    pub fn from_env() -> Self {
        Self::from_credentials(
            std::env::var(OPENAI_API_KEY_ENV).ok(),
            std::env::var(GEMINI_API_KEY_ENV).ok(),
        )
    }

    pub fn provider_name(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::OpenAi(_) => Some("openai"),
            Self::Gemini(_) => Some("gemini"),
        }
    }
}

/// Analyzer configuration.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub selection: ProviderSelection,

    /// Chat-completions base URL.
    pub openai_base_url: String,
    pub openai_model: String,

    /// Generate-content base URL.
    pub gemini_base_url: String,
    pub gemini_model: String,

    pub temperature: f64,

    /// Upper bound on a single provider call, in seconds.
    pub timeout_secs: u64,
}

fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_gemini_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_timeout() -> u64 {
    60
}

const DEFAULT_TEMPERATURE: f64 = 0.7;

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            selection: ProviderSelection::None,
            openai_base_url: default_openai_base_url(),
            openai_model: default_openai_model(),
            gemini_base_url: default_gemini_base_url(),
            gemini_model: default_gemini_model(),
            temperature: DEFAULT_TEMPERATURE,
            timeout_secs: default_timeout(),
        }
    }
}

impl AnalyzerConfig {
    /// Create config from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `OPENAI_API_KEY` | Chat-completions credential |
    /// | `GEMINI_API_KEY` | Generate-content credential |
    /// | `VIDGRADE_OPENAI_BASE_URL` | Chat-completions base URL |
    /// | `VIDGRADE_OPENAI_MODEL` | Chat-completions model |
    /// | `VIDGRADE_GEMINI_BASE_URL` | Generate-content base URL |
    /// | `VIDGRADE_GEMINI_MODEL` | Generate-content model |
    /// | `VIDGRADE_PROVIDER_TIMEOUT` | Provider call bound in seconds |
    pub fn from_env() -> Self {
        Self {
            selection: ProviderSelection::from_env(),
            openai_base_url: std::env::var("VIDGRADE_OPENAI_BASE_URL")
                .unwrap_or_else(|_| default_openai_base_url()),
            openai_model: std::env::var("VIDGRADE_OPENAI_MODEL")
                .unwrap_or_else(|_| default_openai_model()),
            gemini_base_url: std::env::var("VIDGRADE_GEMINI_BASE_URL")
                .unwrap_or_else(|_| default_gemini_base_url()),
            gemini_model: std::env::var("VIDGRADE_GEMINI_MODEL")
                .unwrap_or_else(|_| default_gemini_model()),
            temperature: DEFAULT_TEMPERATURE,
            timeout_secs: std::env::var("VIDGRADE_PROVIDER_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or_else(default_timeout),
        }
    }

    /// Set the provider selection.
    pub fn with_selection(mut self, selection: ProviderSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Set the chat-completions base URL.
    pub fn with_openai_base_url(mut self, url: impl Into<String>) -> Self {
        self.openai_base_url = url.into();
        self
    }

    /// Set the generate-content base URL.
    pub fn with_gemini_base_url(mut self, url: impl Into<String>) -> Self {
        self.gemini_base_url = url.into();
        self
    }

    /// Set the provider call bound.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs().max(1);
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
