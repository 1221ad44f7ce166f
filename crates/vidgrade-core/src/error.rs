//! Error types for the analysis core.

use std::time::Duration;

/// Analysis errors.
///
/// `ProviderCall`, `ProviderTimeout` and `MalformedResponse` never escape
/// [`VideoAnalyzer::analyze`](crate::VideoAnalyzer::analyze); they are logged
/// and replaced by the fallback record.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// Transport failure, non-success status, or an envelope without reply text.
    #[error("{provider} call failed: {message}")]
    ProviderCall {
        provider: String,
        status: Option<u16>,
        message: String,
    },

    /// Provider did not answer within the configured bound.
    #[error("{provider} call timed out after {after:?}")]
    ProviderTimeout { provider: String, after: Duration },

    /// Reply lacks a recoverable JSON object or violates the record invariants.
    #[error("malformed response: {reason}")]
    MalformedResponse { reason: String },

    /// Adapter could not be constructed.
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl AnalysisError {
    pub(crate) fn provider_call(provider: &str, message: impl Into<String>) -> Self {
        Self::ProviderCall {
            provider: provider.to_string(),
            status: None,
            message: message.into(),
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
        }
    }

    /// HTTP status reported by the provider, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ProviderCall { status, .. } => *status,
            _ => None,
        }
    }

    /// Short stable label used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ProviderCall { .. } => "provider_call",
            Self::ProviderTimeout { .. } => "provider_timeout",
            Self::MalformedResponse { .. } => "malformed_response",
            Self::Config { .. } => "config",
        }
    }
}

/// Result type for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_call_display_includes_provider_and_detail() {
        let err = AnalysisError::ProviderCall {
            provider: "openai".to_string(),
            status: Some(503),
            message: "HTTP 503: upstream unavailable".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "openai call failed: HTTP 503: upstream unavailable"
        );
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.kind(), "provider_call");
    }

    #[test]
    fn malformed_has_no_status() {
        let err = AnalysisError::malformed("no JSON object");
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "malformed response: no JSON object");
    }
}
