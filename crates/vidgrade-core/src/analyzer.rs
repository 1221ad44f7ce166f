//! Analysis orchestration.
//!
//! `select provider -> build prompt -> call provider -> normalize`, with every
//! failure (and the no-provider case) ending in the fallback record.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{info, warn};

use crate::config::{AnalyzerConfig, ProviderSelection};
use crate::error::{AnalysisError, AnalysisResult};
use crate::fallback::fallback_record;
use crate::model::{AnalysisRequest, AssessmentRecord};
use crate::normalize::parse_assessment;
use crate::prompt::build_prompt;
use crate::providers::{
    GeminiClient, GeminiEnvelope, GenerativeProvider, OpenAiClient, OpenAiEnvelope,
};

/// Where a returned record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentSource {
    Live,
    Fallback,
}

/// A record tagged with its origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    #[serde(flatten)]
    pub record: AssessmentRecord,
    pub source: AssessmentSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

impl Analysis {
    fn live(record: AssessmentRecord, provider: &str) -> Self {
        Self {
            record,
            source: AssessmentSource::Live,
            provider: Some(provider.to_string()),
        }
    }

    fn fallback() -> Self {
        Self {
            record: fallback_record(),
            source: AssessmentSource::Fallback,
            provider: None,
        }
    }

    pub fn is_live(&self) -> bool {
        self.source == AssessmentSource::Live
    }
}

/// Request-independent analyzer. Holds no mutable state; share it behind `Arc`.
#[derive(Clone)]
pub struct VideoAnalyzer {
    provider: Option<Arc<dyn GenerativeProvider>>,
    timeout: Duration,
}

impl VideoAnalyzer {
    pub fn new(provider: Option<Arc<dyn GenerativeProvider>>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// Build the analyzer for the configured provider selection.
    pub fn from_config(config: &AnalyzerConfig) -> AnalysisResult<Self> {
        let provider: Option<Arc<dyn GenerativeProvider>> = match &config.selection {
            ProviderSelection::None => None,
            ProviderSelection::OpenAi(key) => {
                let envelope = OpenAiEnvelope::new(
                    &config.openai_base_url,
                    config.openai_model.clone(),
                    key.clone(),
                    config.temperature,
                );
                let client: Arc<dyn GenerativeProvider> = Arc::new(OpenAiClient::new(envelope)?);
                Some(client)
            }
            ProviderSelection::Gemini(key) => {
                let envelope = GeminiEnvelope::new(
                    &config.gemini_base_url,
                    config.gemini_model.clone(),
                    key.clone(),
                );
                let client: Arc<dyn GenerativeProvider> = Arc::new(GeminiClient::new(envelope)?);
                Some(client)
            }
        };

        match &provider {
            Some(p) => info!(
                provider = p.provider_name(),
                model = %p.model(),
                "analysis provider selected"
            ),
            None => warn!("no provider credential configured; analyses will use the fallback assessment"),
        }

        Ok(Self::new(provider, config.timeout()))
    }

    pub fn provider_name(&self) -> Option<&'static str> {
        self.provider.as_ref().map(|p| p.provider_name())
    }

    /// Analyze a video. Never fails: any problem yields the fallback record.
    pub async fn analyze(&self, request: &AnalysisRequest) -> AssessmentRecord {
        self.analyze_tagged(request).await.record
    }

    /// Like [`analyze`](Self::analyze), but reports whether the record is live.
    pub async fn analyze_tagged(&self, request: &AnalysisRequest) -> Analysis {
        let Some(provider) = &self.provider else {
            warn!(
                video_reference = %request.video_reference,
                "no provider configured, returning fallback assessment"
            );
            return Analysis::fallback();
        };

        match self.run_live(provider.as_ref(), request).await {
            Ok(record) => {
                info!(
                    provider = provider.provider_name(),
                    criteria = record.rubric.len(),
                    overall_grade = %record.overall_grade,
                    "live assessment produced"
                );
                Analysis::live(record, provider.provider_name())
            }
            Err(e) => {
                warn!(
                    provider = provider.provider_name(),
                    error_kind = e.kind(),
                    status = ?e.status(),
                    error = %e,
                    "analysis failed, returning fallback assessment"
                );
                Analysis::fallback()
            }
        }
    }

    async fn run_live(
        &self,
        provider: &dyn GenerativeProvider,
        request: &AnalysisRequest,
    ) -> AnalysisResult<AssessmentRecord> {
        let prompt = build_prompt(&request.subject, &request.video_reference);

        let raw = tokio::time::timeout(self.timeout, provider.complete(&prompt))
            .await
            .map_err(|_| AnalysisError::ProviderTimeout {
                provider: provider.provider_name().to_string(),
                after: self.timeout,
            })??;

        parse_assessment(&raw)
    }
}
