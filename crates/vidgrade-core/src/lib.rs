//! Provider-agnostic video assessment core.
//!
//! This crate turns a video reference and a subject label into a fixed-shape
//! [`AssessmentRecord`], providing:
//!
//! - Prompt construction for a simulated rubric evaluation
//! - Adapters for an OpenAI-style chat-completions API and a Gemini-style
//!   generate-content API
//! - Normalization of free-form provider replies into the canonical record
//! - A synthetic fallback record whenever no live analysis is available
//!
//! # Quick Start
//!
//! ```no_run
//! use vidgrade_core::{AnalysisRequest, AnalyzerConfig, VideoAnalyzer};
//!
//! # async fn example() -> vidgrade_core::AnalysisResult<()> {
//! let analyzer = VideoAnalyzer::from_config(&AnalyzerConfig::from_env())?;
//! let request = AnalysisRequest::new("https://youtu.be/dQw4w9WgXcQ", "Physics");
//!
//! // Never fails: provider problems degrade to the fallback record.
//! let record = analyzer.analyze(&request).await;
//! println!("{}", record.overall_grade);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! | Environment Variable | Description |
//! |---------------------|-------------|
//! | `OPENAI_API_KEY` | Chat-completions credential (checked first) |
//! | `GEMINI_API_KEY` | Generate-content credential |
//! | `VIDGRADE_OPENAI_BASE_URL` | Chat-completions base URL (default: `https://api.openai.com/v1`) |
//! | `VIDGRADE_OPENAI_MODEL` | Chat-completions model (default: `gpt-4o-mini`) |
//! | `VIDGRADE_GEMINI_BASE_URL` | Generate-content base URL (default: `https://generativelanguage.googleapis.com/v1beta`) |
//! | `VIDGRADE_GEMINI_MODEL` | Generate-content model (default: `gemini-2.0-flash`) |
//! | `VIDGRADE_PROVIDER_TIMEOUT` | Provider call bound in seconds (default: 60) |

pub mod analyzer;
pub mod config;
pub mod error;
pub mod fallback;
pub mod model;
pub mod normalize;
pub mod prompt;
pub mod providers;
pub mod video_id;

pub use analyzer::{Analysis, AssessmentSource, VideoAnalyzer};
pub use config::{AnalyzerConfig, ProviderCredential, ProviderSelection};
pub use error::{AnalysisError, AnalysisResult};
pub use fallback::fallback_record;
pub use model::{AnalysisRequest, AssessmentRecord, RubricEntry};
pub use normalize::parse_assessment;
pub use prompt::{build_prompt, STRICT_JSON_INSTRUCTION};
pub use providers::{
    GeminiClient, GeminiEnvelope, GenerativeProvider, OpenAiClient, OpenAiEnvelope,
    ProviderClient, ProviderEnvelope,
};
pub use video_id::extract_video_id;
