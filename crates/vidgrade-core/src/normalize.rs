//! Reply normalization.
//!
//! Generative replies usually wrap the JSON object in chatty text. The object
//! is recovered by slicing from the first `{` to the last `}`. This is a
//! heuristic: braces inside string values before the real closing brace, or
//! several objects in one reply, are not handled.

use crate::error::{AnalysisError, AnalysisResult};
use crate::model::AssessmentRecord;

/// Parse raw provider text into a validated [`AssessmentRecord`].
pub fn parse_assessment(raw: &str) -> AnalysisResult<AssessmentRecord> {
    let json_segment = extract_json_object(raw)?;

    let record: AssessmentRecord = serde_json::from_str(json_segment)
        .map_err(|e| AnalysisError::malformed(format!("invalid assessment JSON: {}", e)))?;

    record.validate()?;
    Ok(record)
}

/// Inclusive slice between the first `{` and the last `}`.
fn extract_json_object(raw: &str) -> AnalysisResult<&str> {
    let start = raw
        .find('{')
        .ok_or_else(|| AnalysisError::malformed("no JSON start '{' found in reply"))?;
    let end = raw
        .rfind('}')
        .ok_or_else(|| AnalysisError::malformed("no JSON end '}' found in reply"))?;

    if end < start {
        return Err(AnalysisError::malformed(
            "last '}' precedes first '{' in reply",
        ));
    }

    Ok(&raw[start..=end])
}
