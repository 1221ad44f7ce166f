//! Synthetic assessment used whenever no live analysis is available.

use crate::model::{AssessmentRecord, RubricEntry};

pub const FALLBACK_OVERALL_GRADE: &str = "8/10";

pub const FALLBACK_FEEDBACK: &str = "The video provides a clear introduction to the topic with good examples. Some technical details could be explained more thoroughly.";

/// The fixed fallback record. Identical for "no provider configured" and
/// "provider failed".
pub fn fallback_record() -> AssessmentRecord {
    AssessmentRecord {
        rubric: vec![
            RubricEntry::new("Clarity", 8.0, 10.0),
            RubricEntry::new("Depth", 7.0, 10.0),
            RubricEntry::new("Accuracy", 9.0, 10.0),
            RubricEntry::new("Engagement", 8.0, 10.0),
        ],
        overall_grade: FALLBACK_OVERALL_GRADE.to_string(),
        feedback: FALLBACK_FEEDBACK.to_string(),
    }
}
