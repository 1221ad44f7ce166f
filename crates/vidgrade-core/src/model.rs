//! Request and record types.

use serde::{Deserialize, Serialize, Serializer};

use crate::error::{AnalysisError, AnalysisResult};

/// One analysis request. Constructed per call and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// Opaque video reference; existence is never checked.
    pub video_reference: String,
    /// Free-text subject, may be empty.
    pub subject: String,
}

impl AnalysisRequest {
    pub fn new(video_reference: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            video_reference: video_reference.into(),
            subject: subject.into(),
        }
    }
}

/// A single scored rubric criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RubricEntryWire")]
pub struct RubricEntry {
    /// Criterion name. The prompt asks providers for `criteria`.
    #[serde(rename = "criteria")]
    pub criterion: String,
    #[serde(serialize_with = "serialize_score")]
    pub score: f64,
    #[serde(serialize_with = "serialize_score")]
    pub max_score: f64,
}

/// Inbound rubric entry. Providers use either `criteria` or `criterion`,
/// sometimes both; `criteria` wins.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RubricEntryWire {
    criteria: Option<String>,
    criterion: Option<String>,
    score: f64,
    max_score: f64,
}

impl TryFrom<RubricEntryWire> for RubricEntry {
    type Error = String;

    fn try_from(wire: RubricEntryWire) -> Result<Self, Self::Error> {
        let criterion = wire
            .criteria
            .or(wire.criterion)
            .ok_or_else(|| "rubric entry is missing `criteria`".to_string())?;
        Ok(Self::new(criterion, wire.score, wire.max_score))
    }
}

/// Whole scores go out as integers (`8`, not `8.0`).
fn serialize_score<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

impl RubricEntry {
    pub fn new(criterion: impl Into<String>, score: f64, max_score: f64) -> Self {
        Self {
            criterion: criterion.into(),
            score,
            max_score,
        }
    }
}

/// Canonical assessment record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRecord {
    pub rubric: Vec<RubricEntry>,
    pub overall_grade: String,
    pub feedback: String,
}

impl AssessmentRecord {
    /// Check the record invariants: non-empty rubric, finite scores, and
    /// `0 <= score <= max_score` for every entry.
    pub fn validate(&self) -> AnalysisResult<()> {
        if self.rubric.is_empty() {
            return Err(AnalysisError::malformed("rubric is empty"));
        }

        for entry in &self.rubric {
            if !entry.score.is_finite() || !entry.max_score.is_finite() {
                return Err(AnalysisError::malformed(format!(
                    "criterion '{}' has a non-finite score",
                    entry.criterion
                )));
            }
            if entry.score < 0.0 || entry.score > entry.max_score {
                return Err(AnalysisError::malformed(format!(
                    "criterion '{}' scored {} outside 0..={}",
                    entry.criterion, entry.score, entry.max_score
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(rubric: Vec<RubricEntry>) -> AssessmentRecord {
        AssessmentRecord {
            rubric,
            overall_grade: "9/10".to_string(),
            feedback: "Great.".to_string(),
        }
    }

    #[test]
    fn serializes_wire_field_names() {
        let value = serde_json::to_value(record(vec![RubricEntry::new("Clarity", 9.0, 10.0)]))
            .unwrap();
        assert_eq!(value["rubric"][0]["criteria"], "Clarity");
        assert_eq!(value["rubric"][0]["maxScore"], 10.0);
        assert_eq!(value["overallGrade"], "9/10");
        assert!(value["rubric"][0].get("criterion").is_none());
    }

    #[test]
    fn accepts_criterion_alias() {
        let entry: RubricEntry =
            serde_json::from_str(r#"{"criterion":"Depth","score":7,"maxScore":10}"#).unwrap();
        assert_eq!(entry, RubricEntry::new("Depth", 7.0, 10.0));
    }

    #[test]
    fn tolerates_both_criterion_keys() {
        let entry: RubricEntry = serde_json::from_str(
            r#"{"criteria":"Clarity","criterion":"Clarity of delivery","score":8,"maxScore":10}"#,
        )
        .unwrap();
        assert_eq!(entry, RubricEntry::new("Clarity", 8.0, 10.0));
    }

    #[test]
    fn rejects_entry_without_criterion() {
        let err = serde_json::from_str::<RubricEntry>(r#"{"score":8,"maxScore":10}"#).unwrap_err();
        assert!(err.to_string().contains("missing `criteria`"));
    }

    #[test]
    fn whole_scores_serialize_as_integers() {
        let json = serde_json::to_string(&RubricEntry::new("Clarity", 8.0, 10.0)).unwrap();
        assert_eq!(json, r#"{"criteria":"Clarity","score":8,"maxScore":10}"#);

        let json = serde_json::to_string(&RubricEntry::new("Depth", 7.5, 10.0)).unwrap();
        assert_eq!(json, r#"{"criteria":"Depth","score":7.5,"maxScore":10}"#);
    }

    #[test]
    fn validate_rejects_empty_rubric() {
        assert!(record(vec![]).validate().is_err());
    }

    #[test]
    fn validate_rejects_out_of_range_scores() {
        assert!(record(vec![RubricEntry::new("Clarity", 11.0, 10.0)])
            .validate()
            .is_err());
        assert!(record(vec![RubricEntry::new("Clarity", -1.0, 10.0)])
            .validate()
            .is_err());
    }

    #[test]
    fn validate_accepts_boundaries() {
        let r = record(vec![
            RubricEntry::new("Clarity", 0.0, 10.0),
            RubricEntry::new("Depth", 10.0, 10.0),
        ]);
        assert!(r.validate().is_ok());
    }
}
