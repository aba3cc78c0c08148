use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::DECISION_THRESHOLD;

/// Binary classification outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredictionLabel {
    #[serde(rename = "Cancer")]
    Cancer,
    #[serde(rename = "Non-cancer")]
    NonCancer,
}

impl PredictionLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PredictionLabel::Cancer => "Cancer",
            PredictionLabel::NonCancer => "Non-cancer",
        }
    }

    /// Parse the stored form back into a label.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Cancer" => Some(PredictionLabel::Cancer),
            "Non-cancer" => Some(PredictionLabel::NonCancer),
            _ => None,
        }
    }
}

impl std::fmt::Display for PredictionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One persisted prediction. Written once, never mutated.
///
/// `result`, `confidence_score`, and `is_above_threshold` are three views
/// of one decision; `from_score` is the only way they are produced, which
/// keeps them consistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRecord {
    pub id: String,
    pub result: PredictionLabel,
    /// Raw model output in [0, 1], fixed to 4 decimal places.
    pub confidence_score: String,
    pub is_above_threshold: bool,
    /// ISO-8601 UTC timestamp, millisecond precision, fixed at creation.
    pub created_at: String,
}

impl PredictionRecord {
    /// Derive a complete record from the model's raw confidence score.
    pub fn from_score(score: f32) -> Self {
        let is_above_threshold = score > DECISION_THRESHOLD;
        let result = if is_above_threshold {
            PredictionLabel::Cancer
        } else {
            PredictionLabel::NonCancer
        };
        Self {
            id: Uuid::new_v4().to_string(),
            result,
            confidence_score: format!("{score:.4}"),
            is_above_threshold,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_above_threshold_is_cancer() {
        let record = PredictionRecord::from_score(0.91);
        assert_eq!(record.result, PredictionLabel::Cancer);
        assert!(record.is_above_threshold);
        assert_eq!(record.confidence_score, "0.9100");
    }

    #[test]
    fn boundary_score_resolves_to_non_cancer() {
        // Exactly 0.5 is not strictly above the threshold.
        let record = PredictionRecord::from_score(0.5);
        assert_eq!(record.result, PredictionLabel::NonCancer);
        assert!(!record.is_above_threshold);
    }

    #[test]
    fn threshold_holds_at_edges() {
        for (score, above) in [(0.0, false), (0.5, false), (0.5000001, true), (1.0, true)] {
            let record = PredictionRecord::from_score(score);
            assert_eq!(record.is_above_threshold, above, "score {score}");
            let expected = if above {
                PredictionLabel::Cancer
            } else {
                PredictionLabel::NonCancer
            };
            assert_eq!(record.result, expected, "score {score}");
        }
    }

    #[test]
    fn serializes_with_camel_case_wire_names() {
        let record = PredictionRecord::from_score(0.25);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["result"], "Non-cancer");
        assert_eq!(json["confidenceScore"], "0.2500");
        assert_eq!(json["isAboveThreshold"], false);
        assert!(json["createdAt"].is_string());
        assert!(json.get("confidence_score").is_none());
    }

    #[test]
    fn created_at_is_millisecond_iso8601() {
        let record = PredictionRecord::from_score(0.1);
        // e.g. 2026-08-06T12:34:56.789Z
        assert!(record.created_at.ends_with('Z'));
        assert_eq!(record.created_at.len(), "2026-08-06T12:34:56.789Z".len());
    }
}
