//! Property test: the three decision views of a record always agree.

use derma_core::{PredictionLabel, PredictionRecord};
use proptest::prelude::*;

proptest! {
    #[test]
    fn decision_views_agree(score in 0.0f32..=1.0f32) {
        let record = PredictionRecord::from_score(score);

        prop_assert_eq!(record.is_above_threshold, score > 0.5);
        let expected = if record.is_above_threshold {
            PredictionLabel::Cancer
        } else {
            PredictionLabel::NonCancer
        };
        prop_assert_eq!(record.result, expected);

        // The stored score is the raw output at 4 decimal places.
        let reparsed: f32 = record.confidence_score.parse().unwrap();
        prop_assert!((reparsed - score).abs() <= 0.00005 + f32::EPSILON);
    }

    #[test]
    fn record_survives_json_round_trip(score in 0.0f32..=1.0f32) {
        let record = PredictionRecord::from_score(score);
        let json = serde_json::to_string(&record).unwrap();
        let back: PredictionRecord = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(record, back);
    }
}
