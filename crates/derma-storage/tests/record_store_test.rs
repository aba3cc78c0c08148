//! Integration test: record store round-trips and read stability.

use derma_core::models::{PredictionLabel, PredictionRecord};
use derma_core::traits::IRecordStore;
use derma_storage::StorageEngine;

fn make_test_record(id: &str, score: f32, created_at: &str) -> PredictionRecord {
    let mut record = PredictionRecord::from_score(score);
    record.id = id.to_string();
    record.created_at = created_at.to_string();
    record
}

#[test]
fn put_then_list_round_trips_all_fields() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let record = make_test_record("rec-001", 0.91, "2026-08-06T10:00:00.000Z");

    engine.put(&record).unwrap();
    let listed = engine.list_all().unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, "rec-001");
    assert_eq!(listed[0].result, PredictionLabel::Cancer);
    assert_eq!(listed[0].confidence_score, "0.9100");
    assert!(listed[0].is_above_threshold);
    assert_eq!(listed[0].created_at, "2026-08-06T10:00:00.000Z");
    assert_eq!(listed[0], record);
}

#[test]
fn empty_store_lists_nothing() {
    let engine = StorageEngine::open_in_memory().unwrap();
    assert!(engine.list_all().unwrap().is_empty());
}

#[test]
fn repeated_reads_are_identical() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine
        .put(&make_test_record("rec-a", 0.3, "2026-08-06T10:00:00.000Z"))
        .unwrap();
    engine
        .put(&make_test_record("rec-b", 0.7, "2026-08-06T11:00:00.000Z"))
        .unwrap();

    let first = engine.list_all().unwrap();
    let second = engine.list_all().unwrap();
    assert_eq!(first, second);
}

#[test]
fn records_come_back_oldest_first() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine
        .put(&make_test_record("rec-late", 0.2, "2026-08-06T12:00:00.000Z"))
        .unwrap();
    engine
        .put(&make_test_record("rec-early", 0.8, "2026-08-06T09:00:00.000Z"))
        .unwrap();

    let listed = engine.list_all().unwrap();
    assert_eq!(listed[0].id, "rec-early");
    assert_eq!(listed[1].id, "rec-late");
}

#[test]
fn duplicate_id_is_rejected() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let record = make_test_record("rec-dup", 0.6, "2026-08-06T10:00:00.000Z");

    engine.put(&record).unwrap();
    assert!(engine.put(&record).is_err());
}

#[test]
fn file_backed_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("derma.db");

    {
        let engine = StorageEngine::open(&db_path).unwrap();
        engine
            .put(&make_test_record("rec-file", 0.55, "2026-08-06T10:00:00.000Z"))
            .unwrap();
    }

    let reopened = StorageEngine::open(&db_path).unwrap();
    let listed = reopened.list_all().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, "rec-file");
    assert_eq!(listed[0].confidence_score, "0.5500");
}
