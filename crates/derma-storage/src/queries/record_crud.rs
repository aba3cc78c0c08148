//! Insert and list queries for prediction records.

use rusqlite::{params, Connection};

use derma_core::errors::DermaResult;
use derma_core::models::{PredictionLabel, PredictionRecord};

use crate::to_storage_err;

/// Insert a single record. The id is the document key; a duplicate id is
/// an error rather than an overwrite (records are write-once).
pub fn insert_record(conn: &Connection, record: &PredictionRecord) -> DermaResult<()> {
    conn.execute(
        "INSERT INTO predictions (
            id, result, confidence_score, is_above_threshold, created_at
        ) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            record.id,
            record.result.as_str(),
            record.confidence_score,
            record.is_above_threshold as i32,
            record.created_at,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Read back every stored record, oldest first (created_at, then id, so
/// repeated reads return identical order).
pub fn list_records(conn: &Connection) -> DermaResult<Vec<PredictionRecord>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, result, confidence_score, is_above_threshold, created_at
             FROM predictions
             ORDER BY created_at, id",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            let id: String = row.get(0)?;
            let result: String = row.get(1)?;
            let confidence_score: String = row.get(2)?;
            let is_above_threshold: i32 = row.get(3)?;
            let created_at: String = row.get(4)?;
            Ok((id, result, confidence_score, is_above_threshold, created_at))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut records = Vec::new();
    for row in rows {
        let (id, result, confidence_score, is_above_threshold, created_at) =
            row.map_err(|e| to_storage_err(e.to_string()))?;
        let result = PredictionLabel::parse(&result)
            .ok_or_else(|| to_storage_err(format!("unknown result label: {result}")))?;
        records.push(PredictionRecord {
            id,
            result,
            confidence_score,
            is_above_threshold: is_above_threshold != 0,
            created_at,
        });
    }
    Ok(records)
}
