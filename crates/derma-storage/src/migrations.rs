//! Schema setup: one document row per prediction, keyed by id.

use rusqlite::Connection;

use derma_core::errors::{DermaResult, StorageError};

/// Create the predictions table if it does not exist.
pub fn run_migrations(conn: &Connection) -> DermaResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS predictions (
            id                 TEXT PRIMARY KEY,
            result             TEXT NOT NULL,
            confidence_score   TEXT NOT NULL,
            is_above_threshold INTEGER NOT NULL,
            created_at         TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_predictions_created_at ON predictions(created_at);
        ",
    )
    .map_err(|e| StorageError::MigrationFailed {
        reason: e.to_string(),
    })?;
    Ok(())
}
