//! StorageEngine — owns the connection, applies pragmas, runs migrations,
//! implements IRecordStore.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;
use tracing::debug;

use derma_core::errors::DermaResult;
use derma_core::models::PredictionRecord;
use derma_core::traits::IRecordStore;

use crate::{migrations, pragmas, queries, to_storage_err};

/// SQLite-backed record store. The connection sits behind a mutex; each
/// record write is a single-row insert, so per-document atomicity comes
/// from SQLite itself.
pub struct StorageEngine {
    conn: Mutex<Connection>,
}

impl StorageEngine {
    /// Open a store backed by a file on disk.
    pub fn open(path: &Path) -> DermaResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        let engine = Self {
            conn: Mutex::new(conn),
        };
        engine.initialize()?;
        debug!(path = %path.display(), "record store opened");
        Ok(engine)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> DermaResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        let engine = Self {
            conn: Mutex::new(conn),
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Apply pragmas and run migrations.
    fn initialize(&self) -> DermaResult<()> {
        self.with_conn(|conn| {
            pragmas::apply_pragmas(conn)?;
            migrations::run_migrations(conn)?;
            Ok(())
        })
    }

    /// Run a closure against the connection.
    fn with_conn<F, T>(&self, f: F) -> DermaResult<T>
    where
        F: FnOnce(&Connection) -> DermaResult<T>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|e| to_storage_err(format!("connection lock poisoned: {e}")))?;
        f(&conn)
    }
}

impl IRecordStore for StorageEngine {
    fn put(&self, record: &PredictionRecord) -> DermaResult<()> {
        self.with_conn(|conn| queries::record_crud::insert_record(conn, record))
    }

    fn list_all(&self) -> DermaResult<Vec<PredictionRecord>> {
        self.with_conn(queries::record_crud::list_records)
    }
}
