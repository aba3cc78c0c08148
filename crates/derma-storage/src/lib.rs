//! # derma-storage
//!
//! SQLite-backed record store: connection setup with pragmas, schema
//! migration, and the queries behind `IRecordStore`.

pub mod engine;
pub mod migrations;
pub mod pragmas;
pub mod queries;

pub use engine::StorageEngine;

use derma_core::errors::{DermaError, StorageError};

/// Map a low-level SQLite failure into the storage error variant.
pub(crate) fn to_storage_err(message: impl Into<String>) -> DermaError {
    StorageError::SqliteError {
        message: message.into(),
    }
    .into()
}
