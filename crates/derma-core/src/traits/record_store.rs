use crate::errors::DermaResult;
use crate::models::PredictionRecord;

/// Persistence for prediction records: write-once put plus full history read.
pub trait IRecordStore: Send + Sync {
    /// Persist a record under its id.
    fn put(&self, record: &PredictionRecord) -> DermaResult<()>;

    /// Return every stored record in a stable order.
    fn list_all(&self) -> DermaResult<Vec<PredictionRecord>>;
}
