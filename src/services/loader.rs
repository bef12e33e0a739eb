use std::sync::Arc;

use crate::{
    db::Warehouse,
    error::Result,
    models::{LoadOutcome, TransactionRecord},
};

/// Appends validated records to the warehouse table.
///
/// There is no dedup and no retry: loading a file twice stores it twice, and
/// a failure leaves whatever chunks already committed.
pub struct Loader {
    warehouse: Arc<dyn Warehouse>,
    chunk_size: usize,
}

impl Loader {
    pub fn new(warehouse: Arc<dyn Warehouse>, chunk_size: usize) -> Self {
        Self {
            warehouse,
            chunk_size,
        }
    }

    pub fn table(&self) -> &str {
        self.warehouse.table()
    }

    pub async fn load(&self, records: &[TransactionRecord]) -> Result<LoadOutcome> {
        let outcome = self.warehouse.append(records, self.chunk_size).await?;

        tracing::info!(
            table = self.table(),
            rows = outcome.rows,
            chunks = outcome.chunks,
            "appended upload"
        );
        Ok(outcome)
    }

    /// Administrative reset: removes every row
    pub async fn truncate(&self) -> Result<u64> {
        let removed = self.warehouse.truncate().await?;
        tracing::warn!(table = self.table(), removed, "table truncated");
        Ok(removed)
    }

    pub async fn row_count(&self) -> Result<i64> {
        self.warehouse.row_count().await
    }
}
