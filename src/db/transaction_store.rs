use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite};

use crate::{
    db::{DbPool, TransactionTable, Warehouse},
    error::{AppError, Result},
    models::{CountryRevenue, DistinctCounts, LoadOutcome, ProductRevenue, TransactionRecord},
};

/// Transaction store for database operations
pub struct TransactionStore {
    pool: DbPool,
    table: TransactionTable,
}

impl TransactionStore {
    /// Create a new TransactionStore over an initialized pool
    pub fn new(pool: DbPool, table: TransactionTable) -> Self {
        Self { pool, table }
    }

    async fn insert_chunk(&self, chunk: &[TransactionRecord]) -> Result<()> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let mut builder = QueryBuilder::<Sqlite>::new(self.table.insert_prefix());
        builder.push_values(chunk, |mut row, record| {
            row.push_bind(record.invoice.clone())
                .push_bind(record.stockcode.clone())
                .push_bind(record.description.clone())
                .push_bind(record.quantity)
                .push_bind(record.invoicedate.clone())
                .push_bind(record.price)
                .push_bind(record.customerid)
                .push_bind(record.country.clone());
        });

        builder
            .build()
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;
        tx.commit().await.map_err(AppError::Database)?;

        Ok(())
    }
}

#[async_trait]
impl Warehouse for TransactionStore {
    fn table(&self) -> &str {
        self.table.name()
    }

    async fn append(&self, records: &[TransactionRecord], chunk_size: usize) -> Result<LoadOutcome> {
        let chunk_size = chunk_size.clamp(1, TransactionTable::MAX_CHUNK_ROWS);
        let mut outcome = LoadOutcome {
            success: true,
            chunks: 0,
            rows: 0,
        };

        for chunk in records.chunks(chunk_size) {
            if let Err(e) = self.insert_chunk(chunk).await {
                tracing::error!(
                    table = self.table.name(),
                    committed_chunks = outcome.chunks,
                    committed_rows = outcome.rows,
                    "chunk insert failed"
                );
                return Err(e);
            }
            outcome.chunks += 1;
            outcome.rows += chunk.len();
        }

        Ok(outcome)
    }

    async fn truncate(&self) -> Result<u64> {
        let result = sqlx::query(&self.table.truncate())
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(result.rows_affected())
    }

    async fn row_count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as(&self.table.count_rows())
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(count.0)
    }

    async fn fetch_counts(&self, sql: &str) -> Result<DistinctCounts> {
        let counts = sqlx::query_as::<_, DistinctCounts>(sql)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(counts)
    }

    async fn fetch_country_revenue(&self, sql: &str) -> Result<Vec<CountryRevenue>> {
        let rows = sqlx::query_as::<_, CountryRevenue>(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(rows)
    }

    async fn fetch_product_revenue(&self, sql: &str) -> Result<Vec<ProductRevenue>> {
        let rows = sqlx::query_as::<_, ProductRevenue>(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(rows)
    }
}
