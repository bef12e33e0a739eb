use async_trait::async_trait;

use crate::{
    error::Result,
    models::{CountryRevenue, DistinctCounts, LoadOutcome, ProductRevenue, TransactionRecord},
};

/// The persistent table uploads accumulate in.
///
/// Handlers only see this trait; the server wires in [`super::TransactionStore`].
#[async_trait]
pub trait Warehouse: Send + Sync {
    /// Name of the table rows are appended to and queried from
    fn table(&self) -> &str;

    /// Append `records` in chunks of `chunk_size` rows, each chunk committed
    /// on its own. An error leaves the chunks before it in place.
    async fn append(&self, records: &[TransactionRecord], chunk_size: usize) -> Result<LoadOutcome>;

    /// Delete every row, returning how many were removed
    async fn truncate(&self) -> Result<u64>;

    async fn row_count(&self) -> Result<i64>;

    async fn fetch_counts(&self, sql: &str) -> Result<DistinctCounts>;

    async fn fetch_country_revenue(&self, sql: &str) -> Result<Vec<CountryRevenue>>;

    async fn fetch_product_revenue(&self, sql: &str) -> Result<Vec<ProductRevenue>>;
}
