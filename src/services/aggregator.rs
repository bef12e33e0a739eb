use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crate::{
    db::Warehouse,
    error::Result,
    models::{CountryRevenue, Dashboard, DistinctCounts, ProductRevenue},
    services::query_cache::QueryCache,
};

/// Number of products on the revenue bar chart
pub const TOP_PRODUCTS: usize = 5;

#[derive(Debug, Clone)]
enum QueryResult {
    Counts(DistinctCounts),
    Countries(Vec<CountryRevenue>),
    Products(Vec<ProductRevenue>),
}

/// Runs the fixed dashboard queries, serving repeats from a TTL cache.
pub struct Aggregator {
    warehouse: Arc<dyn Warehouse>,
    cache: QueryCache<QueryResult>,
    account: String,
}

impl Aggregator {
    pub fn new(warehouse: Arc<dyn Warehouse>, ttl: Duration, account: impl Into<String>) -> Self {
        Self {
            warehouse,
            cache: QueryCache::new(ttl),
            account: account.into(),
        }
    }

    pub fn distinct_counts_sql(&self) -> String {
        format!(
            "SELECT COUNT(DISTINCT invoice) AS invoices, \
             COUNT(DISTINCT stockcode) AS products, \
             COUNT(DISTINCT country) AS countries \
             FROM {}",
            self.warehouse.table()
        )
    }

    pub fn revenue_by_country_sql(&self) -> String {
        format!(
            "SELECT country, TOTAL(price * quantity) AS revenue \
             FROM {} GROUP BY country \
             ORDER BY revenue DESC, country ASC",
            self.warehouse.table()
        )
    }

    /// Ties keep the order products were first loaded in.
    pub fn top_products_sql(&self) -> String {
        format!(
            "SELECT description, TOTAL(price * quantity) AS revenue \
             FROM {} WHERE description IS NOT NULL GROUP BY description \
             ORDER BY revenue DESC, MIN(rowid) ASC LIMIT {}",
            self.warehouse.table(),
            TOP_PRODUCTS
        )
    }

    pub async fn distinct_counts(&self) -> Result<DistinctCounts> {
        let sql = self.distinct_counts_sql();
        if let Some(QueryResult::Counts(counts)) = self.cache.get(&sql).await {
            return Ok(counts);
        }

        let generation = self.cache.generation().await;
        let counts = self.warehouse.fetch_counts(&sql).await?;
        self.cache.insert(&sql, QueryResult::Counts(counts), generation).await;
        Ok(counts)
    }

    /// Revenue per country with each country's share of the total, in percent
    pub async fn revenue_by_country(&self) -> Result<Vec<CountryRevenue>> {
        let sql = self.revenue_by_country_sql();
        if let Some(QueryResult::Countries(rows)) = self.cache.get(&sql).await {
            return Ok(rows);
        }

        let generation = self.cache.generation().await;
        let mut rows = self.warehouse.fetch_country_revenue(&sql).await?;
        let total: f64 = rows.iter().map(|row| row.revenue).sum();
        for row in &mut rows {
            row.share_percent = if total != 0.0 {
                row.revenue / total * 100.0
            } else {
                0.0
            };
        }

        self.cache
            .insert(&sql, QueryResult::Countries(rows.clone()), generation)
            .await;
        Ok(rows)
    }

    pub async fn top_products(&self) -> Result<Vec<ProductRevenue>> {
        let sql = self.top_products_sql();
        if let Some(QueryResult::Products(rows)) = self.cache.get(&sql).await {
            return Ok(rows);
        }

        let generation = self.cache.generation().await;
        let rows = self.warehouse.fetch_product_revenue(&sql).await?;
        self.cache
            .insert(&sql, QueryResult::Products(rows.clone()), generation)
            .await;
        Ok(rows)
    }

    pub async fn dashboard(&self) -> Result<Dashboard> {
        Ok(Dashboard {
            account: self.account.clone(),
            table: self.warehouse.table().to_string(),
            metrics: self.distinct_counts().await?,
            revenue_by_country: self.revenue_by_country().await?,
            top_products: self.top_products().await?,
            generated_at: Utc::now(),
        })
    }

    /// Forget cached results; called after every load and truncation
    pub async fn invalidate(&self) {
        self.cache.invalidate().await;
    }
}
