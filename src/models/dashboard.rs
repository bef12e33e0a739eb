use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Distinct invoice, product and country counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct DistinctCounts {
    pub invoices: i64,
    pub products: i64,
    pub countries: i64,
}

/// Revenue of one country, with its share of the total for the pie chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CountryRevenue {
    pub country: String,
    pub revenue: f64,
    #[sqlx(default)]
    pub share_percent: f64,
}

/// Revenue of one product description, for the bar chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ProductRevenue {
    pub description: String,
    pub revenue: f64,
}

/// Result of appending an upload to the warehouse table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadOutcome {
    pub success: bool,
    pub chunks: usize,
    pub rows: usize,
}

/// Everything the dashboard page shows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    pub account: String,
    pub table: String,
    pub metrics: DistinctCounts,
    pub revenue_by_country: Vec<CountryRevenue>,
    pub top_products: Vec<ProductRevenue>,
    pub generated_at: DateTime<Utc>,
}
