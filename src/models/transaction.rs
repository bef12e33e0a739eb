use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Primitive type a column must coerce to before it can be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    Text,
    Integer,
    Decimal,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Text => "text",
            ColumnType::Integer => "integer",
            ColumnType::Decimal => "decimal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub column_type: ColumnType,
    /// Empty cells load as NULL instead of failing coercion.
    pub nullable: bool,
}

impl ColumnSpec {
    const fn new(name: &'static str, column_type: ColumnType, nullable: bool) -> Self {
        Self {
            name,
            column_type,
            nullable,
        }
    }
}

/// The fixed column set every upload has to match, in table order.
pub const TRANSACTION_SCHEMA: [ColumnSpec; 8] = [
    ColumnSpec::new("invoice", ColumnType::Text, false),
    ColumnSpec::new("stockcode", ColumnType::Text, false),
    ColumnSpec::new("description", ColumnType::Text, true),
    ColumnSpec::new("quantity", ColumnType::Integer, false),
    ColumnSpec::new("invoicedate", ColumnType::Text, false),
    ColumnSpec::new("price", ColumnType::Decimal, false),
    ColumnSpec::new("customerid", ColumnType::Integer, true),
    ColumnSpec::new("country", ColumnType::Text, false),
];

/// One validated row of an uploaded file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TransactionRecord {
    pub invoice: String,
    pub stockcode: String,
    pub description: Option<String>,
    pub quantity: i64,
    pub invoicedate: String,
    pub price: f64,
    pub customerid: Option<i64>,
    pub country: String,
}
