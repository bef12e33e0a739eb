use crate::models::{ColumnType, TRANSACTION_SCHEMA};

/// Provides SQL for the warehouse table that accumulates uploaded transactions.
#[derive(Debug, Clone)]
pub struct TransactionTable {
    name: String,
}

impl TransactionTable {
    /// Default name of the database table
    pub const DEFAULT_NAME: &'static str = "transactions";

    /// Most rows one multi-row INSERT can bind under SQLite's 32766
    /// variable limit.
    pub const MAX_CHUNK_ROWS: usize = 32766 / TRANSACTION_SCHEMA.len();

    /// `name` must already be a plain SQL identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Comma separated column names, in schema order.
    pub fn column_list() -> String {
        TRANSACTION_SCHEMA
            .iter()
            .map(|spec| spec.name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// SQL statement for creating the table if it does not exist yet.
    ///
    /// The table has no key, so loading the same file twice stores every row
    /// twice.
    pub fn create_table(&self) -> String {
        let columns: Vec<String> = TRANSACTION_SCHEMA
            .iter()
            .map(|spec| {
                let sql_type = match spec.column_type {
                    ColumnType::Text => "TEXT",
                    ColumnType::Integer => "INTEGER",
                    ColumnType::Decimal => "REAL",
                };
                if spec.nullable {
                    format!("{} {}", spec.name, sql_type)
                } else {
                    format!("{} {} NOT NULL", spec.name, sql_type)
                }
            })
            .collect();

        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
            self.name,
            columns.join(",\n    ")
        )
    }

    pub fn insert_prefix(&self) -> String {
        format!("INSERT INTO {} ({}) ", self.name, Self::column_list())
    }

    pub fn truncate(&self) -> String {
        format!("DELETE FROM {}", self.name)
    }

    pub fn count_rows(&self) -> String {
        format!("SELECT COUNT(*) FROM {}", self.name)
    }
}
