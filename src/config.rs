use std::env;
use std::time::Duration;

use crate::db::TransactionTable;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database_url: String,
    /// Account label shown alongside dashboard results.
    pub warehouse_account: String,
    pub transactions_table: String,
    pub load_chunk_size: usize,
    pub query_cache_ttl: Duration,
    pub max_upload_bytes: Option<usize>,
    pub admin_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        let transactions_table =
            env::var("TRANSACTIONS_TABLE").unwrap_or_else(|_| TransactionTable::DEFAULT_NAME.to_string());
        if !is_plain_identifier(&transactions_table) {
            return Err(ConfigError::InvalidTableName(transactions_table));
        }

        let load_chunk_size = check_chunk_size(parse_var("LOAD_CHUNK_SIZE", "500")?)?;

        let max_upload_bytes = match env::var("MAX_UPLOAD_BYTES") {
            Ok(raw) => Some(
                raw.parse()
                    .map_err(|_| ConfigError::InvalidNumber("MAX_UPLOAD_BYTES"))?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidPort)?,
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://data/warehouse.db".to_string()),
            warehouse_account: env::var("WAREHOUSE_ACCOUNT").unwrap_or_else(|_| "local".to_string()),
            transactions_table,
            load_chunk_size,
            query_cache_ttl: Duration::from_secs(parse_var("QUERY_CACHE_TTL_SECS", "600")?),
            max_upload_bytes,
            admin_api_key: env::var("ADMIN_API_KEY").ok().filter(|key| !key.is_empty()),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: &str) -> Result<T, ConfigError> {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|_| ConfigError::InvalidNumber(name))
}

/// A chunk is one INSERT, so its bound values must stay under SQLite's limit.
pub fn check_chunk_size(rows: usize) -> Result<usize, ConfigError> {
    if rows == 0 {
        return Err(ConfigError::InvalidNumber("LOAD_CHUNK_SIZE"));
    }
    if rows > TransactionTable::MAX_CHUNK_ROWS {
        return Err(ConfigError::ChunkTooLarge(rows, TransactionTable::MAX_CHUNK_ROWS));
    }
    Ok(rows)
}

/// Table names are interpolated into SQL, so only `[A-Za-z_][A-Za-z0-9_]*` passes.
pub fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,
    #[error("{0} must be a valid number")]
    InvalidNumber(&'static str),
    #[error("LOAD_CHUNK_SIZE {0} exceeds the maximum of {1} rows")]
    ChunkTooLarge(usize, usize),
    #[error("Invalid table name: {0}")]
    InvalidTableName(String),
}
