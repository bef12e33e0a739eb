use anyhow::Result;
use sqlx::{Pool, Sqlite, migrate::MigrateDatabase, sqlite::SqlitePoolOptions};
use std::time::Duration;

pub mod transaction_store;
pub mod transaction_table;
pub mod warehouse;

pub use transaction_store::TransactionStore;
pub use transaction_table::TransactionTable;
pub use warehouse::Warehouse;

pub type DbPool = Pool<Sqlite>;

/// Initialize the database connection pool
pub async fn init_db_pool(database_url: &str, table: &TransactionTable) -> Result<DbPool> {
    // Create the database if it doesn't exist
    if !Sqlite::database_exists(database_url).await.unwrap_or(false) {
        create_parent_dir(database_url)?;
        Sqlite::create_database(database_url).await?;
    }

    // Create connection pool
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(3))
        .connect(database_url)
        .await?;

    setup_database(&pool, table).await?;

    Ok(pool)
}

/// Create the transactions table once, when the connection is initialized
async fn setup_database(pool: &DbPool, table: &TransactionTable) -> Result<()> {
    sqlx::query(&table.create_table()).execute(pool).await?;
    tracing::info!(table = table.name(), "transactions table ready");

    Ok(())
}

/// SQLite won't create missing directories for a file database.
fn create_parent_dir(database_url: &str) -> Result<()> {
    let path = database_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:");
    let path = path.split('?').next().unwrap_or(path);

    if let Some(parent) = std::path::Path::new(path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    Ok(())
}
