use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

mod config;
mod db;
mod error;
mod handlers;
mod models;
mod parser;
mod routes;
mod services;


use crate::{
    config::Config,
    db::{TransactionStore, TransactionTable, Warehouse},
    handlers::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("spreadsheet_loader=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let table = TransactionTable::new(config.transactions_table.clone());
    let pool = db::init_db_pool(&config.database_url, &table).await?;
    let warehouse: Arc<dyn Warehouse> = Arc::new(TransactionStore::new(pool.clone(), table));

    let state = AppState::new(warehouse, &config);
    let app = routes::router(state, config.max_upload_bytes);

    let listener = TcpListener::bind(config.server_addr()).await?;
    tracing::info!(
        account = %config.warehouse_account,
        table = %config.transactions_table,
        "Server listening on {}",
        config.server_addr()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
