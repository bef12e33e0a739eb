use std::sync::Arc;

use crate::{
    config::Config,
    db::Warehouse,
    services::{Aggregator, Loader, SchemaValidator},
};

pub mod admin;
pub mod dashboard;
pub mod pages;
pub mod upload;

/// Shared state for every handler. The warehouse handle inside is created
/// once at startup.
#[derive(Clone)]
pub struct AppState {
    pub validator: SchemaValidator,
    pub loader: Arc<Loader>,
    pub aggregator: Arc<Aggregator>,
    pub admin_api_key: Option<Arc<str>>,
}

impl AppState {
    pub fn new(warehouse: Arc<dyn Warehouse>, config: &Config) -> Self {
        Self {
            validator: SchemaValidator::new(),
            loader: Arc::new(Loader::new(warehouse.clone(), config.load_chunk_size)),
            aggregator: Arc::new(Aggregator::new(
                warehouse,
                config.query_cache_ttl,
                config.warehouse_account.clone(),
            )),
            admin_api_key: config.admin_api_key.as_deref().map(Arc::from),
        }
    }
}
