pub mod aggregator;
pub mod loader;
pub mod query_cache;
pub mod validator;

pub use aggregator::Aggregator;
pub use loader::Loader;
pub use validator::SchemaValidator;
