pub mod buffer;
pub mod dashboard;
pub mod transaction;

pub use buffer::{Cell, FileKind, TabularBuffer};
pub use dashboard::{CountryRevenue, Dashboard, DistinctCounts, LoadOutcome, ProductRevenue};
pub use transaction::{ColumnSpec, ColumnType, TRANSACTION_SCHEMA, TransactionRecord};
