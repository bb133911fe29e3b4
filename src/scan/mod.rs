pub(crate) mod binder;
pub mod config;
pub mod registry;
pub mod row;
pub mod rows;

pub use config::{MissingColumn, ScanConfig};
pub use registry::ColumnRegistry;
pub use row::Row;
pub use rows::Rows;
