pub mod cursor;
pub mod error;
pub mod record;
pub mod scan;
pub mod value;

pub use crate::cursor::{ResultSet, SqlRow, SqlRows};
pub use crate::error::{BindError, BindResult, SourceError};
pub use crate::record::{ColumnTag, Record, RecordDescriptor, Setter};
pub use crate::scan::{MissingColumn, Row, Rows, ScanConfig};
pub use crate::value::{ConversionError, FromValue, Value};
