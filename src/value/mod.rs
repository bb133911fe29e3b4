pub mod column_value;
pub mod from_value;

pub use column_value::Value;
pub use from_value::{ConversionError, FromValue};
