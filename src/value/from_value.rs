use super::Value;

/// A value could not be converted into the requested Rust type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionError {
    pub expected: &'static str,
    pub found: &'static str,
}

/// Typed extraction of a field value from a raw column value.
///
/// Conversions are exact: an `Int32` column only converts into `i32`, never
/// into `i64` or `f64`, and text is never parsed into numbers. `Null` only
/// converts into `Option<T>` and `Value`.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Result<Self, ConversionError>;
}

macro_rules! exact_from_value {
    ($ty:ty, $variant:ident, $name:literal) => {
        impl FromValue for $ty {
            fn from_value(value: &Value) -> Result<Self, ConversionError> {
                match value {
                    Value::$variant(v) => Ok(v.clone()),
                    other => Err(ConversionError {
                        expected: $name,
                        found: other.type_name(),
                    }),
                }
            }
        }
    };
}

exact_from_value!(bool, Bool, "bool");
exact_from_value!(i32, Int32, "i32");
exact_from_value!(i64, Int64, "i64");
exact_from_value!(f64, Float64, "f64");
exact_from_value!(String, Text, "text");
exact_from_value!(Vec<u8>, Bytes, "bytes");

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        Ok(value.clone())
    }
}
