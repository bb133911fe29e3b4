pub mod descriptor;
mod macros;

pub use descriptor::{ColumnTag, FieldBinding, RecordDescriptor, Setter};

/// A typed shape that rows can be bound into.
///
/// `descriptor` is called once per scan; implementations build it fresh each
/// time. Most records are declared with [`record!`](crate::record!), which
/// generates this impl together with the struct.
pub trait Record: Default {
    fn descriptor() -> RecordDescriptor<Self>;
}
