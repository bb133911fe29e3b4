pub mod result_set;

pub use result_set::{MemoryRow, MemoryRows, ResultSet};

use crate::error::SourceError;
use crate::value::Value;

/// A multi-row cursor supplied by the query layer.
pub trait SqlRows {
    /// Advances to the next row. Returns false once the cursor is exhausted
    /// or has terminated with an error.
    fn next(&mut self) -> bool;

    /// Fills `slots` with the current row, one value per column.
    fn scan(&mut self, slots: &mut [Value]) -> Result<(), SourceError>;

    fn columns(&mut self) -> Result<Vec<String>, SourceError>;

    /// Releases the cursor. Repeated calls behave as the implementation defines.
    fn close(&mut self) -> Result<(), SourceError>;
}

/// A reader over exactly one row.
pub trait SqlRow {
    fn scan(&mut self, slots: &mut [Value]) -> Result<(), SourceError>;
    fn columns(&mut self) -> Result<Vec<String>, SourceError>;
}

impl<T: SqlRows + ?Sized> SqlRows for &mut T {
    fn next(&mut self) -> bool {
        (**self).next()
    }

    fn scan(&mut self, slots: &mut [Value]) -> Result<(), SourceError> {
        (**self).scan(slots)
    }

    fn columns(&mut self) -> Result<Vec<String>, SourceError> {
        (**self).columns()
    }

    fn close(&mut self) -> Result<(), SourceError> {
        (**self).close()
    }
}

impl<T: SqlRow + ?Sized> SqlRow for &mut T {
    fn scan(&mut self, slots: &mut [Value]) -> Result<(), SourceError> {
        (**self).scan(slots)
    }

    fn columns(&mut self) -> Result<Vec<String>, SourceError> {
        (**self).columns()
    }
}

impl<T: SqlRows + ?Sized> SqlRows for Box<T> {
    fn next(&mut self) -> bool {
        (**self).next()
    }

    fn scan(&mut self, slots: &mut [Value]) -> Result<(), SourceError> {
        (**self).scan(slots)
    }

    fn columns(&mut self) -> Result<Vec<String>, SourceError> {
        (**self).columns()
    }

    fn close(&mut self) -> Result<(), SourceError> {
        (**self).close()
    }
}

impl<T: SqlRow + ?Sized> SqlRow for Box<T> {
    fn scan(&mut self, slots: &mut [Value]) -> Result<(), SourceError> {
        (**self).scan(slots)
    }

    fn columns(&mut self) -> Result<Vec<String>, SourceError> {
        (**self).columns()
    }
}
