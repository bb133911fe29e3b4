use thiserror::Error;

use crate::cursor::{SqlRow, SqlRows};
use crate::error::{BindError, BindResult, SourceError};
use crate::value::Value;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoryCursorError {
    #[error("cursor is closed")]
    Closed,

    #[error("no current row")]
    NoCurrentRow,

    #[error("expected {expected} slots, got {found}")]
    SlotCount { expected: usize, found: usize },
}

/// An owned snapshot of a query result: column names plus row-major values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl ResultSet {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ResultSet {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Value>) -> BindResult<()> {
        if row.len() != self.columns.len() {
            return Err(BindError::RowWidth {
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn with_row(mut self, row: Vec<Value>) -> BindResult<Self> {
        self.push_row(row)?;
        Ok(self)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Drains `cursor` into a result set. The cursor is not closed.
    pub fn capture<C: SqlRows + ?Sized>(cursor: &mut C) -> BindResult<Self> {
        let mut set = ResultSet::new(cursor.columns().map_err(BindError::Cursor)?);
        while cursor.next() {
            let mut slots = vec![Value::Null; set.columns.len()];
            cursor.scan(&mut slots).map_err(|source| BindError::Scan {
                row: set.rows.len(),
                source,
            })?;
            set.rows.push(slots);
        }
        Ok(set)
    }

    pub fn capture_row<S: SqlRow + ?Sized>(reader: &mut S) -> BindResult<Self> {
        let mut set = ResultSet::new(reader.columns().map_err(BindError::Cursor)?);
        let mut slots = vec![Value::Null; set.columns.len()];
        reader
            .scan(&mut slots)
            .map_err(|source| BindError::Scan { row: 0, source })?;
        set.rows.push(slots);
        Ok(set)
    }

    /// A cursor over a copy of this result set.
    pub fn rows(&self) -> MemoryRows {
        self.clone().into_rows()
    }

    pub fn into_rows(self) -> MemoryRows {
        MemoryRows {
            set: self,
            position: None,
            closed: false,
        }
    }

    pub fn row(&self, index: usize) -> Option<MemoryRow> {
        self.rows.get(index).map(|values| MemoryRow {
            columns: self.columns.clone(),
            values: values.clone(),
        })
    }
}

/// In-memory multi-row cursor. Closing is idempotent.
#[derive(Debug, Clone)]
pub struct MemoryRows {
    set: ResultSet,
    position: Option<usize>,
    closed: bool,
}

impl MemoryRows {
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn current(&self) -> Result<&[Value], MemoryCursorError> {
        if self.closed {
            return Err(MemoryCursorError::Closed);
        }
        self.position
            .and_then(|pos| self.set.rows.get(pos))
            .map(Vec::as_slice)
            .ok_or(MemoryCursorError::NoCurrentRow)
    }
}

impl SqlRows for MemoryRows {
    fn next(&mut self) -> bool {
        if self.closed {
            return false;
        }
        let next = self.position.map_or(0, |pos| pos + 1);
        if next < self.set.rows.len() {
            self.position = Some(next);
            true
        } else {
            self.position = Some(self.set.rows.len());
            false
        }
    }

    fn scan(&mut self, slots: &mut [Value]) -> Result<(), SourceError> {
        let row = self.current()?;
        fill_slots(row, slots)
    }

    fn columns(&mut self) -> Result<Vec<String>, SourceError> {
        if self.closed {
            return Err(MemoryCursorError::Closed.into());
        }
        Ok(self.set.columns.clone())
    }

    fn close(&mut self) -> Result<(), SourceError> {
        self.closed = true;
        Ok(())
    }
}

/// In-memory single-row reader.
#[derive(Debug, Clone)]
pub struct MemoryRow {
    columns: Vec<String>,
    values: Vec<Value>,
}

impl SqlRow for MemoryRow {
    fn scan(&mut self, slots: &mut [Value]) -> Result<(), SourceError> {
        fill_slots(&self.values, slots)
    }

    fn columns(&mut self) -> Result<Vec<String>, SourceError> {
        Ok(self.columns.clone())
    }
}

fn fill_slots(row: &[Value], slots: &mut [Value]) -> Result<(), SourceError> {
    if row.len() != slots.len() {
        return Err(MemoryCursorError::SlotCount {
            expected: row.len(),
            found: slots.len(),
        }
        .into());
    }
    slots.clone_from_slice(row);
    Ok(())
}
