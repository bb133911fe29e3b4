#![allow(dead_code)]

use rowscan::{SourceError, SqlRow, SqlRows, Value};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("driver error: {0}")]
pub struct DriverError(pub String);

/// Cursor over scripted rows that records every call made to it.
#[derive(Debug, Default)]
pub struct ScriptedRows {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
    pub fail_columns: bool,
    pub fail_scan_at: Option<usize>,
    pub position: usize,
    pub columns_calls: usize,
    pub next_calls: usize,
    pub scan_calls: usize,
    pub close_calls: usize,
}

impl ScriptedRows {
    pub fn new(columns: &[&str], rows: Vec<Vec<Value>>) -> Self {
        ScriptedRows {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
            ..Default::default()
        }
    }

    pub fn touched(&self) -> bool {
        self.columns_calls + self.next_calls + self.scan_calls + self.close_calls > 0
    }
}

impl SqlRows for ScriptedRows {
    fn next(&mut self) -> bool {
        self.next_calls += 1;
        if self.position < self.rows.len() {
            self.position += 1;
            true
        } else {
            false
        }
    }

    fn scan(&mut self, slots: &mut [Value]) -> Result<(), SourceError> {
        self.scan_calls += 1;
        let row = self.position - 1;
        if self.fail_scan_at == Some(row) {
            return Err(DriverError(format!("bad row {}", row)).into());
        }
        slots.clone_from_slice(&self.rows[row]);
        Ok(())
    }

    fn columns(&mut self) -> Result<Vec<String>, SourceError> {
        self.columns_calls += 1;
        if self.fail_columns {
            return Err(DriverError("columns unavailable".to_string()).into());
        }
        Ok(self.columns.clone())
    }

    fn close(&mut self) -> Result<(), SourceError> {
        self.close_calls += 1;
        if self.close_calls > 1 {
            return Err(DriverError("already closed".to_string()).into());
        }
        Ok(())
    }
}

/// Single-row reader with the same call accounting as [`ScriptedRows`].
#[derive(Debug, Default)]
pub struct ScriptedRow {
    pub columns: Vec<String>,
    pub values: Vec<Value>,
    pub fail_columns: bool,
    pub fail_scan: bool,
    pub columns_calls: usize,
    pub scan_calls: usize,
}

impl ScriptedRow {
    pub fn new(columns: &[&str], values: Vec<Value>) -> Self {
        ScriptedRow {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            values,
            ..Default::default()
        }
    }

    pub fn touched(&self) -> bool {
        self.columns_calls + self.scan_calls > 0
    }
}

impl SqlRow for ScriptedRow {
    fn scan(&mut self, slots: &mut [Value]) -> Result<(), SourceError> {
        self.scan_calls += 1;
        if self.fail_scan {
            return Err(DriverError("row unreadable".to_string()).into());
        }
        slots.clone_from_slice(&self.values);
        Ok(())
    }

    fn columns(&mut self) -> Result<Vec<String>, SourceError> {
        self.columns_calls += 1;
        if self.fail_columns {
            return Err(DriverError("columns unavailable".to_string()).into());
        }
        Ok(self.columns.clone())
    }
}

rowscan::record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct Tester {
        pub likes: i32 => "likes",
        pub dislikes: i32 => "dislikes",
        pub day: String => "day",
    }
}

impl Tester {
    pub fn new(likes: i32, dislikes: i32, day: &str) -> Self {
        Tester {
            likes,
            dislikes,
            day: day.to_string(),
        }
    }
}

pub const TESTER_COLUMNS: [&str; 3] = ["likes", "dislikes", "day"];

pub fn tester_row(likes: i32, dislikes: i32, day: &str) -> Vec<Value> {
    vec![likes.into(), dislikes.into(), day.into()]
}
