use std::collections::HashMap;

use crate::value::Value;

/// Column-major storage of every row read during a slice scan.
///
/// Entry `i` of each column's values belongs to source row `i`.
#[derive(Debug, Default)]
pub struct ColumnRegistry {
    values: HashMap<String, Vec<Value>>,
    rows: usize,
}

impl ColumnRegistry {
    pub fn new(columns: &[String]) -> Self {
        let values = columns
            .iter()
            .map(|c| (c.clone(), Vec::new()))
            .collect();
        ColumnRegistry { values, rows: 0 }
    }

    /// Appends one row; `row` is aligned with `columns`. Columns the registry
    /// was not created with are dropped.
    pub fn push_row(&mut self, columns: &[String], row: Vec<Value>) {
        for (column, value) in columns.iter().zip(row) {
            if let Some(values) = self.values.get_mut(column.as_str()) {
                values.push(value);
            }
        }
        self.rows += 1;
    }

    pub fn get(&self, column: &str, row: usize) -> Option<&Value> {
        self.values.get(column).and_then(|values| values.get(row))
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }
}
