use std::collections::HashMap;

use tracing::debug;

use crate::cursor::SqlRow;
use crate::error::{BindError, BindResult};
use crate::record::Record;
use crate::scan::binder::bind_record;
use crate::scan::config::ScanConfig;
use crate::value::Value;

/// Wraps a single-row reader so its row can be scanned into a record.
pub struct Row<S> {
    row: S,
    config: ScanConfig,
}

impl<S: SqlRow> Row<S> {
    pub fn new(row: S) -> Self {
        Self::with_config(row, ScanConfig::new())
    }

    pub fn with_config(row: S, config: ScanConfig) -> Self {
        Row { row, config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn into_inner(self) -> S {
        self.row
    }

    /// Reads the row and overwrites `dest` with the bound record. On error
    /// `dest` is left as it was.
    pub fn scan_to_struct<R: Record>(&mut self, dest: &mut R) -> BindResult<()> {
        let descriptor = R::descriptor();
        descriptor.validate()?;

        let columns = self.row.columns().map_err(BindError::Cursor)?;
        descriptor.check_columns(&columns, &self.config)?;

        let mut slots = vec![Value::Null; columns.len()];
        self.row
            .scan(&mut slots)
            .map_err(|source| BindError::Scan { row: 0, source })?;

        let values: HashMap<String, Value> = columns.into_iter().zip(slots).collect();
        *dest = bind_record(&descriptor, 0, |column| values.get(column))?;

        debug!(record = descriptor.record(), columns = values.len(), "row scanned");
        Ok(())
    }
}
