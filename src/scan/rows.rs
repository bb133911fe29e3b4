use tracing::{debug, trace};

use crate::cursor::SqlRows;
use crate::error::{BindError, BindResult};
use crate::record::Record;
use crate::scan::binder::bind_record;
use crate::scan::config::ScanConfig;
use crate::scan::registry::ColumnRegistry;
use crate::value::Value;

/// Wraps a multi-row cursor so its rows can be scanned into records.
///
/// The cursor is only released by [`Rows::close`]; dropping a `Rows` leaves
/// it open.
pub struct Rows<C> {
    rows: C,
    config: ScanConfig,
}

impl<C: SqlRows> Rows<C> {
    pub fn new(rows: C) -> Self {
        Self::with_config(rows, ScanConfig::new())
    }

    pub fn with_config(rows: C, config: ScanConfig) -> Self {
        Rows { rows, config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn into_inner(self) -> C {
        self.rows
    }

    /// Reads every remaining row and appends one record per row to `dest`,
    /// in cursor order. Existing elements of `dest` are kept.
    ///
    /// `dest` is only extended once the cursor is exhausted, so cursor
    /// failures leave it untouched. A type mismatch stops the scan; records
    /// bound before the failing row stay appended.
    pub fn scan_to_struct_slice<R: Record>(&mut self, dest: &mut Vec<R>) -> BindResult<()> {
        let descriptor = R::descriptor();
        descriptor.validate()?;

        let columns = self.rows.columns().map_err(BindError::Cursor)?;
        descriptor.check_columns(&columns, &self.config)?;
        debug!(record = descriptor.record(), columns = columns.len(), "scanning rows");

        let mut registry = ColumnRegistry::new(&columns);
        while self.rows.next() {
            let row = registry.row_count();
            if let Some(max_rows) = self.config.max_rows {
                if row >= max_rows {
                    return Err(BindError::TooManyRows(max_rows));
                }
            }

            let mut slots = vec![Value::Null; columns.len()];
            self.rows
                .scan(&mut slots)
                .map_err(|source| BindError::Scan { row, source })?;
            trace!(row, "fetched row");
            registry.push_row(&columns, slots);
        }

        let rows = registry.row_count();
        dest.reserve(rows);
        for row in 0..rows {
            let record = bind_record(&descriptor, row, |column| registry.get(column, row))?;
            dest.push(record);
        }

        debug!(record = descriptor.record(), rows, "rows scanned");
        Ok(())
    }

    pub fn close(&mut self) -> BindResult<()> {
        self.rows.close().map_err(BindError::Close)
    }
}
