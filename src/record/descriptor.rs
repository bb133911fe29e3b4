use std::collections::HashSet;

use crate::error::{BindError, BindResult};
use crate::scan::config::{MissingColumn, ScanConfig};
use crate::value::{ConversionError, Value};

/// Assigns a converted column value into one field of a record.
pub type Setter<R> = fn(&mut R, &Value) -> Result<(), ConversionError>;

/// Column tag declared on a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnTag {
    Column(&'static str),
    /// Field is excluded from binding and keeps its default value.
    Ignore,
    Untagged,
}

pub struct FieldBinding<R> {
    field: &'static str,
    tag: ColumnTag,
    setter: Option<Setter<R>>,
}

impl<R> FieldBinding<R> {
    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn tag(&self) -> ColumnTag {
        self.tag
    }

    /// Column this field reads from, if it takes part in binding.
    pub fn column(&self) -> Option<&'static str> {
        match self.tag {
            ColumnTag::Column(column) => Some(column),
            ColumnTag::Ignore | ColumnTag::Untagged => None,
        }
    }

    pub(crate) fn assign(&self, record: &mut R, column: &'static str, row: usize, value: &Value) -> BindResult<()> {
        let Some(setter) = self.setter else {
            return Ok(());
        };
        setter(record, value).map_err(|e| BindError::TypeMismatch {
            field: self.field,
            column,
            row,
            expected: e.expected,
            found: e.found,
        })
    }
}

/// Field-to-column bindings of a record type, in field declaration order.
pub struct RecordDescriptor<R> {
    record: &'static str,
    fields: Vec<FieldBinding<R>>,
}

impl<R> RecordDescriptor<R> {
    pub fn new(record: &'static str) -> Self {
        RecordDescriptor {
            record,
            fields: Vec::new(),
        }
    }

    pub fn bind(mut self, field: &'static str, column: &'static str, setter: Setter<R>) -> Self {
        self.add_field(field, ColumnTag::Column(column), Some(setter));
        self
    }

    pub fn ignore(mut self, field: &'static str) -> Self {
        self.add_field(field, ColumnTag::Ignore, None);
        self
    }

    pub fn untagged(mut self, field: &'static str) -> Self {
        self.add_field(field, ColumnTag::Untagged, None);
        self
    }

    pub fn add_field(&mut self, field: &'static str, tag: ColumnTag, setter: Option<Setter<R>>) {
        self.fields.push(FieldBinding { field, tag, setter });
    }

    pub fn record(&self) -> &'static str {
        self.record
    }

    pub fn fields(&self) -> &[FieldBinding<R>] {
        &self.fields
    }

    /// Fields that take part in binding, paired with their column.
    pub fn bound_fields(&self) -> impl Iterator<Item = (&FieldBinding<R>, &'static str)> {
        self.fields.iter().filter_map(|f| f.column().map(|c| (f, c)))
    }

    /// Every field must either name a column or be explicitly ignored.
    pub fn validate(&self) -> BindResult<()> {
        for binding in &self.fields {
            let reason = match binding.tag {
                ColumnTag::Untagged => format!("field '{}' has no column tag", binding.field),
                ColumnTag::Column("") => format!("field '{}' has an empty column tag", binding.field),
                ColumnTag::Column(_) if binding.setter.is_none() => {
                    format!("field '{}' has no setter", binding.field)
                }
                _ => continue,
            };
            return Err(BindError::InvalidDestination {
                record: self.record,
                reason,
            });
        }
        Ok(())
    }

    /// Checks a cursor's column set against the bound fields.
    pub fn check_columns(&self, columns: &[String], config: &ScanConfig) -> BindResult<()> {
        let mut seen = HashSet::with_capacity(columns.len());
        for column in columns {
            if !seen.insert(column.as_str()) {
                return Err(BindError::DuplicateColumn(column.clone()));
            }
        }

        for (binding, column) in self.bound_fields() {
            if seen.contains(column) {
                continue;
            }
            match config.missing_column {
                MissingColumn::Fail => {
                    return Err(BindError::MissingColumn {
                        field: binding.field,
                        column,
                    });
                }
                MissingColumn::Skip => {
                    tracing::warn!(
                        record = self.record,
                        field = binding.field,
                        column,
                        "column missing from result, field keeps its default"
                    );
                }
            }
        }
        Ok(())
    }
}
