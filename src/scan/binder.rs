use crate::error::BindResult;
use crate::record::RecordDescriptor;
use crate::value::Value;

/// Builds one record from a single row of values.
///
/// `lookup` resolves a column name to the row's value. Bound fields are
/// assigned in declaration order; a column that `lookup` cannot resolve leaves
/// the field at its default, since the column set has already been checked
/// against the configured missing-column policy.
pub(crate) fn bind_record<'v, R, F>(descriptor: &RecordDescriptor<R>, row: usize, lookup: F) -> BindResult<R>
where
    R: Default,
    F: Fn(&str) -> Option<&'v Value>,
{
    let mut record = R::default();
    for (binding, column) in descriptor.bound_fields() {
        if let Some(value) = lookup(column) {
            binding.assign(&mut record, column, row, value)?;
        }
    }
    Ok(record)
}
