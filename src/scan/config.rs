/// What to do with a tagged field whose column is absent from the result.
///
/// The default is `Fail`: a scan reports `BindError::MissingColumn` rather
/// than leaving the field at its default value. `Skip` restores the lenient
/// behaviour where an unmatched field keeps its default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingColumn {
    #[default]
    Fail,
    /// Leave the field at its default value.
    Skip,
}

#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    pub missing_column: MissingColumn,
    pub max_rows: Option<usize>,
}

impl ScanConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn missing_column(mut self, policy: MissingColumn) -> Self {
        self.missing_column = policy;
        self
    }

    pub fn max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = Some(max_rows);
        self
    }
}
