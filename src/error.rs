use thiserror::Error;

/// Error produced by a collaborating cursor or row reader. Carried verbatim so
/// callers can downcast to the concrete driver error.
pub type SourceError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum BindError {
    #[error("Invalid destination {record}: {reason}")]
    InvalidDestination { record: &'static str, reason: String },

    #[error("Cursor error: {0}")]
    Cursor(#[source] SourceError),

    #[error("Scan error at row {row}: {source}")]
    Scan {
        row: usize,
        #[source]
        source: SourceError,
    },

    #[error("Type mismatch binding column '{column}' into field '{field}' at row {row}: expected {expected}, found {found}")]
    TypeMismatch {
        field: &'static str,
        column: &'static str,
        row: usize,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    #[error("No column '{column}' for field '{field}'")]
    MissingColumn {
        field: &'static str,
        column: &'static str,
    },

    #[error("Row limit of {0} exceeded")]
    TooManyRows(usize),

    #[error("Row width mismatch: expected {expected} values, found {found}")]
    RowWidth { expected: usize, found: usize },

    #[error("Close error: {0}")]
    Close(#[source] SourceError),
}

pub type BindResult<T> = std::result::Result<T, BindError>;
