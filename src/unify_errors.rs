use thiserror::Error;

/// Crate-wide error type for trajectory format unification.
///
/// The variants fall into three families, all fatal to the conversion of the
/// current file:
///
/// * **Configuration** – the caller's column selection is unusable
///   ([`MissingColumn`](UnifyError::MissingColumn),
///   [`ColumnOutOfBounds`](UnifyError::ColumnOutOfBounds)). Raised before any
///   input row is touched and before any output file is created.
/// * **Ingestion** – the raw source is malformed, empty, or missing expected
///   structure. Messages carry the file path and, for text sources, the
///   one-based line number of the offending row.
/// * **Not found** – an experiment identifier has no registry entry. Unknown
///   keys are a hard failure, never a silent default.
#[derive(Error, Debug)]
pub enum UnifyError {
    #[error("missing mandatory column '{0}' in the column selection")]
    MissingColumn(&'static str),

    #[error("column index {index} for '{field}' is out of bounds for a table with {width} columns")]
    ColumnOutOfBounds {
        field: &'static str,
        index: usize,
        width: usize,
    },

    #[error("trajectory source {path} contains no data rows")]
    EmptySource { path: String },

    #[error("{path}:{line}: expected {expected} fields per row, found {found}")]
    RaggedRow {
        path: String,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("{path}:{line}: cannot parse '{token}' as a number")]
    NonNumericCell {
        path: String,
        line: usize,
        token: String,
    },

    #[error("relational source {path}: {source}")]
    RelationalSource {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("unable to write unified output: {0}")]
    CsvError(#[from] csv::Error),

    #[error("no experiment registered under '{0}'")]
    UnknownExperiment(String),
}
