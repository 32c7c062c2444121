//! # Delimited-text trajectory reader
//!
//! Parses a plain-text trajectory recording into a dense
//! [`RawTrajectoryTable`]. The first line is always treated as a header and
//! discarded; every remaining non-blank line must contain the same number of
//! numeric fields.
//!
//! ## Delimiters
//! -----------------
//! [`Delimiter::Whitespace`] splits on any run of ASCII whitespace (the
//! common case for `.txt` recordings); [`Delimiter::Char`] splits on a single
//! separator character, trimming surrounding whitespace from each field.
//!
//! ## Error Handling
//! -----------------
//! The reader is fail-fast: the first ragged row or unparsable cell aborts
//! ingestion with an [`UnifyError`] carrying the path and the one-based line
//! number. A file with no data rows after the header is rejected as
//! [`UnifyError::EmptySource`].
use camino::Utf8Path;
use nalgebra::DMatrix;

use crate::trajectories::RawTrajectoryTable;
use crate::unify_errors::UnifyError;

/// Field separator of a delimited trajectory file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// Split on any run of ASCII whitespace.
    Whitespace,
    /// Split on a single separator character (e.g. `','` or `';'`).
    Char(char),
}

impl Delimiter {
    /// Split one line into trimmed fields.
    ///
    /// For [`Delimiter::Char`], empty fields are kept: a missing cell must
    /// reach the numeric parser and fail there, not silently shift the
    /// columns of its row.
    fn split(self, line: &str) -> Vec<&str> {
        match self {
            Delimiter::Whitespace => line.split_whitespace().collect(),
            Delimiter::Char(sep) => line.split(sep).map(str::trim).collect(),
        }
    }
}

/// Read a delimited trajectory file into a dense raw table.
///
/// The first line is discarded as a header. Blank lines are skipped. The
/// width of the table is fixed by the first data row; every later row must
/// match it.
///
/// Arguments
/// -----------------
/// * `path` – Path to the trajectory file.
/// * `delimiter` – Field separator used by the recording.
///
/// Return
/// ----------
/// * A `RawTrajectoryTable` with one row per observation, or an
///   [`UnifyError`] describing the first malformed row.
pub(crate) fn extract_delimited(
    path: &Utf8Path,
    delimiter: Delimiter,
) -> Result<RawTrajectoryTable, UnifyError> {
    let content = std::fs::read_to_string(path)?;

    let mut values: Vec<f64> = Vec::new();
    let mut width = 0usize;
    let mut nrows = 0usize;

    // Line numbers are one-based; enumerate().skip(1) drops the header line.
    for (line_idx, line) in content.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        let fields = delimiter.split(line);
        if width == 0 {
            width = fields.len();
        } else if fields.len() != width {
            return Err(UnifyError::RaggedRow {
                path: path.to_string(),
                line: line_idx + 1,
                expected: width,
                found: fields.len(),
            });
        }
        for token in fields {
            values.push(token.parse().map_err(|_| UnifyError::NonNumericCell {
                path: path.to_string(),
                line: line_idx + 1,
                token: token.to_string(),
            })?);
        }
        nrows += 1;
    }

    if nrows == 0 || width == 0 {
        return Err(UnifyError::EmptySource {
            path: path.to_string(),
        });
    }

    Ok(DMatrix::from_row_iterator(nrows, width, values))
}
