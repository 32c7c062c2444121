//! # Canonical trajectory writer
//!
//! Writes a [`CanonicalTrajectoryTable`] as a tab-delimited text file:
//! a `#id  fr  x  y  z` header line, then one record per observation with
//! `id` and `fr` rendered as integers and the coordinates with four decimal
//! digits, terminated by CRLF. The `#` belongs to the first header field;
//! no comment escaping is applied.
use camino::Utf8Path;
use csv::{Terminator, WriterBuilder};

use crate::constants::{CANONICAL_HEADER, FRAME_COL, ID_COL, X_COL, Y_COL, Z_COL};
use crate::trajectories::CanonicalTrajectoryTable;
use crate::unify_errors::UnifyError;

/// Output helpers for canonical tables.
pub trait CanonicalTableExt {
    /// Write the table to `path` in the unified on-disk format.
    ///
    /// The file is created (or truncated) only when this is called; callers
    /// wanting the no-partial-output guarantee must unify first, then write.
    fn write_unified(&self, path: &Utf8Path) -> Result<(), UnifyError>;
}

impl CanonicalTableExt for CanonicalTrajectoryTable {
    fn write_unified(&self, path: &Utf8Path) -> Result<(), UnifyError> {
        let mut writer = WriterBuilder::new()
            .delimiter(b'\t')
            .terminator(Terminator::CRLF)
            .from_path(path.as_std_path())?;

        writer.write_record(CANONICAL_HEADER)?;
        for row in 0..self.nrows() {
            writer.write_record([
                format!("{}", self[(row, ID_COL)] as i64),
                format!("{}", self[(row, FRAME_COL)] as i64),
                format!("{:.4}", self[(row, X_COL)]),
                format!("{:.4}", self[(row, Y_COL)]),
                format!("{:.4}", self[(row, Z_COL)]),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }
}
