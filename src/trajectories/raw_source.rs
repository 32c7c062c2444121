//! # Raw-table ingestion API
//!
//! The [`RawTableSource`] trait is the public entry point for ingestion. It
//! is implemented for [`RawTrajectoryTable`] and exposes one constructor per
//! adapter plus an extension-dispatching constructor that picks the adapter
//! the way the original conversion driver does: a `.sqlite` extension selects
//! the relational reader, everything else the delimited-text reader.
use camino::Utf8Path;

use super::sqlite_reader::extract_sqlite;
use super::text_reader::{extract_delimited, Delimiter};
use crate::trajectories::RawTrajectoryTable;
use crate::unify_errors::UnifyError;

/// Constructors building a [`RawTrajectoryTable`] from on-disk sources.
///
/// Note
/// ----
/// * No ordering is imposed on the returned rows; ordering is the job of the
///   unification pass
///   ([`normalize`](crate::unification::format::normalize)).
pub trait RawTableSource {
    /// Read a delimited plain-text recording (first line = header, discarded).
    ///
    /// Arguments
    /// ---------
    /// * `path`: path to the trajectory file
    /// * `delimiter`: field separator used by the recording
    ///
    /// Return
    /// ------
    /// * A dense raw table, or an [`UnifyError`] on malformed or empty input.
    fn new_from_text(path: &Utf8Path, delimiter: Delimiter) -> Result<Self, UnifyError>
    where
        Self: Sized;

    /// Read a SQLite capture database through the fixed
    /// `(frame, id, pos_x, pos_y, ori_x, ori_y)` projection.
    ///
    /// Arguments
    /// ---------
    /// * `path`: path to the `.sqlite` capture file
    ///
    /// Return
    /// ------
    /// * A six-column raw table, or an [`UnifyError`] if the expected
    ///   structure is absent.
    fn new_from_sqlite(path: &Utf8Path) -> Result<Self, UnifyError>
    where
        Self: Sized;

    /// Read a recording, choosing the adapter from the file extension.
    ///
    /// A `.sqlite` extension selects [`new_from_sqlite`](Self::new_from_sqlite);
    /// any other extension selects [`new_from_text`](Self::new_from_text) with
    /// the given delimiter.
    fn new_from_path(path: &Utf8Path, delimiter: Delimiter) -> Result<Self, UnifyError>
    where
        Self: Sized;
}

impl RawTableSource for RawTrajectoryTable {
    fn new_from_text(path: &Utf8Path, delimiter: Delimiter) -> Result<Self, UnifyError> {
        extract_delimited(path, delimiter)
    }

    fn new_from_sqlite(path: &Utf8Path) -> Result<Self, UnifyError> {
        extract_sqlite(path)
    }

    fn new_from_path(path: &Utf8Path, delimiter: Delimiter) -> Result<Self, UnifyError> {
        if path.extension() == Some("sqlite") {
            Self::new_from_sqlite(path)
        } else {
            Self::new_from_text(path, delimiter)
        }
    }
}
