//! # SQLite capture reader
//!
//! Reads a pedestrian capture database into a dense [`RawTrajectoryTable`]
//! by running a fixed projection against the `trajectory_data` table:
//!
//! ```sql
//! SELECT frame, id, pos_x, pos_y, ori_x, ori_y FROM trajectory_data
//! ```
//!
//! The resulting table always has six columns in that order, so the usual
//! column selection for SQLite sources is `id = 1`, `frame = 0`, `x = 2`,
//! `y = 3`.
//!
//! The database is opened read-only; a missing file, a missing table, or a
//! missing column surfaces as [`UnifyError::RelationalSource`] with the path
//! in context. A capture table with zero rows is rejected as
//! [`UnifyError::EmptySource`].
use camino::Utf8Path;
use nalgebra::DMatrix;
use rusqlite::{Connection, OpenFlags};

use crate::trajectories::RawTrajectoryTable;
use crate::unify_errors::UnifyError;

/// Fixed projection run against every capture database.
const CAPTURE_QUERY: &str = "SELECT frame, id, pos_x, pos_y, ori_x, ori_y FROM trajectory_data";

/// Number of columns produced by [`CAPTURE_QUERY`].
const CAPTURE_WIDTH: usize = 6;

/// Read a SQLite capture database into a dense raw table.
///
/// Arguments
/// -----------------
/// * `path` – Path to the `.sqlite` capture file.
///
/// Return
/// ----------
/// * A six-column `RawTrajectoryTable` in `(frame, id, pos_x, pos_y, ori_x,
///   ori_y)` order, or an [`UnifyError`] if the database or the expected
///   structure is absent.
pub(crate) fn extract_sqlite(path: &Utf8Path) -> Result<RawTrajectoryTable, UnifyError> {
    let wrap = |source: rusqlite::Error| UnifyError::RelationalSource {
        path: path.to_string(),
        source,
    };

    let conn =
        Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY).map_err(wrap)?;
    let mut stmt = conn.prepare(CAPTURE_QUERY).map_err(wrap)?;

    let row_iter = stmt
        .query_map([], |row| {
            Ok([
                row.get::<_, f64>(0)?,
                row.get::<_, f64>(1)?,
                row.get::<_, f64>(2)?,
                row.get::<_, f64>(3)?,
                row.get::<_, f64>(4)?,
                row.get::<_, f64>(5)?,
            ])
        })
        .map_err(wrap)?;

    let mut rows: Vec<[f64; CAPTURE_WIDTH]> = Vec::new();
    for row in row_iter {
        rows.push(row.map_err(wrap)?);
    }

    if rows.is_empty() {
        return Err(UnifyError::EmptySource {
            path: path.to_string(),
        });
    }

    Ok(DMatrix::from_row_iterator(
        rows.len(),
        CAPTURE_WIDTH,
        rows.into_iter().flatten(),
    ))
}
