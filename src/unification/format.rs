//! # Two-pass format unification
//!
//! Turns one [`RawTrajectoryTable`] into a [`CanonicalTrajectoryTable`] with
//! exactly five columns `(id, frame, x, y, z)`, sorted by identifier then
//! frame.
//!
//! ## Algorithm
//! -----------------
//! 1. **Pass 1** – stable sort of all rows by `(id, x)`, id primary.
//! 2. **Frame synthesis** – when the recording has no frame column, each
//!    pedestrian's contiguous run in Pass-1 order receives the dense frame
//!    values `0, 1, …, k-1`; otherwise the raw frame column is taken
//!    verbatim (in Pass-1 row order).
//! 3. **Z synthesis** – when the recording has no z column, a zero column;
//!    otherwise the raw z column verbatim. Frame and z are computed
//!    independently of each other for every presence/absence combination.
//! 4. **Assembly** – column-stack `(id, frame, x, y, z)`.
//! 5. **Pass 2** – stable re-sort by `(id, frame)`, id primary. Pass 1 groups
//!    by `(id, x)`, which is generally not `(id, frame)` order once the frame
//!    is a real timestamp, so the re-sort is required.
//!
//! Both sorts use `f64::total_cmp` on an index permutation with the standard
//! library's stable `sort_by`, so ties keep their relative order and the
//! output is deterministic for a fixed input and selector.
//!
//! ## Guarantees
//! -----------------
//! * Output row count equals input row count; no row is dropped or
//!   duplicated.
//! * For adjacent output rows `r1`, `r2`:
//!   `r1.id < r2.id || (r1.id == r2.id && r1.frame <= r2.frame)`.
//! * Running the pass on an already-canonical table is the identity.
use itertools::Itertools;

use crate::constants::{FRAME_COL, ID_COL};
use crate::trajectories::{CanonicalTrajectoryTable, RawTrajectoryTable};
use crate::unification::column_selector::ColumnSelector;
use crate::unify_errors::UnifyError;

/// Extension trait running the unification pass directly on a raw table.
pub trait Unify {
    /// Derive the canonical `(id, frame, x, y, z)` table.
    ///
    /// See [`normalize`] for the algorithm and its guarantees.
    fn unify(&self, columns: &ColumnSelector) -> Result<CanonicalTrajectoryTable, UnifyError>;
}

impl Unify for RawTrajectoryTable {
    fn unify(&self, columns: &ColumnSelector) -> Result<CanonicalTrajectoryTable, UnifyError> {
        normalize(self, columns)
    }
}

/// Stable index permutation sorting `table`'s rows by a two-column key.
fn sort_order(table_key: impl Fn(usize) -> (f64, f64), nrows: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..nrows).collect();
    order.sort_by(|&a, &b| {
        let (a1, a2) = table_key(a);
        let (b1, b2) = table_key(b);
        a1.total_cmp(&b1).then_with(|| a2.total_cmp(&b2))
    });
    order
}

/// Dense per-pedestrian frame values for a table already in Pass-1 order.
///
/// Identifier runs are contiguous after Pass 1, so each run of equal ids of
/// length `k` receives `0.0, 1.0, …, (k-1).0` in row order.
fn synthesize_frames(sorted: &RawTrajectoryTable, id_col: usize) -> Vec<f64> {
    let mut frames = Vec::with_capacity(sorted.nrows());
    for (_, run) in &(0..sorted.nrows()).chunk_by(|&row| sorted[(row, id_col)].to_bits()) {
        frames.extend(run.enumerate().map(|(k, _)| k as f64));
    }
    frames
}

/// Unify one raw trajectory table into the canonical five-column format.
///
/// Arguments
/// -----------------
/// * `raw` – The raw table, one row per observation, any column layout.
/// * `columns` – Column selection; `frame` and `z` may be absent, triggering
///   synthesis.
///
/// Return
/// ----------
/// * The canonical table, or [`UnifyError::ColumnOutOfBounds`] when a
///   selected index does not fit the table. Bounds are checked before any
///   row is touched.
///
/// See also
/// ------------
/// * [`Unify::unify`] – The same pass as a method on the raw table.
/// * [`ColumnSelector::new`] – Mandatory-column validation (id, x, y).
pub fn normalize(
    raw: &RawTrajectoryTable,
    columns: &ColumnSelector,
) -> Result<CanonicalTrajectoryTable, UnifyError> {
    columns.check_bounds(raw.ncols())?;
    let nrows = raw.nrows();

    // Pass 1: (id, x), id primary.
    let order = sort_order(|row| (raw[(row, columns.id)], raw[(row, columns.x)]), nrows);
    let sorted = raw.select_rows(order.iter());

    let frames = match columns.frame {
        Some(frame_col) => sorted.column(frame_col).iter().copied().collect::<Vec<_>>(),
        None => synthesize_frames(&sorted, columns.id),
    };
    let z = match columns.z {
        Some(z_col) => sorted.column(z_col).iter().copied().collect::<Vec<_>>(),
        None => vec![0.0; nrows],
    };

    let stacked = CanonicalTrajectoryTable::from_fn(nrows, |row, col| match col {
        0 => sorted[(row, columns.id)],
        1 => frames[row],
        2 => sorted[(row, columns.x)],
        3 => sorted[(row, columns.y)],
        _ => z[row],
    });

    // Pass 2: (id, frame), id primary.
    let order = sort_order(
        |row| (stacked[(row, ID_COL)], stacked[(row, FRAME_COL)]),
        nrows,
    );
    Ok(stacked.select_rows(order.iter()))
}
