//! # Trajectories: raw-table ingestion and container types
//!
//! Facilities to **read** one raw trajectory recording into a dense numeric
//! table, whatever shape the source has on disk. The central types are
//! [`RawTrajectoryTable`] (one row per observation, caller-defined column
//! positions) and [`CanonicalTrajectoryTable`] (the fixed five-column output
//! of the unification pass).
//!
//! Modules
//! -----------------
//! * [`text_reader`](crate::trajectories::text_reader) – Delimited plain-text
//!   reader (one header line discarded, whitespace or single-character
//!   delimiter).
//! * [`sqlite_reader`](crate::trajectories::sqlite_reader) – SQLite capture
//!   reader running the fixed `(frame, id, pos_x, pos_y, ori_x, ori_y)`
//!   projection against `trajectory_data`.
//! * [`raw_source`](crate::trajectories::raw_source) – **Public** trait
//!   exposing `new_from_*` constructors on [`RawTrajectoryTable`], including
//!   extension-based dispatch between the two adapters.
//!
//! Data Model
//! -----------------
//! * A raw table carries **no ordering guarantee** and no column semantics;
//!   the caller attaches semantics through a
//!   [`ColumnSelector`](crate::unification::column_selector::ColumnSelector).
//! * A canonical table has exactly five columns, in order
//!   `(id, frame, x, y, z)`, sorted by identifier then frame.
//!
//! Error semantics
//! -----------------
//! Every adapter is fail-fast: a ragged row, a non-numeric cell, a missing
//! capture table, or an empty source aborts the conversion of that file with
//! an [`UnifyError`](crate::unify_errors::UnifyError) carrying the path (and
//! line number where applicable). No partially-ingested table is ever
//! returned.
use nalgebra::{DMatrix, Dyn, OMatrix, U5};

pub mod raw_source;
pub mod sqlite_reader;
pub mod text_reader;

/// A dense raw trajectory table: one row per observation, columns wherever
/// the recording put them.
pub type RawTrajectoryTable = DMatrix<f64>;

/// The unified output table: exactly five columns `(id, frame, x, y, z)`,
/// rows sorted by `(id, frame)`.
pub type CanonicalTrajectoryTable = OMatrix<f64, Dyn, U5>;
