//! # Unitraj: pedestrian-trajectory format unification
//!
//! `unitraj` ingests heterogeneous pedestrian-trajectory recordings and converts
//! each one into a single canonical tabular representation: rows of
//! `(id, frame, x, y, z)`, sorted deterministically by identifier then frame.
//! A tightly coupled second concern is the [`experiments`] registry, a
//! per-experiment metadata model describing how downstream consumers bring a
//! raw coordinate system into the shared reference frame.
//!
//! ## Overview
//! -----------------
//! * [`trajectories`] – Raw-table ingestion from delimited text files and
//!   SQLite capture databases, plus the [`RawTrajectoryTable`] and
//!   [`CanonicalTrajectoryTable`] container types.
//! * [`unification`] – Column selection ([`ColumnSelector`]), the two-pass
//!   `(id, x)` / `(id, frame)` unification algorithm ([`normalize`]), and the
//!   canonical tab-delimited writer.
//! * [`experiments`] – Immutable registry mapping experiment identifiers to
//!   the geometric and temporal normalization parameters of each study.
//! * [`unify_errors`] – The crate-wide [`UnifyError`] taxonomy.
//!
//! ## Quick-Start
//! -----------------
//! ```rust,no_run
//! use camino::Utf8Path;
//! use unitraj::trajectories::raw_source::RawTableSource;
//! use unitraj::unification::format::Unify;
//! use unitraj::{ColumnSelector, Delimiter, RawTrajectoryTable};
//!
//! # fn run() -> Result<(), unitraj::UnifyError> {
//! let columns = ColumnSelector::new(Some(0), None, Some(1), Some(2), None)?;
//! let raw = RawTrajectoryTable::new_from_text(Utf8Path::new("run_01.txt"), Delimiter::Whitespace)?;
//! let canonical = raw.unify(&columns)?;
//! assert_eq!(canonical.ncols(), 5);
//! # Ok(()) }
//! ```
//!
//! ## See also
//! ------------
//! * [`unification::convert_file`] – One-call ingest → unify → write driver.
//! * [`experiments::ExperimentRegistry`] – Built-in experiment parameter table.
pub mod constants;
pub mod experiments;
pub mod trajectories;
pub mod unification;
pub mod unify_errors;

pub use constants::{CANONICAL_HEADER, FRAME_COL, ID_COL, X_COL, Y_COL, Z_COL};
pub use experiments::registry::ExperimentRegistry;
pub use experiments::ExperimentParameters;
pub use trajectories::text_reader::Delimiter;
pub use trajectories::{CanonicalTrajectoryTable, RawTrajectoryTable};
pub use unification::column_selector::ColumnSelector;
pub use unification::format::normalize;
pub use unify_errors::UnifyError;
