//! # Unification: column selection, canonical reordering, and output
//!
//! The format-unification engine. Given one raw table and a
//! [`ColumnSelector`](column_selector::ColumnSelector) naming which raw
//! columns carry which semantic quantity, [`format::normalize`] derives the
//! canonical five-column `(id, frame, x, y, z)` table: it sorts twice
//! (first by `(id, x)`, then by `(id, frame)`), synthesizes the frame index
//! and the z-coordinate when the recording lacks them, and preserves every
//! input row exactly once.
//!
//! Modules
//! -----------------
//! * [`column_selector`] – Eagerly-validated mapping from semantic quantity
//!   to raw column index.
//! * [`format`] – The two-pass unification algorithm and the [`format::Unify`]
//!   extension trait.
//! * [`writer`] – Tab-delimited canonical output (`#id  fr  x  y  z` header,
//!   CRLF line endings, integer id/frame, four-decimal coordinates).
//!
//! The one-call driver [`convert_file`] chains ingestion, unification, and
//! writing for a single recording.
use camino::{Utf8Path, Utf8PathBuf};

use crate::trajectories::raw_source::RawTableSource;
use crate::trajectories::text_reader::Delimiter;
use crate::trajectories::RawTrajectoryTable;
use crate::unify_errors::UnifyError;

pub mod column_selector;
pub mod format;
pub mod writer;

use column_selector::ColumnSelector;
use format::Unify;
use writer::CanonicalTableExt;

/// Convert one raw recording into a unified trajectory file.
///
/// Ingests `input` (dispatching on the `.sqlite` extension), unifies it with
/// the given column selection, and writes
/// `<stem>_traj_file_format.txt` into `output_dir`.
///
/// Unification completes **before** the output file is created, so a failing
/// conversion never leaves a partial output behind.
///
/// Arguments
/// -----------------
/// * `input` – Path to the raw recording (delimited text or SQLite capture).
/// * `delimiter` – Field separator for text sources; ignored for SQLite.
/// * `columns` – Column selection mapping raw columns to `(id, frame, x, y, z)`.
/// * `output_dir` – Directory receiving the unified file.
///
/// Return
/// ----------
/// * The path of the written file, or the first [`UnifyError`] encountered.
pub fn convert_file(
    input: &Utf8Path,
    delimiter: Delimiter,
    columns: &ColumnSelector,
    output_dir: &Utf8Path,
) -> Result<Utf8PathBuf, UnifyError> {
    let raw = RawTrajectoryTable::new_from_path(input, delimiter)?;
    let canonical = raw.unify(columns)?;

    let stem = input.file_stem().unwrap_or(input.as_str());
    let output = output_dir.join(format!("{stem}_traj_file_format.txt"));
    canonical.write_unified(&output)?;
    Ok(output)
}
