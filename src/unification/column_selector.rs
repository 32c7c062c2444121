//! # Column selection
//!
//! A [`ColumnSelector`] names which raw columns carry the pedestrian
//! identifier, frame index, and coordinates. It is validated **eagerly**:
//! the mandatory indices (`id`, `x`, `y`) are checked at construction time,
//! before any input is read, and every present index is checked against the
//! table width before any row is processed.
use crate::unify_errors::UnifyError;

/// Mapping from semantic quantity to raw column index.
///
/// `id`, `x`, and `y` are mandatory; `frame` and `z` may be absent, in which
/// case the unification pass synthesizes them (a dense per-pedestrian frame
/// index, a zero z-column).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSelector {
    /// Raw column carrying the pedestrian identifier.
    pub id: usize,
    /// Raw column carrying the frame index, if the recording has one.
    pub frame: Option<usize>,
    /// Raw column carrying the x-coordinate.
    pub x: usize,
    /// Raw column carrying the y-coordinate.
    pub y: usize,
    /// Raw column carrying the z-coordinate, if the recording has one.
    pub z: Option<usize>,
}

impl ColumnSelector {
    /// Build a selector from optional caller-supplied indices.
    ///
    /// Fails with [`UnifyError::MissingColumn`] when `id`, `x`, or `y` is
    /// absent. This is the configuration gate: it runs before any I/O, so a
    /// misconfigured conversion never touches the output directory.
    ///
    /// Arguments
    /// ---------
    /// * `id`: index of the pedestrian-identifier column (mandatory)
    /// * `frame`: index of the frame column, or `None` to synthesize frames
    /// * `x`: index of the x-coordinate column (mandatory)
    /// * `y`: index of the y-coordinate column (mandatory)
    /// * `z`: index of the z-coordinate column, or `None` for a zero column
    pub fn new(
        id: Option<usize>,
        frame: Option<usize>,
        x: Option<usize>,
        y: Option<usize>,
        z: Option<usize>,
    ) -> Result<Self, UnifyError> {
        let id = id.ok_or(UnifyError::MissingColumn("id"))?;
        let x = x.ok_or(UnifyError::MissingColumn("x"))?;
        let y = y.ok_or(UnifyError::MissingColumn("y"))?;
        Ok(ColumnSelector { id, frame, x, y, z })
    }

    /// Check every present index against the width of a raw table.
    pub(crate) fn check_bounds(&self, width: usize) -> Result<(), UnifyError> {
        let indices = [
            ("id", Some(self.id)),
            ("frame", self.frame),
            ("x", Some(self.x)),
            ("y", Some(self.y)),
            ("z", self.z),
        ];
        for (field, index) in indices {
            if let Some(index) = index {
                if index >= width {
                    return Err(UnifyError::ColumnOutOfBounds {
                        field,
                        index,
                        width,
                    });
                }
            }
        }
        Ok(())
    }
}
