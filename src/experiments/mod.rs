//! # Experiments: per-study normalization parameters
//!
//! Every pedestrian-motion study ships its trajectories in its own raw
//! coordinate system. An [`ExperimentParameters`] record captures the
//! geometric and temporal normalization parameters needed to bring one
//! study's coordinates into the shared reference frame; the
//! [`registry::ExperimentRegistry`] maps experiment identifiers to these
//! records.
//!
//! ## Consumer contract
//! -----------------
//! The unification engine itself never applies these parameters. Downstream
//! normalization is expected to apply them **in this order**:
//!
//! 1. divide coordinates by [`unit`](ExperimentParameters::unit)
//!    (centimeters → meters),
//! 2. relabel axes via [`x_axis_source`](ExperimentParameters::x_axis_source)
//!    / [`y_axis_source`](ExperimentParameters::y_axis_source) (90° rotation
//!    expressed as "which raw axis supplies normalized x / y"),
//! 3. reflect axes via [`ref_x`](ExperimentParameters::ref_x) /
//!    [`ref_y`](ExperimentParameters::ref_y),
//! 4. translate via [`shift_x`](ExperimentParameters::shift_x) /
//!    [`shift_y`](ExperimentParameters::shift_y).
//!
//! That ordering is part of the field semantics; the field values of the
//! built-in table assume it.
use crate::constants::{FramesPerSecond, Meter};

pub mod registry;

/// Camera orientation of a study's recording setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureView {
    /// Overhead camera (the common case).
    #[default]
    Top,
    /// Side-mounted camera.
    Side,
}

/// Unit of the time axis in a study's raw data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemporalUnit {
    /// Frame indices at the camera capture rate.
    #[default]
    Frames,
    /// Seconds.
    Seconds,
}

/// Immutable normalization parameters of one experiment.
///
/// Constructed once (usually through the built-in table in
/// [`registry::ExperimentRegistry::builtin`]) and never mutated afterwards.
/// Optional fields are explicit `Option`s rather than sentinel values, so a
/// real axis index of `0` can never collide with "absent".
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentParameters {
    /// Provenance URL of the trajectory data; `None` when the data is not
    /// publicly available.
    pub source_link: Option<String>,
    /// Translation applied to x after rotation and reflection.
    pub shift_x: Meter,
    /// Translation applied to y after rotation and reflection.
    pub shift_y: Meter,
    /// `100` when raw coordinates are in centimeters (divide to reach
    /// meters), otherwise `1`.
    pub unit: u32,
    /// `-1.0` reflects the x-axis, `1.0` leaves it.
    pub ref_x: f64,
    /// `-1.0` reflects the y-axis, `1.0` leaves it.
    pub ref_y: f64,
    /// Raw axis (column of the canonical table) supplying normalized x after
    /// the 90° relabeling; `None` means no rotation for this axis.
    pub x_axis_source: Option<usize>,
    /// Raw axis supplying normalized y; `None` means no rotation for this
    /// axis.
    pub y_axis_source: Option<usize>,
    /// Lower bound of the usable straight measurement region, when the site
    /// has one.
    pub area_min: Option<Meter>,
    /// Upper bound of the usable straight measurement region.
    pub area_max: Option<Meter>,
    /// Camera capture rate.
    pub fps: FramesPerSecond,
    /// Length of the straight segment of the track.
    pub length: Meter,
    /// Radius of the curved segment of the track.
    pub radius: Meter,
    /// Total loop circumference of the track.
    pub circumference: Meter,
    /// Camera orientation.
    pub capture_view: CaptureView,
    /// Unit of the raw time axis.
    pub temporal_unit: TemporalUnit,
}

impl Default for ExperimentParameters {
    fn default() -> Self {
        ExperimentParameters {
            source_link: None,
            shift_x: 0.0,
            shift_y: 0.0,
            unit: 1,
            ref_x: 1.0,
            ref_y: 1.0,
            x_axis_source: Some(0),
            y_axis_source: Some(1),
            area_min: None,
            area_max: None,
            fps: 25,
            length: 0.0,
            radius: 0.0,
            circumference: 0.0,
            capture_view: CaptureView::default(),
            temporal_unit: TemporalUnit::default(),
        }
    }
}
