//! # Constants and type definitions for Unitraj
//!
//! This module centralizes the **canonical column layout**, the output header,
//! and the common type aliases used throughout the crate.
//!
//! ## Overview
//!
//! - Fixed column positions of the canonical `(id, frame, x, y, z)` table
//! - The tab-separated header written in front of every unified file
//! - Aliases documenting the physical units carried by registry fields
//!
//! These definitions are shared by the unification algorithm, the canonical
//! writer, and the experiment registry.

// -------------------------------------------------------------------------------------------------
// Canonical column layout
// -------------------------------------------------------------------------------------------------

/// Column index of the pedestrian identifier in a canonical table.
pub const ID_COL: usize = 0;

/// Column index of the frame (or time) value in a canonical table.
pub const FRAME_COL: usize = 1;

/// Column index of the x-coordinate in a canonical table.
pub const X_COL: usize = 2;

/// Column index of the y-coordinate in a canonical table.
pub const Y_COL: usize = 3;

/// Column index of the z-coordinate in a canonical table.
pub const Z_COL: usize = 4;

/// Header fields written in front of every unified trajectory file.
///
/// The leading `#` is part of the first field, not a comment marker added by
/// the writer.
pub const CANONICAL_HEADER: [&str; 5] = ["#id", "fr", "x", "y", "z"];

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Length in meters (registry geometry and translation offsets)
pub type Meter = f64;

/// Camera capture rate in frames per second
pub type FramesPerSecond = u32;
