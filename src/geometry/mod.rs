// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric types for the pattern-lock grid.
//!
//! This module contains type-safe representations of the grid primitives:
//! - GridPoint: One of the nine points (1..=9, row-major)
//! - PointSet: Bitset of grid points
//! - Pattern: Ordered, non-repeating sequence of 4..=9 points

pub mod constants;
pub mod pattern;
pub mod point;
pub mod point_set;

// Re-export for convenience
pub use constants::*;
pub use pattern::Pattern;
pub use point::GridPoint;
pub use point_set::PointSet;
