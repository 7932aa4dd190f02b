// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Grid point type.
//!
//! Points are numbered 1..=9 row-major:
//!
//! ```text
//! 1 2 3
//! 4 5 6
//! 7 8 9
//! ```

use crate::geometry::constants::{GRID_SIDE, NPOINTS};
use serde::Serialize;
use std::fmt;

/// A point on the 3×3 grid, in the range 1..=NPOINTS.
///
/// This is a newtype wrapper to keep grid points apart from indices and
/// counts. Ordering follows the point number, which is what lexicographic
/// comparison of patterns relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct GridPoint(u8);

impl GridPoint {
    /// Create a new grid point, panicking if out of range.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in 1..=9.
    pub fn new(value: u8) -> Self {
        assert!(
            (1..=NPOINTS as u8).contains(&value),
            "Grid point out of range: {}",
            value
        );
        Self(value)
    }

    /// Try to create a new grid point, returning None if out of range.
    pub fn try_new(value: u8) -> Option<Self> {
        if (1..=NPOINTS as u8).contains(&value) {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Point from a zero-based index (0..NPOINTS).
    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index as u8 + 1)
    }

    /// Point at (row, column), both zero-based.
    pub const fn from_row_column(row: usize, column: usize) -> Self {
        Self::from_index(row * GRID_SIDE + column)
    }

    /// Get the point number (1..=9).
    pub fn value(self) -> u8 {
        self.0
    }

    /// Zero-based index, for table lookups.
    #[inline]
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.index() / GRID_SIDE
    }

    /// Zero-based column.
    pub fn column(self) -> usize {
        self.index() % GRID_SIDE
    }

    /// All grid points in ascending order.
    pub fn all() -> impl Iterator<Item = GridPoint> + Clone {
        (0..NPOINTS).map(Self::from_index)
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
