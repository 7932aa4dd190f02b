// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! PointSet type for representing sets of grid points as bitsets.
//!
//! Used for the "used points" mask during generation and the "visited
//! points" mask during skip detection.
//!
//! # Examples
//!
//! ```
//! use lockpattern_search::geometry::{GridPoint, PointSet};
//!
//! let mut set = PointSet::empty();
//! set.insert(GridPoint::new(1));
//! set.insert(GridPoint::new(5));
//! set.insert(GridPoint::new(9));
//!
//! assert_eq!(set.len(), 3);
//! assert_eq!(format!("{}", set), "|159|");
//! ```

use crate::geometry::{constants::NPOINTS, GridPoint};
use std::fmt;

/// A set of grid points represented as a bitset.
///
/// Bit i (counting from LSB) is set if point i+1 is in the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PointSet(u16);

impl PointSet {
    /// Create an empty point set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create a point set containing every grid point.
    pub const fn full() -> Self {
        Self((1 << NPOINTS) - 1)
    }

    /// Create a point set from a slice of points.
    pub fn from_points(points: &[GridPoint]) -> Self {
        let mut set = Self::empty();
        for &point in points {
            set.insert(point);
        }
        set
    }

    /// Check if the set contains a specific point.
    #[inline]
    pub fn contains(self, point: GridPoint) -> bool {
        (self.0 >> point.index()) & 1 != 0
    }

    /// Insert a point into the set.
    #[inline]
    pub fn insert(&mut self, point: GridPoint) {
        self.0 |= 1 << point.index();
    }

    /// Remove a point from the set.
    #[inline]
    pub fn remove(&mut self, point: GridPoint) {
        self.0 &= !(1 << point.index());
    }

    /// Get the number of points in the set (population count).
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the underlying bitset value.
    pub fn bits(self) -> u16 {
        self.0
    }

    /// Iterate over all points in the set, in ascending order.
    pub fn iter(self) -> impl Iterator<Item = GridPoint> {
        GridPoint::all().filter(move |&point| self.contains(point))
    }
}

impl fmt::Display for PointSet {
    /// Format a point set as "|159|".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|")?;
        for point in self.iter() {
            write!(f, "{}", point)?;
        }
        write!(f, "|")
    }
}

impl From<&[GridPoint]> for PointSet {
    fn from(points: &[GridPoint]) -> Self {
        Self::from_points(points)
    }
}
