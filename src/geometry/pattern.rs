// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pattern type: an ordered, non-repeating sequence of grid points.
//!
//! Patterns are small fixed-size values (ten bytes), so the full set of
//! 985,824 raw patterns fits in a single flat `Vec` without per-pattern
//! heap allocation.

use crate::error::{PatternError, Result};
use crate::geometry::constants::{MAX_PATTERN_LENGTH, MIN_PATTERN_LENGTH};
use crate::geometry::{GridPoint, PointSet};
use serde::{Serialize, Serializer};
use std::fmt;

/// Filler for the unused tail of the point array.
///
/// Every constructor writes this value past `len`, so derived equality and
/// hashing only ever see the live prefix vary.
const FILLER: GridPoint = GridPoint::from_index(0);

/// An unlock gesture: 4 to 9 distinct grid points, in drawing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    points: [GridPoint; MAX_PATTERN_LENGTH],
    len: u8,
}

impl Pattern {
    /// Build a pattern from point numbers, validating every invariant.
    ///
    /// # Errors
    ///
    /// - `InvalidLength` if fewer than 4 or more than 9 points are given
    /// - `PointOutOfRange` for a number outside 1..=9
    /// - `RepeatedPoint` for a number listed twice
    ///
    /// # Examples
    ///
    /// ```
    /// use lockpattern_search::geometry::Pattern;
    ///
    /// let corners = Pattern::new(&[1, 3, 7, 9]).unwrap();
    /// assert_eq!(corners.len(), 4);
    /// assert_eq!(corners.to_string(), "1-3-7-9");
    ///
    /// assert!(Pattern::new(&[1, 2, 3]).is_err());
    /// assert!(Pattern::new(&[1, 2, 3, 1]).is_err());
    /// ```
    pub fn new(values: &[u8]) -> Result<Self> {
        if !(MIN_PATTERN_LENGTH..=MAX_PATTERN_LENGTH).contains(&values.len()) {
            return Err(PatternError::InvalidLength(values.len()));
        }
        let mut seen = PointSet::empty();
        let mut points = [FILLER; MAX_PATTERN_LENGTH];
        for (slot, &value) in points.iter_mut().zip(values) {
            let point = GridPoint::try_new(value).ok_or(PatternError::PointOutOfRange(value))?;
            if seen.contains(point) {
                return Err(PatternError::RepeatedPoint(value));
            }
            seen.insert(point);
            *slot = point;
        }
        Ok(Self {
            points,
            len: values.len() as u8,
        })
    }

    /// Build a pattern from points already known to be valid.
    ///
    /// Callers guarantee distinctness and a length in 4..=9.
    pub(crate) fn from_points_unchecked(source: &[GridPoint]) -> Self {
        debug_assert!((MIN_PATTERN_LENGTH..=MAX_PATTERN_LENGTH).contains(&source.len()));
        let mut points = [FILLER; MAX_PATTERN_LENGTH];
        points[..source.len()].copy_from_slice(source);
        Self {
            points,
            len: source.len() as u8,
        }
    }

    /// The points in drawing order.
    #[inline]
    pub fn points(&self) -> &[GridPoint] {
        &self.points[..self.len as usize]
    }

    /// Number of points in the pattern.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Always false: a pattern has at least four points.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Consecutive (from, to) pairs, one per drawn segment.
    pub fn segments(&self) -> impl Iterator<Item = (GridPoint, GridPoint)> + '_ {
        self.points().windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Image of this pattern under a point mapping, order unchanged.
    pub fn map_points(&self, f: impl Fn(GridPoint) -> GridPoint) -> Self {
        let mut mapped = *self;
        for point in mapped.points[..self.len as usize].iter_mut() {
            *point = f(*point);
        }
        mapped
    }

    /// Point numbers as plain bytes.
    pub fn to_values(&self) -> Vec<u8> {
        self.points().iter().map(|p| p.value()).collect()
    }
}

impl fmt::Display for Pattern {
    /// Format a pattern as "1-3-7-9".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, point) in self.points().iter().enumerate() {
            if i > 0 {
                write!(f, "-")?;
            }
            write!(f, "{}", point)?;
        }
        Ok(())
    }
}

impl Serialize for Pattern {
    /// Serialized as a plain array of point numbers, e.g. `[1,3,7,9]`.
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.points())
    }
}
