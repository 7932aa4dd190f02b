// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Classified pattern record.

use crate::geometry::Pattern;
use serde::Serialize;

/// A pattern together with its geometric and rule-based features.
///
/// Invariants:
/// - `points == pattern.len()`
/// - `straight_lines + diagonal45_lines + diagonal_lines == points - 1`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedRecord {
    pub pattern: Pattern,
    /// Every point jumped over had already been visited.
    pub normal_style: bool,
    /// Number of transitions that pass over a point.
    pub skip_point_nums: usize,
    pub points: usize,
    /// Total Euclidean length of the drawn line, unit grid spacing.
    pub line_length: f64,
    pub straight_lines: usize,
    pub diagonal45_lines: usize,
    pub diagonal_lines: usize,
}

impl ClassifiedRecord {
    /// Number of drawn segments.
    pub fn segments(&self) -> usize {
        self.straight_lines + self.diagonal45_lines + self.diagonal_lines
    }
}
