// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-pattern feature classification.
//!
//! Three independent passes over the consecutive point pairs of a pattern,
//! each driven by one of the geometry tables:
//! - line length (distance matrix)
//! - segment kinds (line-type table)
//! - skips and style (jump table)
//!
//! The slice-level functions accept any sequence of points, including the
//! short ones a [`Pattern`] cannot hold, so boundary behaviour is defined
//! for every length.

pub mod record;

pub use record::ClassifiedRecord;

use crate::geometry::{GridPoint, Pattern, PointSet};
use crate::memo::{GeometryTables, LineType};

/// Segment counts by [`LineType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineCounts {
    pub straight: usize,
    pub diagonal45: usize,
    pub diagonal: usize,
}

/// Outcome of skip detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkipReport {
    pub normal_style: bool,
    pub skip_point_nums: usize,
}

/// Sum of distances between consecutive points; 0 for fewer than two points.
pub fn line_length(points: &[GridPoint]) -> f64 {
    let distances = &GeometryTables::get().distances;
    points
        .windows(2)
        .fold(0.0, |sum, pair| sum + distances.get(pair[0], pair[1]))
}

/// Count segments of each kind.
pub fn line_types(points: &[GridPoint]) -> LineCounts {
    let line_types = &GeometryTables::get().line_types;
    let mut counts = LineCounts::default();
    for pair in points.windows(2) {
        match line_types.get(pair[0], pair[1]) {
            LineType::Straight => counts.straight += 1,
            LineType::Diagonal45 => counts.diagonal45 += 1,
            LineType::Diagonal => counts.diagonal += 1,
        }
    }
    counts
}

/// Count jumps and decide whether the pattern is drawn in normal style.
///
/// A real unlock screen lets a line pass over a point only if that point
/// is already part of the gesture. Walking the transitions left to right,
/// each jump is counted; while the pattern is still normal, the jumped
/// point must already be in the visited set (every point up to and
/// including the current one), otherwise the pattern is flagged
/// non-normal for good. Jumps keep being counted after that.
pub fn detect_skips(points: &[GridPoint]) -> SkipReport {
    let jumps = &GeometryTables::get().jumps;
    let mut report = SkipReport {
        normal_style: true,
        skip_point_nums: 0,
    };
    let Some(&first) = points.first() else {
        return report;
    };

    let mut visited = PointSet::empty();
    visited.insert(first);
    for pair in points.windows(2) {
        let (curr, next) = (pair[0], pair[1]);
        let jump = jumps.get(curr, next);
        if jump.is_jump {
            report.skip_point_nums += 1;
            if report.normal_style {
                if let Some(mid) = jump.midpoint {
                    if !visited.contains(mid) {
                        report.normal_style = false;
                    }
                }
            }
        }
        visited.insert(next);
    }
    report
}

/// Compute every feature of `pattern`.
///
/// # Examples
///
/// ```
/// use lockpattern_search::classify::classify;
/// use lockpattern_search::geometry::Pattern;
///
/// let record = classify(&Pattern::new(&[1, 3, 7, 9]).unwrap());
/// assert_eq!(record.skip_point_nums, 3);
/// assert!(!record.normal_style);
/// assert_eq!((record.straight_lines, record.diagonal45_lines), (2, 1));
/// ```
pub fn classify(pattern: &Pattern) -> ClassifiedRecord {
    let points = pattern.points();
    let SkipReport {
        normal_style,
        skip_point_nums,
    } = detect_skips(points);
    let counts = line_types(points);
    ClassifiedRecord {
        pattern: *pattern,
        normal_style,
        skip_point_nums,
        points: pattern.len(),
        line_length: line_length(points),
        straight_lines: counts.straight,
        diagonal45_lines: counts.diagonal45,
        diagonal_lines: counts.diagonal,
    }
}
