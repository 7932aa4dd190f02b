// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive pattern generation.
//!
//! Depth-first backtracking over a used-points bitmask. At each depth every
//! unused point is tried in ascending order; whenever the path holds at
//! least [`MIN_PATTERN_LENGTH`] points a copy of it is emitted before
//! descending further. The search bottoms out at depth 9.
//!
//! # Emission order
//!
//! Patterns appear in the order the recursion visits them, so every
//! extension of a prefix is emitted before the search backtracks past that
//! prefix. For example the first five outputs are:
//!
//! ```text
//! 1-2-3-4
//! 1-2-3-4-5
//! 1-2-3-4-5-6
//! 1-2-3-4-5-6-7
//! 1-2-3-4-5-6-7-8
//! ```
//!
//! The symmetry reducer keeps the first pattern of each equivalence class,
//! so this order is part of the contract.
//!
//! # Partitions
//!
//! The subtree under each starting point is independent. Generating the
//! partitions for points 1..=9 and concatenating them in ascending order
//! reproduces the sequential output exactly, which is what the `parallel`
//! feature relies on.

use crate::error::PatternError;
use crate::geometry::constants::{MAX_PATTERN_LENGTH, MIN_PATTERN_LENGTH, NPOINTS, TOTAL_PATTERNS};
use crate::geometry::{GridPoint, Pattern, PointSet};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Backtracking state: the current path and the points it uses.
#[derive(Debug)]
struct PatternGenerator {
    path: [GridPoint; MAX_PATTERN_LENGTH],
    used: PointSet,
    output: Vec<Pattern>,
}

impl PatternGenerator {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            path: [GridPoint::from_index(0); MAX_PATTERN_LENGTH],
            used: PointSet::empty(),
            output: Vec::with_capacity(capacity),
        }
    }

    /// Fix the first point and search only beneath it.
    fn start_at(&mut self, first: GridPoint) {
        self.used.insert(first);
        self.path[0] = first;
        self.backtrack(1);
        self.used.remove(first);
    }

    fn backtrack(&mut self, depth: usize) {
        if depth >= MIN_PATTERN_LENGTH {
            self.output
                .push(Pattern::from_points_unchecked(&self.path[..depth]));
        }
        if depth == MAX_PATTERN_LENGTH {
            return;
        }
        for point in GridPoint::all() {
            if self.used.contains(point) {
                continue;
            }
            self.used.insert(point);
            self.path[depth] = point;
            self.backtrack(depth + 1);
            self.used.remove(point);
        }
    }
}

/// Generate every pattern of length 4..=9, in emission order.
///
/// Logs a warning when the count differs from [`TOTAL_PATTERNS`]; use
/// [`check_generated_count`] to obtain the mismatch as a value.
pub fn generate_patterns() -> Vec<Pattern> {
    let mut generator = PatternGenerator::with_capacity(TOTAL_PATTERNS);
    generator.backtrack(0);
    let patterns = generator.output;

    log::debug!("[Generator] Emitted {} patterns", patterns.len());
    if let Err(mismatch) = check_generated_count(patterns.len()) {
        log::warn!("[Generator] {}", mismatch);
    }
    patterns
}

/// Generate the patterns starting at `first`, in emission order.
pub fn generate_patterns_from(first: GridPoint) -> Vec<Pattern> {
    let mut generator = PatternGenerator::with_capacity(TOTAL_PATTERNS / NPOINTS);
    generator.start_at(first);
    generator.output
}

/// Generate all partitions on the rayon pool, merged in starting-point order.
///
/// The result is identical to [`generate_patterns`].
#[cfg(feature = "parallel")]
pub fn generate_patterns_parallel() -> Vec<Pattern> {
    let partitions: Vec<Vec<Pattern>> = GridPoint::all()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(generate_patterns_from)
        .collect();
    let patterns = partitions.concat();

    log::debug!(
        "[Generator] Emitted {} patterns from {} partitions",
        patterns.len(),
        partitions.len()
    );
    if let Err(mismatch) = check_generated_count(patterns.len()) {
        log::warn!("[Generator] {}", mismatch);
    }
    patterns
}

/// Compare an emitted count against the closed-form total.
pub fn check_generated_count(actual: usize) -> Result<(), PatternError> {
    if actual == TOTAL_PATTERNS {
        Ok(())
    } else {
        Err(PatternError::CountMismatch {
            expected: TOTAL_PATTERNS,
            actual,
        })
    }
}

/// Histogram of pattern lengths; index `L` holds the number of length-`L` patterns.
pub fn count_by_length(patterns: &[Pattern]) -> [usize; MAX_PATTERN_LENGTH + 1] {
    let mut counts = [0; MAX_PATTERN_LENGTH + 1];
    for pattern in patterns {
        counts[pattern.len()] += 1;
    }
    counts
}
