// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for the pattern-lock grid.
//!
//! The grid is a fixed 3×3 layout of nine points numbered 1..=9 in
//! row-major order. A pattern visits between 4 and 9 distinct points.

/// Points per side of the grid.
pub const GRID_SIDE: usize = 3;

/// Total number of grid points.
pub const NPOINTS: usize = GRID_SIDE * GRID_SIDE;

/// Shortest pattern accepted as an unlock gesture.
pub const MIN_PATTERN_LENGTH: usize = 4;

/// Longest pattern: every point visited once.
pub const MAX_PATTERN_LENGTH: usize = NPOINTS;

/// Number of elements of the dihedral group of the square.
pub const NTRANSFORMS: usize = 8;

/// Compute factorial at compile time.
const fn factorial(n: usize) -> usize {
    match n {
        0 | 1 => 1,
        _ => n * factorial(n - 1),
    }
}

/// Number of ordered selections of `k` distinct items out of `n`: n!/(n-k)!.
pub const fn arrangements(n: usize, k: usize) -> usize {
    if k > n {
        0
    } else {
        factorial(n) / factorial(n - k)
    }
}

/// Total number of raw patterns the generator must emit.
///
/// Σ(L=4..9) 9!/(9-L)! = 3024 + 15120 + 60480 + 181440 + 362880 + 362880 = 985,824.
pub const TOTAL_PATTERNS: usize = {
    let mut total = 0;
    let mut length = MIN_PATTERN_LENGTH;
    while length <= MAX_PATTERN_LENGTH {
        total += arrangements(NPOINTS, length);
        length += 1;
    }
    total
};

/// Number of patterns left after removing rotations and reflections.
///
/// Exactly TOTAL_PATTERNS / 8, since every orbit has all 8 members.
pub const DISTINCT_PATTERNS: usize = 123_228;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(5), 120);
        assert_eq!(factorial(9), 362_880);
    }

    #[test]
    fn test_arrangements_per_length() {
        assert_eq!(arrangements(9, 4), 3024);
        assert_eq!(arrangements(9, 5), 15120);
        assert_eq!(arrangements(9, 6), 60480);
        assert_eq!(arrangements(9, 7), 181_440);
        assert_eq!(arrangements(9, 8), 362_880);
        assert_eq!(arrangements(9, 9), 362_880);
        assert_eq!(arrangements(3, 4), 0);
    }

    #[test]
    fn test_total_patterns() {
        assert_eq!(TOTAL_PATTERNS, 985_824);
    }

    #[test]
    fn test_group_action_is_free() {
        // No pattern of length >= 4 is fixed by a non-identity symmetry:
        // every such symmetry fixes at most 3 grid points.
        assert_eq!(DISTINCT_PATTERNS * NTRANSFORMS, TOTAL_PATTERNS);
    }
}
