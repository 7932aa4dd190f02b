// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Jump (skip) classification for every ordered pair of points.
//!
//! A jump is a straight move across three points in a row that passes
//! over the middle one, e.g. 1→3 passes over 2. There are exactly eight
//! such unordered pairs on a 3×3 grid; every other move is a plain
//! transition between neighbours or a knight-like move with nothing
//! underneath.

use crate::geometry::constants::NPOINTS;
use crate::geometry::GridPoint;

/// The eight jump pairs and the point each passes over: (a, b, midpoint).
pub const JUMP_MIDPOINTS: [(u8, u8, u8); 8] = [
    (1, 3, 2),
    (1, 7, 4),
    (1, 9, 5),
    (2, 8, 5),
    (3, 7, 5),
    (3, 9, 6),
    (4, 6, 5),
    (7, 9, 8),
];

/// Jump classification of one ordered transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpInfo {
    /// Whether the move passes over another point.
    pub is_jump: bool,
    /// The point passed over, when there is one.
    pub midpoint: Option<GridPoint>,
}

impl JumpInfo {
    /// A transition that passes over nothing.
    pub const NONE: JumpInfo = JumpInfo {
        is_jump: false,
        midpoint: None,
    };

    /// A transition passing over `midpoint`.
    pub fn over(midpoint: GridPoint) -> Self {
        Self {
            is_jump: true,
            midpoint: Some(midpoint),
        }
    }
}

/// Jump lookup indexed by (from, to).
#[derive(Debug, Clone)]
pub struct JumpTable {
    jumps: [[JumpInfo; NPOINTS]; NPOINTS],
}

impl JumpTable {
    pub fn initialize() -> Self {
        let mut jumps = [[JumpInfo::NONE; NPOINTS]; NPOINTS];
        for &(a, b, mid) in JUMP_MIDPOINTS.iter() {
            let (a, b) = (GridPoint::new(a), GridPoint::new(b));
            let info = JumpInfo::over(GridPoint::new(mid));
            jumps[a.index()][b.index()] = info;
            jumps[b.index()][a.index()] = info;
        }
        Self { jumps }
    }

    /// Jump classification of the move `from` → `to`.
    #[inline]
    pub fn get(&self, from: GridPoint, to: GridPoint) -> JumpInfo {
        self.jumps[from.index()][to.index()]
    }

    /// Number of ordered pairs classified as jumps.
    pub fn jump_count(&self) -> usize {
        self.jumps.iter().flatten().filter(|info| info.is_jump).count()
    }
}
