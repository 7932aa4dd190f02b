// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Segment classification for every ordered pair of points.

use crate::geometry::constants::NPOINTS;
use crate::geometry::GridPoint;
use serde::Serialize;
use strum_macros::{AsRefStr, EnumCount as EnumCountMacro, EnumIter};

/// Kind of line drawn between two consecutive points.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumCountMacro, EnumIter, AsRefStr,
)]
#[repr(u8)]
pub enum LineType {
    /// Same row or same column.
    Straight,
    /// Equal row and column offsets: a true 45° diagonal.
    Diagonal45,
    /// Any other offset: the knight-like √5 diagonals.
    Diagonal,
}

impl LineType {
    /// Classify a segment by its absolute row and column offsets.
    ///
    /// A zero offset in either axis reads as straight, which includes the
    /// degenerate (0, 0) case of a point paired with itself.
    pub fn from_offsets(dr: usize, dc: usize) -> Self {
        if dr == 0 || dc == 0 {
            LineType::Straight
        } else if dr == dc {
            LineType::Diagonal45
        } else {
            LineType::Diagonal
        }
    }
}

/// Line-type lookup indexed by (from, to).
#[derive(Debug, Clone)]
pub struct LineTypeTable {
    types: [[LineType; NPOINTS]; NPOINTS],
}

impl LineTypeTable {
    pub fn initialize() -> Self {
        let mut types = [[LineType::Straight; NPOINTS]; NPOINTS];
        for from in GridPoint::all() {
            for to in GridPoint::all() {
                types[from.index()][to.index()] = LineType::from_offsets(
                    from.row().abs_diff(to.row()),
                    from.column().abs_diff(to.column()),
                );
            }
        }
        Self { types }
    }

    #[inline]
    pub fn get(&self, from: GridPoint, to: GridPoint) -> LineType {
        self.types[from.index()][to.index()]
    }
}
