// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The dihedral group D_4 acting on grid points.
//!
//! Each element is a bijection on 1..=9 derived from (row, column)
//! coordinates. Rotations are clockwise; the reflection mirrors left and
//! right. The last three elements apply the reflection first and then the
//! rotation.

use crate::geometry::constants::{GRID_SIDE, NPOINTS, NTRANSFORMS};
use crate::geometry::GridPoint;
use strum_macros::{AsRefStr, EnumCount as EnumCountMacro, EnumIter};

const LAST: usize = GRID_SIDE - 1;

/// One of the 8 symmetries of the grid.
///
/// Variant order is the evaluation order of canonicalization: the identity
/// comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCountMacro, EnumIter, AsRefStr)]
#[repr(u8)]
pub enum Transform {
    Identity,
    Rotate90,
    Rotate180,
    Rotate270,
    Flip,
    FlipRotate90,
    FlipRotate180,
    FlipRotate270,
}

impl Transform {
    /// Image of a point under this symmetry.
    #[inline]
    pub fn apply(self, point: GridPoint) -> GridPoint {
        GridPoint::from_index(DIHEDRAL_GROUP[self as usize][point.index()] as usize - 1)
    }
}

// Index-level maps on (row, column) = (i / 3, i % 3).

/// (r, c) → (c, 2 − r)
const fn rotate90(i: usize) -> usize {
    let (r, c) = (i / GRID_SIDE, i % GRID_SIDE);
    c * GRID_SIDE + (LAST - r)
}

/// (r, c) → (2 − r, 2 − c)
const fn rotate180(i: usize) -> usize {
    let (r, c) = (i / GRID_SIDE, i % GRID_SIDE);
    (LAST - r) * GRID_SIDE + (LAST - c)
}

/// (r, c) → (2 − c, r)
const fn rotate270(i: usize) -> usize {
    let (r, c) = (i / GRID_SIDE, i % GRID_SIDE);
    (LAST - c) * GRID_SIDE + r
}

/// (r, c) → (r, 2 − c)
const fn flip(i: usize) -> usize {
    let (r, c) = (i / GRID_SIDE, i % GRID_SIDE);
    r * GRID_SIDE + (LAST - c)
}

const fn point_map(transform: usize) -> [u8; NPOINTS] {
    let mut map = [0u8; NPOINTS];
    let mut i = 0;
    while i < NPOINTS {
        let image = match transform {
            0 => i,
            1 => rotate90(i),
            2 => rotate180(i),
            3 => rotate270(i),
            4 => flip(i),
            5 => rotate90(flip(i)),
            6 => rotate180(flip(i)),
            _ => rotate270(flip(i)),
        };
        map[i] = (image + 1) as u8;
        i += 1;
    }
    map
}

/// Point maps for every [`Transform`], in variant order.
///
/// Row `t` column `i` holds the image of point `i + 1` under transform `t`.
pub const DIHEDRAL_GROUP: [[u8; NPOINTS]; NTRANSFORMS] = [
    point_map(0),
    point_map(1),
    point_map(2),
    point_map(3),
    point_map(4),
    point_map(5),
    point_map(6),
    point_map(7),
];
