// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Euclidean distances between grid points.
//!
//! Points sit on a unit-spaced 3×3 lattice, so every distance is one of
//! 0, 1, √2, 2, √5 or 2√2. Entries are computed from the coordinates
//! rather than written out, which keeps them exact to the last bit.

use crate::geometry::constants::NPOINTS;
use crate::geometry::GridPoint;

/// Symmetric NPOINTS×NPOINTS table of distances.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    distances: [[f64; NPOINTS]; NPOINTS],
}

impl DistanceMatrix {
    pub fn initialize() -> Self {
        let mut distances = [[0.0; NPOINTS]; NPOINTS];
        for from in GridPoint::all() {
            for to in GridPoint::all() {
                let dr = from.row().abs_diff(to.row());
                let dc = from.column().abs_diff(to.column());
                distances[from.index()][to.index()] = ((dr * dr + dc * dc) as f64).sqrt();
            }
        }
        Self { distances }
    }

    /// Distance between two points.
    #[inline]
    pub fn get(&self, from: GridPoint, to: GridPoint) -> f64 {
        self.distances[from.index()][to.index()]
    }
}
