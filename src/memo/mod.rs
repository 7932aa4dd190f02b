// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! MEMO data: immutable, precomputed geometry tables.
//!
//! All lookups used by the symmetry reducer and the classifier are built
//! once per process and read-only thereafter:
//! - Distance matrix (Euclidean distance between any two points)
//! - Jump table (does a move pass over a point, and which one)
//! - Line-type table (straight, 45° diagonal, or other diagonal)

pub mod distances;
pub mod jumps;
pub mod line_types;

pub use distances::DistanceMatrix;
pub use jumps::{JumpInfo, JumpTable, JUMP_MIDPOINTS};
pub use line_types::{LineType, LineTypeTable};

use std::sync::OnceLock;

/// Immutable precomputed geometry tables.
///
/// The three tables together are under 2 KB, so they live inline in one
/// struct behind a process-wide `OnceLock`.
#[derive(Debug, Clone)]
pub struct GeometryTables {
    pub distances: DistanceMatrix,
    pub jumps: JumpTable,
    pub line_types: LineTypeTable,
}

impl GeometryTables {
    /// Compute all tables.
    ///
    /// Prefer [`GeometryTables::get`], which computes them only once.
    pub fn new() -> Self {
        log::debug!("[GeometryTables] Initializing lookup tables...");

        let tables = Self {
            distances: DistanceMatrix::initialize(),
            jumps: JumpTable::initialize(),
            line_types: LineTypeTable::initialize(),
        };

        log::debug!(
            "[GeometryTables] Initialization complete ({} ordered jump pairs)",
            tables.jumps.jump_count()
        );
        tables
    }

    /// Process-wide shared tables, built on first use.
    pub fn get() -> &'static GeometryTables {
        static TABLES: OnceLock<GeometryTables> = OnceLock::new();
        TABLES.get_or_init(GeometryTables::new)
    }
}

impl Default for GeometryTables {
    fn default() -> Self {
        Self::new()
    }
}
