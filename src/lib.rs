// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration and classification of 3×3 pattern-lock gestures.
//!
//! A pattern is an ordered sequence of 4 to 9 distinct points on the grid
//!
//! ```text
//! 1 2 3
//! 4 5 6
//! 7 8 9
//! ```
//!
//! This crate lists every such pattern once per rotation/reflection class
//! and annotates each with its line length, segment kinds and jump
//! behaviour.
//!
//! # Architecture
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Precomputed once per process, read-only thereafter ([`memo`]):
//! - Distance matrix between grid points
//! - Jump table: which moves pass over which point
//! - Line-type table: straight, 45° diagonal, or knight-like diagonal
//!
//! ## Tier 2: Pipeline
//!
//! A single synchronous batch ([`catalog`]):
//!
//! 1. **Generator** ([`generator`]): backtracking over a used-points
//!    bitmask, 985,824 patterns
//! 2. **Symmetry reducer** ([`symmetry`]): canonical keys under the 8
//!    symmetries of the square; first occurrence of each class wins,
//!    leaving 123,228 patterns
//! 3. **Classifier** ([`classify`](mod@classify)): one [`ClassifiedRecord`] per survivor
//!
//! The [`shuffle`](mod@shuffle) and [`filter`] modules operate on the
//! finished records.
//!
//! # Parallelization
//!
//! With the `parallel` feature the generator runs one subtree per starting
//! point and concatenates them in ascending order, which reproduces the
//! sequential emission order. Classification is order-preserving, so the
//! output is identical either way.
//!
//! # Example
//!
//! ```no_run
//! use lockpattern_search::generate_classified_patterns;
//!
//! let records = generate_classified_patterns();
//! assert_eq!(records.len(), 123_228);
//! ```

pub mod catalog;
pub mod classify;
pub mod error;
pub mod filter;
pub mod generator;
pub mod geometry;
pub mod memo;
pub mod shuffle;
pub mod symmetry;

// Re-export commonly used types
pub use catalog::{generate_classified_patterns, Catalog};
pub use classify::{classify, ClassifiedRecord};
pub use error::PatternError;
pub use filter::{FilterConfig, LineLengthOrder};
pub use geometry::{GridPoint, Pattern};
pub use shuffle::{shuffle, shuffle_records};
