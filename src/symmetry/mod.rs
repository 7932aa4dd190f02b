// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symmetry reduction of patterns under the dihedral group.
//!
//! Two patterns are equivalent when one is a rotation or reflection of the
//! other. This module picks one representative per equivalence class.
//!
//! ## Module Structure
//!
//! - `dihedral`: The 8 grid symmetries and their point maps
//! - `canonical`: Canonical forms, canonical keys and deduplication
//! - `mod`: Public API and re-exports

pub mod canonical;
pub mod dihedral;

// Re-export main types and constants
pub use canonical::{canonical_form, deduplicate, transform_pattern, CanonicalKey};
pub use dihedral::{Transform, DIHEDRAL_GROUP};
