// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use lockpattern_search::{Catalog, Pattern};
use std::sync::OnceLock;

/// Build a pattern from literal point numbers.
pub fn pattern(values: &[u8]) -> Pattern {
    Pattern::new(values).unwrap()
}

/// The full catalog, built once per test binary.
pub fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(Catalog::build)
}
