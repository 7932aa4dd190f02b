// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Canonical forms of patterns under the grid symmetries, and
//! deduplication by canonical key.

use crate::geometry::constants::DISTINCT_PATTERNS;
use crate::geometry::Pattern;
use crate::symmetry::Transform;
use rustc_hash::FxHashSet;
use strum::IntoEnumIterator;

/// Image of `pattern` under one symmetry: each point mapped, order unchanged.
pub fn transform_pattern(pattern: &Pattern, transform: Transform) -> Pattern {
    pattern.map_points(|point| transform.apply(point))
}

/// The lexicographically smallest image of `pattern` under the 8 symmetries.
///
/// Algorithm:
/// 1. Start with the identity image as the best candidate
/// 2. For each remaining symmetry in [`Transform`] order, build the image
/// 3. Replace the best only if the image is strictly smaller, comparing
///    element by element up to the first difference
///
/// Ties therefore keep the earliest symmetry.
///
/// # Examples
///
/// ```
/// use lockpattern_search::geometry::Pattern;
/// use lockpattern_search::symmetry::canonical_form;
///
/// // 9-8-7-4 is the 180° rotation of 1-2-3-6.
/// let pattern = Pattern::new(&[9, 8, 7, 4]).unwrap();
/// assert_eq!(canonical_form(&pattern).to_string(), "1-2-3-6");
/// ```
pub fn canonical_form(pattern: &Pattern) -> Pattern {
    let mut best = transform_pattern(pattern, Transform::Identity);
    for transform in Transform::iter().skip(1) {
        let candidate = transform_pattern(pattern, transform);
        if candidate.points() < best.points() {
            best = candidate;
        }
    }
    best
}

/// Deduplication key: the canonical form packed into an integer.
///
/// Points are read as decimal digits, so 1-2-3-6 packs to 1236. No digit
/// is zero, which keeps keys of different lengths apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalKey(u32);

impl CanonicalKey {
    /// Key of the equivalence class containing `pattern`.
    pub fn of(pattern: &Pattern) -> Self {
        Self::pack(&canonical_form(pattern))
    }

    /// Pack a pattern as-is, without canonicalizing it.
    pub fn pack(pattern: &Pattern) -> Self {
        Self(
            pattern
                .points()
                .iter()
                .fold(0u32, |acc, point| acc * 10 + point.value() as u32),
        )
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

/// Keep the first pattern of each symmetry class, in input order.
///
/// Survivors keep their original orientation; the canonical form is only
/// used to build the key.
pub fn deduplicate<I>(patterns: I) -> Vec<Pattern>
where
    I: IntoIterator<Item = Pattern>,
{
    let mut seen: FxHashSet<CanonicalKey> =
        FxHashSet::with_capacity_and_hasher(DISTINCT_PATTERNS, Default::default());
    let mut unique = Vec::with_capacity(DISTINCT_PATTERNS);
    for pattern in patterns {
        if seen.insert(CanonicalKey::of(&pattern)) {
            unique.push(pattern);
        }
    }
    log::debug!("[SymmetryReducer] Retained {} patterns", unique.len());
    unique
}
