// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Property tests for canonicalization and classification.

mod common;

use lockpattern_search::classify::classify;
use lockpattern_search::geometry::{Pattern, MAX_PATTERN_LENGTH, MIN_PATTERN_LENGTH};
use lockpattern_search::symmetry::{canonical_form, transform_pattern, CanonicalKey, Transform};
use proptest::prelude::*;
use strum::IntoEnumIterator;

/// Any valid pattern: a random ordering of 1..=9, truncated to 4..=9 points.
fn any_pattern() -> impl Strategy<Value = Pattern> {
    (
        Just((1u8..=9).collect::<Vec<u8>>()).prop_shuffle(),
        MIN_PATTERN_LENGTH..=MAX_PATTERN_LENGTH,
    )
        .prop_map(|(points, len)| Pattern::new(&points[..len]).unwrap())
}

proptest! {
    #[test]
    fn key_is_invariant_under_every_transform(p in any_pattern()) {
        let key = CanonicalKey::of(&p);
        for t in Transform::iter() {
            prop_assert_eq!(CanonicalKey::of(&transform_pattern(&p, t)), key);
        }
    }

    #[test]
    fn canonical_form_is_idempotent(p in any_pattern()) {
        let canonical = canonical_form(&p);
        prop_assert_eq!(canonical_form(&canonical), canonical);
    }

    #[test]
    fn canonical_form_is_an_image(p in any_pattern()) {
        let canonical = canonical_form(&p);
        prop_assert!(Transform::iter().any(|t| transform_pattern(&p, t) == canonical));
        prop_assert!(canonical.points() <= p.points());
    }

    #[test]
    fn features_are_invariant_under_symmetry(p in any_pattern()) {
        let record = classify(&p);
        for t in Transform::iter() {
            let image = classify(&transform_pattern(&p, t));
            prop_assert_eq!(image.normal_style, record.normal_style);
            prop_assert_eq!(image.skip_point_nums, record.skip_point_nums);
            prop_assert_eq!(image.straight_lines, record.straight_lines);
            prop_assert_eq!(image.diagonal45_lines, record.diagonal45_lines);
            prop_assert_eq!(image.diagonal_lines, record.diagonal_lines);
            prop_assert!((image.line_length - record.line_length).abs() < 1e-9);
        }
    }

    #[test]
    fn segment_counts_sum_to_length(p in any_pattern()) {
        let record = classify(&p);
        prop_assert_eq!(
            record.straight_lines + record.diagonal45_lines + record.diagonal_lines,
            p.len() - 1
        );
    }
}

#[test]
fn test_transforms_of_corner_pattern() {
    let p = common::pattern(&[1, 3, 7, 9]);
    let images: Vec<String> = Transform::iter()
        .map(|t| transform_pattern(&p, t).to_string())
        .collect();
    assert_eq!(
        images,
        vec![
            "1-3-7-9", "3-9-1-7", "9-7-3-1", "7-1-9-3", "3-1-9-7", "9-3-7-1", "7-9-1-3",
            "1-7-3-9",
        ]
    );
    assert_eq!(canonical_form(&p).to_string(), "1-3-7-9");
}
