// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end checks over the full catalog.

mod common;

use common::{catalog, pattern};
use lockpattern_search::catalog::Counters;
use lockpattern_search::generator::{count_by_length, generate_patterns, generate_patterns_from};
use lockpattern_search::geometry::{
    GridPoint, PointSet, DISTINCT_PATTERNS, MAX_PATTERN_LENGTH, MIN_PATTERN_LENGTH, TOTAL_PATTERNS,
};
use lockpattern_search::symmetry::CanonicalKey;
use lockpattern_search::{generate_classified_patterns, ClassifiedRecord};
use std::collections::HashSet;

#[test]
fn test_raw_generation() {
    let patterns = generate_patterns();
    assert_eq!(patterns.len(), TOTAL_PATTERNS);
    assert_eq!(
        count_by_length(&patterns),
        [0, 0, 0, 0, 3024, 15120, 60480, 181_440, 362_880, 362_880]
    );

    for p in &patterns {
        assert!((MIN_PATTERN_LENGTH..=MAX_PATTERN_LENGTH).contains(&p.len()));
        assert_eq!(PointSet::from_points(p.points()).len(), p.len(), "{}", p);
    }

    // Every ordered sequence appears exactly once.
    let keys: HashSet<CanonicalKey> = patterns.iter().map(CanonicalKey::pack).collect();
    assert_eq!(keys.len(), TOTAL_PATTERNS);
}

#[test]
fn test_partitions_concatenate_to_sequential_order() {
    let sequential = generate_patterns();
    let partitioned: Vec<_> = GridPoint::all().flat_map(generate_patterns_from).collect();
    assert_eq!(partitioned, sequential);
}

#[test]
fn test_catalog_counts() {
    let catalog = catalog();
    assert!(catalog.diagnostics.is_empty());
    assert_eq!(catalog.len(), DISTINCT_PATTERNS);

    let stats = &catalog.statistics;
    assert_eq!(stats.get(Counters::GeneratedPatterns), TOTAL_PATTERNS as u64);
    assert_eq!(stats.get(Counters::RetainedPatterns), DISTINCT_PATTERNS as u64);
    assert_eq!(
        stats.get(Counters::DuplicatePatterns),
        (TOTAL_PATTERNS - DISTINCT_PATTERNS) as u64
    );
    let normal = catalog.records.iter().filter(|r| r.normal_style).count();
    assert_eq!(stats.get(Counters::NormalStylePatterns), normal as u64);
}

#[test]
fn test_canonical_keys_unique() {
    let keys: HashSet<CanonicalKey> = catalog()
        .records
        .iter()
        .map(|r| CanonicalKey::of(&r.pattern))
        .collect();
    assert_eq!(keys.len(), DISTINCT_PATTERNS);
}

#[test]
fn test_survivors_keep_first_occurrence_orientation() {
    let records = &catalog().records;
    // The very first generated pattern is canonical and survives first.
    assert_eq!(records[0].pattern, pattern(&[1, 2, 3, 4]));
    // 9-8-7-4 is a rotation of 1-2-3-6, which is generated earlier.
    assert!(!records.iter().any(|r| r.pattern == pattern(&[9, 8, 7, 4])));
    assert!(records.iter().any(|r| r.pattern == pattern(&[1, 2, 3, 6])));
}

#[test]
fn test_record_invariants() {
    for r in &catalog().records {
        assert_eq!(r.points, r.pattern.len());
        assert_eq!(
            r.straight_lines + r.diagonal45_lines + r.diagonal_lines,
            r.points - 1,
            "{}",
            r.pattern
        );
        assert!(r.skip_point_nums < r.points);
        assert!(r.line_length >= (r.points - 1) as f64);
    }
}

#[test]
fn test_four_corners_record() {
    let record: &ClassifiedRecord = catalog()
        .records
        .iter()
        .find(|r| r.pattern == pattern(&[1, 3, 7, 9]))
        .expect("1-3-7-9 is canonical and must survive");
    assert!((record.line_length - 6.828_427_124_746_19).abs() < 1e-12);
    assert_eq!(record.straight_lines, 2);
    assert_eq!(record.diagonal45_lines, 1);
    assert_eq!(record.diagonal_lines, 0);
    assert_eq!(record.skip_point_nums, 3);
    assert!(!record.normal_style);
}

#[test]
fn test_runs_are_identical() {
    let first = generate_classified_patterns();
    let second = generate_classified_patterns();
    assert_eq!(first.len(), second.len());
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
