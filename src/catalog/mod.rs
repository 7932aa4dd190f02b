// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The classified pattern catalog.
//!
//! Builds the full record set in one synchronous batch:
//!
//! 1. **Generator**: every pattern of length 4..=9 (985,824)
//! 2. **Symmetry reducer**: first pattern of each symmetry class (123,228)
//! 3. **Classifier**: features of each survivor, in survivor order
//!
//! The result depends on nothing but the fixed geometry tables, so two
//! builds always produce identical records.

pub mod statistics;

pub use statistics::{Counters, Statistics};

use crate::classify::{classify, ClassifiedRecord};
use crate::error::PatternError;
use crate::generator::check_generated_count;
use crate::geometry::Pattern;
use crate::symmetry::deduplicate;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Classified records plus what was observed while building them.
#[derive(Debug)]
pub struct Catalog {
    /// One record per symmetry class, in first-occurrence order.
    pub records: Vec<ClassifiedRecord>,
    pub statistics: Statistics,
    /// Non-fatal problems, such as a generator count mismatch.
    pub diagnostics: Vec<PatternError>,
}

impl Catalog {
    /// Run generation, symmetry reduction and classification.
    pub fn build() -> Self {
        log::info!("[Catalog] Building pattern catalog...");

        let mut statistics = Statistics::new();
        let mut diagnostics = Vec::new();

        let patterns = generate();
        let generated = patterns.len();
        statistics.add(Counters::GeneratedPatterns, generated as u64);
        if let Err(mismatch) = check_generated_count(generated) {
            diagnostics.push(mismatch);
        }

        let survivors = deduplicate(patterns);
        statistics.add(Counters::RetainedPatterns, survivors.len() as u64);
        statistics.add(
            Counters::DuplicatePatterns,
            (generated - survivors.len()) as u64,
        );

        let records = classify_all(&survivors);
        for record in &records {
            if record.normal_style {
                statistics.increment(Counters::NormalStylePatterns);
            }
            statistics.add(Counters::SkipTransitions, record.skip_point_nums as u64);
        }

        log::info!(
            "[Catalog] Build complete ({} records, {} diagnostics)",
            records.len(),
            diagnostics.len()
        );
        log::debug!("[Catalog] {}", statistics);

        Self {
            records,
            statistics,
            diagnostics,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(not(feature = "parallel"))]
fn generate() -> Vec<Pattern> {
    crate::generator::generate_patterns()
}

#[cfg(feature = "parallel")]
fn generate() -> Vec<Pattern> {
    crate::generator::generate_patterns_parallel()
}

/// Classify every pattern, preserving order.
pub fn classify_all(patterns: &[Pattern]) -> Vec<ClassifiedRecord> {
    #[cfg(feature = "parallel")]
    {
        patterns.par_iter().map(classify).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        patterns.iter().map(classify).collect()
    }
}

/// Build the catalog and return only its records.
///
/// Returns 123,228 records. A generator count mismatch is logged as a
/// warning; use [`Catalog::build`] to inspect it.
pub fn generate_classified_patterns() -> Vec<ClassifiedRecord> {
    Catalog::build().records
}
