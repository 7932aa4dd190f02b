// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! In-place uniform shuffle (Durstenfeld's Fisher–Yates).

use crate::classify::ClassifiedRecord;
use rand::Rng;

/// Shuffle `items` in place with randomness from `rng`.
///
/// Walks from the last index down, swapping each slot with a uniformly
/// chosen slot at or below it. Every permutation is equally likely.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for index in (1..items.len()).rev() {
        let other = rng.gen_range(0..=index);
        items.swap(index, other);
    }
}

/// Shuffle records using the thread-local generator.
pub fn shuffle_records(records: &mut [ClassifiedRecord]) {
    shuffle(records, &mut rand::thread_rng());
}
