// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use euler_search::triples::{generate_primitive_triples, Triple};
use std::collections::BTreeSet;

/// Primitive triples up to `max_sum`, as an ordered set.
pub fn triple_set(max_sum: u64) -> BTreeSet<Triple> {
    generate_primitive_triples(max_sum).collect()
}

/// Primitive triples up to `max_sum`, by checking every (a, b) pair.
///
/// Quadratic, for cross-checking small bounds only.
pub fn exhaustive_primitive_triples(max_sum: u64) -> BTreeSet<Triple> {
    let mut found = BTreeSet::new();
    for a in 1..max_sum {
        for b in (a + 1)..max_sum {
            let c2 = a * a + b * b;
            let c = (c2 as f64).sqrt().round() as u64;
            if c * c != c2 || a + b + c > max_sum {
                continue;
            }
            let triple = Triple::new(a, b, c);
            if triple.is_primitive() {
                found.insert(triple);
            }
        }
    }
    found
}
