// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lazy enumeration of primitive Pythagorean triples.
//!
//! The generator walks the coprime-pair tree depth first with an explicit
//! stack. A node whose perimeter is above the bound is dropped together with
//! its whole subtree, since perimeters only grow going down the tree. The
//! work done is therefore proportional to the number of triples produced
//! plus the number of pruned frontier nodes (at most three per produced
//! triple).
//!
//! Output order is an artifact of the stack and carries no meaning.

use crate::triples::{CoprimePair, Triple};
use std::iter::FusedIterator;
use tracing::trace;

/// Start enumerating every primitive triple with a + b + c ≤ `max_sum`.
///
/// A bound of 0 (or anything below 12) gives an empty sequence rather than
/// an error. Each call starts a fresh, independent traversal.
///
/// # Example
///
/// ```
/// use euler_search::triples::{generate_primitive_triples, Triple};
///
/// let mut triples: Vec<Triple> = generate_primitive_triples(40).collect();
/// triples.sort();
/// assert_eq!(
///     triples,
///     vec![
///         Triple::new(3, 4, 5),
///         Triple::new(5, 12, 13),
///         Triple::new(8, 15, 17),
///     ]
/// );
/// ```
pub fn generate_primitive_triples(max_sum: u64) -> PrimitiveTriples {
    PrimitiveTriples::new(max_sum)
}

/// Iterator returned by [`generate_primitive_triples`].
#[derive(Debug, Clone)]
pub struct PrimitiveTriples {
    max_sum: u64,
    stack: Vec<CoprimePair>,
    produced: u64,
    pruned: u64,
}

impl PrimitiveTriples {
    pub fn new(max_sum: u64) -> Self {
        Self {
            max_sum,
            stack: vec![CoprimePair::ROOT],
            produced: 0,
            pruned: 0,
        }
    }

    /// Triples yielded so far.
    pub fn produced(&self) -> u64 {
        self.produced
    }

    /// Subtrees discarded so far because their root was over the bound.
    pub fn pruned(&self) -> u64 {
        self.pruned
    }
}

impl Iterator for PrimitiveTriples {
    type Item = Triple;

    fn next(&mut self) -> Option<Triple> {
        while let Some(pair) = self.stack.pop() {
            match pair.perimeter() {
                Some(sum) if sum <= self.max_sum => {
                    self.stack.extend(pair.children());
                    self.produced += 1;
                    return Some(pair.triple());
                }
                _ => {
                    trace!(%pair, max_sum = self.max_sum, "pruning subtree");
                    self.pruned += 1;
                }
            }
        }
        None
    }
}

impl FusedIterator for PrimitiveTriples {}
