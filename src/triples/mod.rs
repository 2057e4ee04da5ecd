// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Primitive Pythagorean triples and perimeter search.
//!
//! This module contains:
//! - CoprimePair: nodes of the ternary coprime tree rooted at (2, 1)
//! - Triple: an (a, b, c) Pythagorean triple
//! - PrimitiveTriples: bounded depth-first enumeration of the tree
//! - Perimeter search, fast (via primitives) and brute force

pub mod generator;
pub mod pair;
pub mod search;
pub mod triple;

pub use generator::{generate_primitive_triples, PrimitiveTriples};
pub use pair::{gcd, CoprimePair};
pub use search::{
    brute_force_triple_with_sum, find_scaled, scale_to_sum, triple_with_target_sum,
};
pub use triple::Triple;
