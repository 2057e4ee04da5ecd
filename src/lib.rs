// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Searches and scans behind Project Euler problems 2, 8, 9 and 12.
//!
//! # Core algorithms
//!
//! ## Primitive triple generation
//!
//! Every primitive Pythagorean triple comes from exactly one coprime pair
//! (m, n) with m > n and m, n not both odd, and those pairs form a ternary
//! tree rooted at (2, 1). [`triples::generate_primitive_triples`] walks the
//! tree with an explicit stack and drops any subtree whose root is already
//! over the perimeter bound. [`triples::triple_with_target_sum`] builds on
//! it: a triple with perimeter n exists exactly when some primitive's
//! perimeter divides n.
//!
//! ## Sliding-window product
//!
//! [`digits::max_window_product`] finds the largest product of n adjacent
//! digits in one linear pass, keeping a running product of the window's
//! nonzero digits and a count of its zeros.
//!
//! # Supporting pieces
//!
//! - `sequences`: Fibonacci terms (problem 2)
//! - `divisors`: memoized factorization and triangle divisor counts (problem 12)
//! - `problems`: the four puzzles as [`Problem`]s
//! - `engine`: runs problems against a [`SolveContext`]
//! - `config`: TOML configuration of every problem parameter
//!
//! All computations are synchronous and independent; the only state that
//! outlives a call is what a caller keeps in its own `SolveContext`.

pub mod config;
pub mod context;
pub mod digits;
pub mod divisors;
pub mod engine;
pub mod error;
pub mod problems;
pub mod sequences;
pub mod triples;

// Re-export commonly used types
pub use config::SolverConfig;
pub use context::SolveContext;
pub use digits::max_window_product;
pub use engine::{EngineBuilder, Outcome, Problem, SolveEngine, SolveReport};
pub use error::{EulerError, EulerResult};
pub use triples::{generate_primitive_triples, triple_with_target_sum, Triple};
