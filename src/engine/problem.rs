// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Problem trait for runnable puzzles.
//!
//! The engine works by running problems in sequence. Each problem reads its
//! parameters from the context, does its computation, and reports an
//! outcome. Problems may also record work counters in the context.
//!
//! # Example
//!
//! ```
//! use euler_search::engine::{Outcome, Problem};
//! use euler_search::context::SolveContext;
//! use euler_search::error::EulerResult;
//!
//! #[derive(Debug)]
//! struct SumBelowTen;
//!
//! impl Problem for SumBelowTen {
//!     fn number(&self) -> u32 {
//!         1
//!     }
//!
//!     fn solve(&mut self, _ctx: &mut SolveContext) -> EulerResult<Outcome> {
//!         Ok(Outcome::Solved((1..10).filter(|n| n % 3 == 0 || n % 5 == 0).sum()))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "Multiples of 3 or 5"
//!     }
//! }
//! ```

use crate::context::SolveContext;
use crate::error::EulerResult;
use std::fmt::{self, Debug};

/// Result of a successful run of a problem.
///
/// `NoSolution` is a normal outcome (for example, no Pythagorean triple has
/// perimeter 1001), distinct from the errors a problem can return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The answer.
    Solved(u64),

    /// The search completed without finding an answer.
    NoSolution,
}

impl Outcome {
    pub fn value(self) -> Option<u64> {
        match self {
            Outcome::Solved(value) => Some(value),
            Outcome::NoSolution => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Solved(value) => write!(f, "{}", value),
            Outcome::NoSolution => write!(f, "no solution"),
        }
    }
}

/// A puzzle the engine can run.
pub trait Problem: Debug {
    /// Project Euler problem number.
    fn number(&self) -> u32;

    /// Compute the answer using the parameters in `ctx.config`.
    ///
    /// Errors are for inputs the computation cannot handle (a bad digit
    /// file, a window larger than the digit sequence, overflow); an empty
    /// search is `Ok(Outcome::NoSolution)`.
    fn solve(&mut self, ctx: &mut SolveContext) -> EulerResult<Outcome>;

    /// Optional: Get a name for this problem (for reporting).
    ///
    /// Default implementation returns the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
