// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Problem 2: even Fibonacci numbers.

use crate::context::SolveContext;
use crate::engine::{Outcome, Problem};
use crate::error::EulerResult;
use crate::sequences::even_fibonacci_sum;

/// Sum of the even Fibonacci terms below `fibonacci.limit`.
#[derive(Debug)]
pub struct EvenFibonacciSum;

impl Problem for EvenFibonacciSum {
    fn number(&self) -> u32 {
        2
    }

    fn solve(&mut self, ctx: &mut SolveContext) -> EulerResult<Outcome> {
        Ok(Outcome::Solved(even_fibonacci_sum(ctx.config.fibonacci.limit)))
    }

    fn name(&self) -> &str {
        "Even Fibonacci numbers"
    }
}
