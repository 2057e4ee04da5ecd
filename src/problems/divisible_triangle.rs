// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Problem 12: highly divisible triangular number.

use crate::context::{Counters, SolveContext};
use crate::divisors::first_triangle_with_divisors_over;
use crate::engine::{Outcome, Problem};
use crate::error::EulerResult;

/// First triangle number with more than `triangle.divisor_threshold`
/// divisors. Uses (and grows) the context's factor cache.
#[derive(Debug)]
pub struct HighlyDivisibleTriangle;

impl Problem for HighlyDivisibleTriangle {
    fn number(&self) -> u32 {
        12
    }

    fn solve(&mut self, ctx: &mut SolveContext) -> EulerResult<Outcome> {
        let (hits, misses) = (ctx.factors.hits(), ctx.factors.misses());
        let result =
            first_triangle_with_divisors_over(ctx.config.triangle.divisor_threshold, &mut ctx.factors);

        ctx.statistics
            .add(Counters::FactorCacheHits, ctx.factors.hits() - hits);
        ctx.statistics
            .add(Counters::FactorCacheMisses, ctx.factors.misses() - misses);

        Ok(Outcome::Solved(result?.value))
    }

    fn name(&self) -> &str {
        "Highly divisible triangular number"
    }
}
