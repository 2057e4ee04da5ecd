// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Problem 9: special Pythagorean triplet.

use crate::context::{Counters, SolveContext};
use crate::engine::{Outcome, Problem};
use crate::error::{EulerError, EulerResult};
use crate::triples::{find_scaled, generate_primitive_triples};
use tracing::debug;

/// a·b·c for the Pythagorean triple with a + b + c = `triples.target_sum`.
#[derive(Debug)]
pub struct SpecialPythagoreanTriplet;

impl Problem for SpecialPythagoreanTriplet {
    fn number(&self) -> u32 {
        9
    }

    fn solve(&mut self, ctx: &mut SolveContext) -> EulerResult<Outcome> {
        let target = ctx.config.triples.target_sum;
        let mut primitives = generate_primitive_triples(target);
        let found = find_scaled(primitives.by_ref(), target);

        ctx.statistics
            .add(Counters::TriplesGenerated, primitives.produced());
        ctx.statistics
            .add(Counters::BranchesPruned, primitives.pruned());

        match found {
            Some(triple) => {
                debug!(%triple, "found triple");
                let product = triple
                    .product()
                    .ok_or_else(|| EulerError::Overflow(format!("product of {}", triple)))?;
                Ok(Outcome::Solved(product))
            }
            None => Ok(Outcome::NoSolution),
        }
    }

    fn name(&self) -> &str {
        "Special Pythagorean triplet"
    }
}
