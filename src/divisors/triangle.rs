// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Divisor counts of triangle numbers.
//!
//! A number with prime factorization p₁^e₁ · p₂^e₂ · … has
//! (e₁ + 1)(e₂ + 1)… divisors: each divisor picks between 0 and eᵢ copies
//! of every pᵢ.
//!
//! The n-th triangle number is n(n + 1)/2. Rather than factoring it
//! directly, the factors of n and n + 1 (both small, and often already in
//! the cache) are merged and one 2 is removed.

use crate::divisors::FactorCache;
use crate::error::{EulerError, EulerResult};
use std::collections::BTreeMap;
use tracing::debug;

/// Prime → exponent.
pub type PrimeCounts = BTreeMap<u64, u32>;

/// The n-th triangle number, or `None` on overflow.
pub fn triangle_number(n: u64) -> Option<u64> {
    if n % 2 == 0 {
        (n / 2).checked_mul(n.checked_add(1)?)
    } else {
        n.checked_mul(n / 2 + 1)
    }
}

/// Group a factor list by prime.
pub fn factor_counts(factors: &[u64]) -> PrimeCounts {
    let mut counts = PrimeCounts::new();
    for &p in factors {
        *counts.entry(p).or_insert(0) += 1;
    }
    counts
}

/// Prime exponents of the n-th triangle number, for n ≥ 1.
pub fn triangle_factor_counts(n: u64, cache: &mut FactorCache) -> EulerResult<PrimeCounts> {
    if n == 0 {
        return Err(EulerError::invalid("triangle index must be positive"));
    }
    let next = n
        .checked_add(1)
        .ok_or_else(|| EulerError::Overflow(format!("triangle index {} + 1", n)))?;

    let mut counts = factor_counts(&cache.prime_factors(n));
    for p in cache.prime_factors(next) {
        *counts.entry(p).or_insert(0) += 1;
    }

    // one of n, n + 1 is even, so there is always a 2 to remove
    if let Some(twos) = counts.get_mut(&2) {
        *twos -= 1;
        if *twos == 0 {
            counts.remove(&2);
        }
    }
    Ok(counts)
}

/// Number of divisors from a prime factorization.
pub fn divisor_count(counts: &PrimeCounts) -> u64 {
    counts.values().map(|&e| e as u64 + 1).product()
}

/// Count divisors of `x` by trial division up to √x.
pub fn count_divisors_naive(x: u64) -> u64 {
    let mut count = 0;
    let mut y = 1u64;
    while y <= x / y {
        if x % y == 0 {
            count += if y == x / y { 1 } else { 2 };
        }
        y += 1;
    }
    count
}

/// A triangle number found by [`first_triangle_with_divisors_over`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriangleHit {
    /// n, for the n-th triangle number.
    pub index: u64,
    pub value: u64,
    pub divisors: u64,
}

/// First triangle number with more than `threshold` divisors.
pub fn first_triangle_with_divisors_over(
    threshold: u64,
    cache: &mut FactorCache,
) -> EulerResult<TriangleHit> {
    let mut n = 1u64;
    loop {
        let divisors = divisor_count(&triangle_factor_counts(n, cache)?);
        if divisors > threshold {
            let value = triangle_number(n)
                .ok_or_else(|| EulerError::Overflow(format!("triangle number {}", n)))?;
            debug!(index = n, value, divisors, "found triangle number");
            return Ok(TriangleHit {
                index: n,
                value,
                divisors,
            });
        }
        n = n
            .checked_add(1)
            .ok_or_else(|| EulerError::Overflow("triangle index".to_string()))?;
    }
}
