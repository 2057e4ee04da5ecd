// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Prime factorization by trial division, memoized per odd cofactor.

use std::collections::HashMap;
use tracing::trace;

/// Memo of odd-number factorizations.
///
/// Owned by the computation that uses it (see `SolveContext`), so separate
/// computations never share state unless they share the cache explicitly.
#[derive(Debug, Default, Clone)]
pub struct FactorCache {
    odd: HashMap<u64, Vec<u64>>,
    hits: u64,
    misses: u64,
}

impl FactorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prime factors of `n` in ascending order, with multiplicity.
    ///
    /// `prime_factors(0)` and `prime_factors(1)` are both empty.
    pub fn prime_factors(&mut self, mut n: u64) -> Vec<u64> {
        let mut factors = Vec::new();
        if n == 0 {
            return factors;
        }
        while n % 2 == 0 {
            factors.push(2);
            n /= 2;
        }
        if n > 1 {
            factors.extend(self.odd_prime_factors(n));
        }
        factors
    }

    fn odd_prime_factors(&mut self, n: u64) -> Vec<u64> {
        if let Some(factors) = self.odd.get(&n) {
            self.hits += 1;
            return factors.clone();
        }
        self.misses += 1;

        let mut factor = 3;
        let factors = loop {
            if factor > n / factor {
                // no factor up to √n: prime
                break vec![n];
            }
            if n % factor == 0 {
                let mut factors = vec![factor];
                factors.extend(self.odd_prime_factors(n / factor));
                break factors;
            }
            factor += 2;
        };
        trace!(n, ?factors, "factored");
        self.odd.insert(n, factors.clone());
        factors
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Number of odd values with a stored factorization.
    pub fn len(&self) -> usize {
        self.odd.len()
    }

    pub fn is_empty(&self) -> bool {
        self.odd.is_empty()
    }
}
