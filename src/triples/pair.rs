// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Coprime pairs (m, n), the nodes of the primitive triple tree.
//!
//! Every pair with m > n > 0, gcd(m, n) = 1 and m, n not both odd appears
//! exactly once in the ternary tree rooted at (2, 1), and maps to exactly
//! one primitive Pythagorean triple:
//!
//! ```text
//! a = m² - n²    b = 2mn    c = m² + n²
//! ```
//!
//! # Examples
//!
//! ```
//! use euler_search::triples::{CoprimePair, Triple};
//!
//! let root = CoprimePair::ROOT;
//! assert_eq!(root.triple(), Triple::new(3, 4, 5));
//! assert_eq!(root.perimeter(), Some(12));
//!
//! assert!(CoprimePair::new(3, 1).is_none()); // both odd
//! assert!(CoprimePair::new(4, 2).is_none()); // not coprime
//! ```

use crate::triples::Triple;
use std::fmt;

/// Greatest common divisor by Euclid's algorithm. `gcd(0, 0) == 0`.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// A generator pair for one primitive Pythagorean triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoprimePair {
    m: u64,
    n: u64,
}

impl CoprimePair {
    /// Root of the even-odd coprime tree.
    pub const ROOT: CoprimePair = CoprimePair { m: 2, n: 1 };

    /// Validate and build a pair. Returns `None` unless m > n > 0, the two
    /// are coprime, and they are not both odd.
    pub fn new(m: u64, n: u64) -> Option<Self> {
        if n == 0 || m <= n || gcd(m, n) != 1 || (m % 2 == 1 && n % 2 == 1) {
            return None;
        }
        Some(Self { m, n })
    }

    pub fn m(self) -> u64 {
        self.m
    }

    pub fn n(self) -> u64 {
        self.n
    }

    /// The three children of this node: (2m-n, m), (2m+n, m), (m+2n, n).
    ///
    /// Each child has a strictly larger perimeter than its parent, which is
    /// what lets the generator drop a whole subtree once a node is over the
    /// bound.
    pub fn children(self) -> [CoprimePair; 3] {
        let CoprimePair { m, n } = self;
        [
            CoprimePair { m: 2 * m - n, n: m },
            CoprimePair { m: 2 * m + n, n: m },
            CoprimePair { m: m + 2 * n, n },
        ]
    }

    /// a + b + c for this pair's triple, which simplifies to 2m(m + n).
    ///
    /// `None` when the value does not fit in a u64; such a node is above any
    /// bound a caller can express.
    pub fn perimeter(self) -> Option<u64> {
        self.m
            .checked_add(self.n)
            .and_then(|s| s.checked_mul(self.m))
            .and_then(|s| s.checked_mul(2))
    }

    /// The primitive triple for this pair, legs ordered so a < b.
    ///
    /// Callers should check [`perimeter`](Self::perimeter) first: if the
    /// perimeter fits in a u64, so does every term computed here.
    pub fn triple(self) -> Triple {
        let m2 = self.m * self.m;
        let n2 = self.n * self.n;
        let odd_leg = m2 - n2;
        let even_leg = 2 * self.m * self.n;
        if odd_leg < even_leg {
            Triple::new(odd_leg, even_leg, m2 + n2)
        } else {
            Triple::new(even_leg, odd_leg, m2 + n2)
        }
    }
}

impl fmt::Display for CoprimePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.m, self.n)
    }
}
