// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pythagorean triples.

use crate::triples::pair::gcd;
use std::fmt;

/// A triple of positive integers, normally with a < b < c and a² + b² = c².
///
/// Values produced by this crate always satisfy those conditions; a triple
/// built by hand can be checked with [`is_pythagorean`](Self::is_pythagorean).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triple {
    pub a: u64,
    pub b: u64,
    pub c: u64,
}

impl Triple {
    pub const fn new(a: u64, b: u64, c: u64) -> Self {
        Self { a, b, c }
    }

    /// a + b + c. The total must fit in u64; use [`Triple::checked_sum`]
    /// for triples built from untrusted values.
    pub fn sum(&self) -> u64 {
        self.a + self.b + self.c
    }

    /// a + b + c, or `None` if it overflows.
    pub fn checked_sum(&self) -> Option<u64> {
        self.a.checked_add(self.b)?.checked_add(self.c)
    }

    /// a·b·c, or `None` if it overflows.
    pub fn product(&self) -> Option<u64> {
        self.a.checked_mul(self.b)?.checked_mul(self.c)
    }

    /// (k·a, k·b, k·c), or `None` if any term overflows.
    pub fn scaled(&self, k: u64) -> Option<Triple> {
        Some(Triple::new(
            self.a.checked_mul(k)?,
            self.b.checked_mul(k)?,
            self.c.checked_mul(k)?,
        ))
    }

    /// 0 < a < b < c and a² + b² = c².
    pub fn is_pythagorean(&self) -> bool {
        let (a, b, c) = (self.a as u128, self.b as u128, self.c as u128);
        0 < a && a < b && b < c && a * a + b * b == c * c
    }

    /// A Pythagorean triple whose legs share no common factor.
    pub fn is_primitive(&self) -> bool {
        self.is_pythagorean() && gcd(self.a, self.b) == 1
    }
}

impl From<Triple> for (u64, u64, u64) {
    fn from(t: Triple) -> Self {
        (t.a, t.b, t.c)
    }
}

impl fmt::Display for Triple {
    /// Format a triple as "(a, b, c)".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.a, self.b, self.c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_sum() {
        assert_eq!(Triple::new(3, 4, 5).checked_sum(), Some(12));
        assert_eq!(Triple::new(u64::MAX, 1, 1).checked_sum(), None);
        assert_eq!(Triple::new(u64::MAX - 2, 1, 1).checked_sum(), Some(u64::MAX));
    }

    #[test]
    fn test_sum_and_product() {
        let t = Triple::new(3, 4, 5);
        assert_eq!(t.sum(), 12);
        assert_eq!(t.product(), Some(60));
    }

    #[test]
    fn test_product_overflow() {
        let t = Triple::new(u64::MAX / 2, u64::MAX / 2, u64::MAX / 2);
        assert_eq!(t.product(), None);
    }

    #[test]
    fn test_scaled() {
        assert_eq!(Triple::new(3, 4, 5).scaled(2), Some(Triple::new(6, 8, 10)));
        assert_eq!(Triple::new(3, 4, 5).scaled(u64::MAX), None);
    }

    #[test]
    fn test_is_pythagorean() {
        assert!(Triple::new(3, 4, 5).is_pythagorean());
        assert!(Triple::new(6, 8, 10).is_pythagorean());
        assert!(!Triple::new(4, 3, 5).is_pythagorean()); // legs out of order
        assert!(!Triple::new(2, 3, 4).is_pythagorean());
        assert!(!Triple::new(0, 1, 1).is_pythagorean());
    }

    #[test]
    fn test_is_primitive() {
        assert!(Triple::new(3, 4, 5).is_primitive());
        assert!(Triple::new(20, 21, 29).is_primitive());
        assert!(!Triple::new(6, 8, 10).is_primitive());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Triple::new(5, 12, 13)), "(5, 12, 13)");
    }
}
