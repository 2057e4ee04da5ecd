// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fibonacci numbers.
//!
//! # Example
//!
//! ```
//! use euler_search::sequences::Fibonacci;
//!
//! let first: Vec<u64> = Fibonacci::new().take(10).collect();
//! assert_eq!(first, vec![1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);
//! ```

use std::iter::FusedIterator;

/// The Fibonacci sequence 1, 1, 2, 3, 5, ...
///
/// Ends at the first term that would overflow a u64, or before the first
/// term reaching the limit given to [`below`](Self::below).
#[derive(Debug, Clone)]
pub struct Fibonacci {
    previous: u64,
    current: Option<u64>,
    limit: Option<u64>,
}

impl Fibonacci {
    pub fn new() -> Self {
        Self {
            previous: 0,
            current: Some(1),
            limit: None,
        }
    }

    /// Terms strictly below `limit`.
    pub fn below(limit: u64) -> Self {
        Self {
            limit: Some(limit),
            ..Self::new()
        }
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let term = self.current?;
        if self.limit.is_some_and(|limit| term >= limit) {
            self.current = None;
            return None;
        }
        self.current = self.previous.checked_add(term);
        self.previous = term;
        Some(term)
    }
}

impl FusedIterator for Fibonacci {}

/// Sum of the even Fibonacci terms below `limit`.
pub fn even_fibonacci_sum(limit: u64) -> u64 {
    Fibonacci::below(limit).filter(|term| term % 2 == 0).sum()
}
