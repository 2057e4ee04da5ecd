// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Largest product of n consecutive digits.
//!
//! The straightforward scan recomputes every window and costs
//! O(len · n). [`WindowScanner`] instead keeps the window in a queue
//! together with a running product of its nonzero digits and a count of
//! its zeros. A digit entering the window is multiplied in (or counted),
//! a digit leaving is divided out (or uncounted). The real window product
//! is the running product when the zero count is 0, and 0 otherwise. That
//! makes the scan O(len) time and O(n) space.
//!
//! Every digit 1-9 factors over 2, 3, 5 and 7, so the running product is
//! held as four exponents: multiplying adds them, dividing subtracts them.
//! The running product of a window that contains a zero may be far beyond
//! u64 while the window's real product is 0, so the integer value is only
//! built for zero-free windows, and only those can overflow.

use crate::error::{EulerError, EulerResult};
use std::collections::VecDeque;

const PRIMES: [u64; 4] = [2, 3, 5, 7];

/// Exponents of 2, 3, 5, 7 in each digit; zero is never looked up.
const DIGIT_EXPONENTS: [[usize; 4]; 10] = [
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [1, 0, 0, 0],
    [0, 1, 0, 0],
    [2, 0, 0, 0],
    [0, 0, 1, 0],
    [1, 1, 0, 0],
    [0, 0, 0, 1],
    [3, 0, 0, 0],
    [0, 2, 0, 0],
];

/// Maximum product of any `n` consecutive digits.
///
/// Fails with `InvalidArgument` when `n` is 0, when fewer than `n` digits
/// are supplied (including none), or when a value above 9 appears. Fails
/// with `Overflow` only when some zero-free window's product exceeds u64.
///
/// # Example
///
/// ```
/// use euler_search::digits::max_window_product;
///
/// assert_eq!(max_window_product([1, 2, 3, 4], 2).unwrap(), 12);
/// assert_eq!(max_window_product([0, 0, 5, 5], 2).unwrap(), 25);
/// assert!(max_window_product([1, 2], 3).is_err());
/// ```
pub fn max_window_product<I>(digits: I, n: usize) -> EulerResult<u64>
where
    I: IntoIterator<Item = u8>,
{
    WindowScanner::scan(digits, n)?.finish()
}

/// Incremental sliding-window state.
///
/// Invariants, checked after every push:
/// - `window` holds the last `min(seen, size)` digits
/// - `exponents` factor the product of the nonzero digits in `window`
/// - `zero_count` is the number of zeros in `window`
#[derive(Debug, Clone)]
pub struct WindowScanner {
    size: usize,
    window: VecDeque<u8>,
    exponents: [usize; 4],
    zero_count: usize,
    best: Option<u64>,
    seen: usize,
}

impl WindowScanner {
    pub fn new(size: usize) -> EulerResult<Self> {
        if size == 0 {
            return Err(EulerError::invalid("window size must be positive"));
        }
        Ok(Self {
            size,
            window: VecDeque::with_capacity(size),
            exponents: [0; 4],
            zero_count: 0,
            best: None,
            seen: 0,
        })
    }

    /// Feed every digit through a new scanner of width `n`.
    pub fn scan<I>(digits: I, n: usize) -> EulerResult<Self>
    where
        I: IntoIterator<Item = u8>,
    {
        let mut scanner = Self::new(n)?;
        for digit in digits {
            scanner.push(digit)?;
        }
        Ok(scanner)
    }

    /// Slide the window forward by one digit.
    ///
    /// The window state is updated before the new product is evaluated, so
    /// an `Overflow` error leaves the scanner consistent; that window just
    /// does not count towards the maximum.
    pub fn push(&mut self, digit: u8) -> EulerResult<()> {
        if digit > 9 {
            return Err(EulerError::invalid(format!(
                "{} at position {} is not a decimal digit",
                digit, self.seen
            )));
        }

        // Remove before add: the outgoing digit is still a factor of the
        // running product, so every exponent stays non-negative.
        if self.window.len() == self.size {
            match self.window.pop_front() {
                Some(0) => self.zero_count -= 1,
                Some(old) => {
                    for (e, d) in self.exponents.iter_mut().zip(DIGIT_EXPONENTS[old as usize]) {
                        *e -= d;
                    }
                }
                None => {}
            }
        }

        if digit == 0 {
            self.zero_count += 1;
        } else {
            for (e, d) in self.exponents.iter_mut().zip(DIGIT_EXPONENTS[digit as usize]) {
                *e += d;
            }
        }
        self.window.push_back(digit);
        self.seen += 1;

        if let Some(current) = self.current_product()? {
            if self.best.map_or(true, |best| current > best) {
                self.best = Some(current);
            }
        }
        Ok(())
    }

    /// Product of the current window, or `None` until the first window is full.
    pub fn current_product(&self) -> EulerResult<Option<u64>> {
        if self.window.len() < self.size {
            return Ok(None);
        }
        if self.zero_count > 0 {
            return Ok(Some(0));
        }
        let mut product = 1u64;
        for (&p, &e) in PRIMES.iter().zip(&self.exponents) {
            product = u32::try_from(e)
                .ok()
                .and_then(|e| p.checked_pow(e))
                .and_then(|factor| product.checked_mul(factor))
                .ok_or_else(|| {
                    EulerError::Overflow(format!(
                        "product of a {}-digit window exceeds u64",
                        self.size
                    ))
                })?;
        }
        Ok(Some(product))
    }

    /// Best product over every complete window so far.
    pub fn max_product(&self) -> Option<u64> {
        self.best
    }

    /// The best product, or `InvalidArgument` if no window was ever complete.
    pub fn finish(&self) -> EulerResult<u64> {
        self.best.ok_or_else(|| {
            EulerError::invalid(format!(
                "window size {} exceeds digit count {}",
                self.size, self.seen
            ))
        })
    }

    /// Number of complete windows scanned so far.
    pub fn windows(&self) -> usize {
        (self.seen + 1).saturating_sub(self.size)
    }

    pub fn seen(&self) -> usize {
        self.seen
    }
}

/// Product of a digit slice: 1 for an empty slice, 0 if it holds a zero,
/// `None` if a zero-free product overflows.
pub fn product(digits: &[u8]) -> Option<u64> {
    if digits.contains(&0) {
        return Some(0);
    }
    digits
        .iter()
        .try_fold(1u64, |acc, &d| acc.checked_mul(d as u64))
}

/// Reference implementation: recompute every window from scratch.
pub fn simple_max_product(digits: &[u8], n: usize) -> EulerResult<u64> {
    if n == 0 {
        return Err(EulerError::invalid("window size must be positive"));
    }
    if n > digits.len() {
        return Err(EulerError::invalid(format!(
            "window size {} exceeds digit count {}",
            n,
            digits.len()
        )));
    }
    if let Some(position) = digits.iter().position(|&d| d > 9) {
        return Err(EulerError::invalid(format!(
            "{} at position {} is not a decimal digit",
            digits[position], position
        )));
    }

    let mut best = 0;
    for window in digits.windows(n) {
        let p = product(window).ok_or_else(|| {
            EulerError::Overflow(format!("product of a {}-digit window exceeds u64", n))
        })?;
        best = best.max(p);
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product() {
        assert_eq!(product(&[]), Some(1));
        assert_eq!(product(&[1, 2, 3, 4, 5, 6, 7, 8, 9]), Some(362_880));
        assert_eq!(product(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]), Some(0));
        assert_eq!(product(&[9; 21]), None);
    }

    #[test]
    fn test_product_zero_beats_overflow() {
        let mut digits = vec![9; 30];
        digits.push(0);
        assert_eq!(product(&digits), Some(0));
    }

    #[test]
    fn test_digit_exponents() {
        for d in 1..=9u64 {
            let e = DIGIT_EXPONENTS[d as usize];
            let rebuilt: u64 = PRIMES
                .iter()
                .zip(e)
                .map(|(&p, e)| p.pow(e as u32))
                .product();
            assert_eq!(rebuilt, d);
        }
    }

    #[test]
    fn test_simple_examples() {
        assert_eq!(max_window_product([1, 2, 3, 4], 2).unwrap(), 12);
        assert_eq!(max_window_product([0, 0, 5, 5], 2).unwrap(), 25);
        assert_eq!(max_window_product([9], 1).unwrap(), 9);
    }

    #[test]
    fn test_all_zero() {
        assert_eq!(max_window_product([0, 0, 0, 0], 2).unwrap(), 0);
    }

    #[test]
    fn test_single_window() {
        assert_eq!(max_window_product([2, 3, 7], 3).unwrap(), 42);
        assert_eq!(max_window_product([2, 0, 7], 3).unwrap(), 0);
    }

    #[test]
    fn test_zero_leaves_window() {
        assert_eq!(max_window_product([0, 9, 9, 1, 0, 8], 3).unwrap(), 81);
        assert_eq!(max_window_product([5, 0, 1, 1, 1, 2], 3).unwrap(), 2);
    }

    #[test]
    fn test_long_windows_with_zero() {
        let mut digits = vec![0];
        digits.extend([9; 24]);
        assert_eq!(max_window_product(digits.iter().copied(), 25).unwrap(), 0);
        assert_eq!(simple_max_product(&digits, 25).unwrap(), 0);

        let mut digits = vec![9; 30];
        digits.push(0);
        digits.extend([1; 5]);
        assert_eq!(max_window_product(digits.iter().copied(), 31).unwrap(), 0);
        assert_eq!(simple_max_product(&digits, 31).unwrap(), 0);
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(matches!(
            max_window_product([1, 2, 3], 0),
            Err(EulerError::InvalidArgument(_))
        ));
        assert!(matches!(
            max_window_product(Vec::<u8>::new(), 1),
            Err(EulerError::InvalidArgument(_))
        ));
        assert!(matches!(
            max_window_product([1, 2, 3], 4),
            Err(EulerError::InvalidArgument(_))
        ));
        assert!(matches!(
            max_window_product([1, 12, 3], 2),
            Err(EulerError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_overflow() {
        assert!(matches!(
            max_window_product([9; 30], 25),
            Err(EulerError::Overflow(_))
        ));
        // 20 nines still fit
        assert_eq!(max_window_product([9; 20], 20).unwrap(), 9u64.pow(20));
    }

    #[test]
    fn test_scanner_consistent_after_overflow() {
        let mut scanner = WindowScanner::new(21).unwrap();
        for _ in 0..21 {
            let _ = scanner.push(9);
        }
        assert!(scanner.current_product().is_err());

        // a zero slides in and the window is representable again
        scanner.push(0).unwrap();
        assert_eq!(scanner.current_product().unwrap(), Some(0));
        for _ in 0..21 {
            scanner.push(1).unwrap();
        }
        assert_eq!(scanner.current_product().unwrap(), Some(1));
        assert_eq!(scanner.max_product(), Some(1));
    }

    #[test]
    fn test_scanner_state() {
        let mut scanner = WindowScanner::new(3).unwrap();
        for d in [4, 0, 2] {
            scanner.push(d).unwrap();
        }
        assert_eq!(scanner.current_product().unwrap(), Some(0));
        assert_eq!(scanner.windows(), 1);

        scanner.push(5).unwrap();
        scanner.push(3).unwrap();
        assert_eq!(scanner.current_product().unwrap(), Some(30));
        assert_eq!(scanner.max_product(), Some(30));
        assert_eq!(scanner.windows(), 3);
        assert_eq!(scanner.seen(), 5);
    }

    #[test]
    fn test_scanner_before_first_window() {
        let mut scanner = WindowScanner::new(4).unwrap();
        scanner.push(7).unwrap();
        assert_eq!(scanner.current_product().unwrap(), None);
        assert_eq!(scanner.max_product(), None);
        assert_eq!(scanner.windows(), 0);
        assert!(matches!(scanner.finish(), Err(EulerError::InvalidArgument(_))));
    }

    #[test]
    fn test_scan_counts_windows() {
        let scanner = WindowScanner::scan([1, 2, 3, 4, 5], 2).unwrap();
        assert_eq!(scanner.windows(), 4);
        assert_eq!(scanner.finish().unwrap(), 20);
    }

    #[test]
    fn test_simple_matches_linear() {
        let digits = [3, 0, 7, 1, 6, 9, 9, 0, 0, 2, 8, 8, 1, 5, 0, 4];
        for n in 1..=digits.len() {
            assert_eq!(
                simple_max_product(&digits, n).unwrap(),
                max_window_product(digits, n).unwrap(),
                "n = {}",
                n
            );
        }
    }

    #[test]
    fn test_simple_invalid_arguments() {
        assert!(simple_max_product(&[1, 2], 0).is_err());
        assert!(simple_max_product(&[1, 2], 3).is_err());
        assert!(simple_max_product(&[], 1).is_err());
        assert!(simple_max_product(&[1, 10], 1).is_err());
    }
}
