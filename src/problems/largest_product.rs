// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Problem 8: largest product in a series.

use crate::context::{Counters, SolveContext};
use crate::digits::{puzzle_digits, read_digits, WindowScanner};
use crate::engine::{Outcome, Problem};
use crate::error::EulerResult;
use tracing::debug;

/// Largest product of `window.size` adjacent digits, taken from
/// `window.digits_file` or the bundled 1000-digit number.
#[derive(Debug)]
pub struct LargestWindowProduct;

impl Problem for LargestWindowProduct {
    fn number(&self) -> u32 {
        8
    }

    fn solve(&mut self, ctx: &mut SolveContext) -> EulerResult<Outcome> {
        let window = &ctx.config.window;
        let digits = match &window.digits_file {
            Some(path) => read_digits(path)?,
            None => puzzle_digits()?,
        };
        debug!(digits = digits.len(), size = window.size, "scanning");

        let scanner = WindowScanner::scan(digits, window.size)?;
        let best = scanner.finish()?;

        ctx.statistics
            .add(Counters::WindowsScanned, scanner.windows() as u64);
        Ok(Outcome::Solved(best))
    }

    fn name(&self) -> &str {
        "Largest product in a series"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EulerError;
    use std::io::Write;

    #[test]
    fn test_bundled_digits() {
        let mut ctx = SolveContext::new();
        assert_eq!(
            LargestWindowProduct.solve(&mut ctx).unwrap(),
            Outcome::Solved(23_514_624_000)
        );
        assert_eq!(ctx.statistics.get(Counters::WindowsScanned), 988);
    }

    #[test]
    fn test_four_digit_window() {
        let mut ctx = SolveContext::new();
        ctx.config.window.size = 4;
        assert_eq!(
            LargestWindowProduct.solve(&mut ctx).unwrap(),
            Outcome::Solved(9 * 9 * 8 * 9)
        );
    }

    #[test]
    fn test_digit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1234").unwrap();
        let mut ctx = SolveContext::new();
        ctx.config.window.size = 2;
        ctx.config.window.digits_file = Some(file.path().to_path_buf());
        assert_eq!(
            LargestWindowProduct.solve(&mut ctx).unwrap(),
            Outcome::Solved(12)
        );
    }

    #[test]
    fn test_long_window_through_zero() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0{}", "9".repeat(24)).unwrap();
        let mut ctx = SolveContext::new();
        ctx.config.window.size = 25;
        ctx.config.window.digits_file = Some(file.path().to_path_buf());
        assert_eq!(
            LargestWindowProduct.solve(&mut ctx).unwrap(),
            Outcome::Solved(0)
        );
        assert_eq!(ctx.statistics.get(Counters::WindowsScanned), 1);
    }

    #[test]
    fn test_window_too_large() {
        let mut ctx = SolveContext::new();
        ctx.config.window.size = 1001;
        assert!(matches!(
            LargestWindowProduct.solve(&mut ctx),
            Err(EulerError::InvalidArgument(_))
        ));
    }
}
