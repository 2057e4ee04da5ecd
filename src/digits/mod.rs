// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Digit sequences and the sliding-window product scan.

pub mod source;
pub mod window;

pub use source::{parse_digits, puzzle_digits, read_digits, PUZZLE_DIGITS};
pub use window::{max_window_product, product, simple_max_product, WindowScanner};
