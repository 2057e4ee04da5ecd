// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integer sequences.

pub mod fibonacci;

pub use fibonacci::{even_fibonacci_sum, Fibonacci};
