// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Runnable puzzles.
//!
//! Each problem is a unit struct implementing [`Problem`]; its parameters
//! come from the context's configuration.
//!
//! # Organization
//!
//! - `even_fibonacci`: problem 2
//! - `largest_product`: problem 8
//! - `pythagorean_triplet`: problem 9
//! - `divisible_triangle`: problem 12

pub mod divisible_triangle;
pub mod even_fibonacci;
pub mod largest_product;
pub mod pythagorean_triplet;

pub use divisible_triangle::HighlyDivisibleTriangle;
pub use even_fibonacci::EvenFibonacciSum;
pub use largest_product::LargestWindowProduct;
pub use pythagorean_triplet::SpecialPythagoreanTriplet;

use crate::engine::Problem;

/// Problem numbers available, ascending.
pub const PROBLEM_NUMBERS: [u32; 4] = [2, 8, 9, 12];

/// Look up a problem by its Project Euler number.
pub fn by_number(number: u32) -> Option<Box<dyn Problem>> {
    match number {
        2 => Some(Box::new(EvenFibonacciSum)),
        8 => Some(Box::new(LargestWindowProduct)),
        9 => Some(Box::new(SpecialPythagoreanTriplet)),
        12 => Some(Box::new(HighlyDivisibleTriangle)),
        _ => None,
    }
}

/// Every problem, in ascending order.
pub fn catalog() -> Vec<Box<dyn Problem>> {
    PROBLEM_NUMBERS.iter().filter_map(|&n| by_number(n)).collect()
}
