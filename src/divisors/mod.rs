// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Prime factorization and divisor counting.

pub mod factor;
pub mod triangle;

pub use factor::FactorCache;
pub use triangle::{
    count_divisors_naive, divisor_count, factor_counts, first_triangle_with_divisors_over,
    triangle_factor_counts, triangle_number, PrimeCounts, TriangleHit,
};
