// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solve context.
//!
//! The SolveContext is the one mutable value handed to every problem. It
//! combines:
//! - Configuration: the parameters each problem reads
//! - Statistics: counters updated by the engine and by problems
//! - FactorCache: memoized factorizations, kept across problems in a run
//!
//! Independent contexts share nothing, so two runs never see each other's
//! cache or counters.

pub mod statistics;

pub use statistics::{Counters, Statistics};

use crate::config::SolverConfig;
use crate::divisors::FactorCache;

#[derive(Debug, Default)]
pub struct SolveContext {
    pub config: SolverConfig,
    pub statistics: Statistics,
    pub factors: FactorCache,
}

impl SolveContext {
    /// A context with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }
}
