// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sequential problem engine.
//!
//! The engine runs a list of problems against one [`SolveContext`], in the
//! order given, and collects one [`SolveReport`] per problem. A problem
//! that fails does not stop the run: its error is logged, counted in the
//! context statistics, and returned in its report.
//!
//! # Example
//!
//! ```
//! use euler_search::context::{Counters, SolveContext};
//! use euler_search::engine::{EngineBuilder, Outcome};
//! use euler_search::problems::EvenFibonacciSum;
//!
//! let mut ctx = SolveContext::new();
//! let mut engine = EngineBuilder::new()
//!     .add(Box::new(EvenFibonacciSum))
//!     .build();
//!
//! let reports = engine.run(&mut ctx);
//! assert_eq!(reports[0].outcome(), Some(Outcome::Solved(4_613_732)));
//! assert_eq!(ctx.statistics.get(Counters::ProblemsSolved), 1);
//! ```

pub mod problem;

pub use problem::{Outcome, Problem};

use crate::context::{Counters, SolveContext};
use crate::error::EulerResult;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, info_span, warn};

/// What happened when one problem ran.
#[derive(Debug)]
pub struct SolveReport {
    pub number: u32,
    pub name: String,
    pub result: EulerResult<Outcome>,
    pub elapsed: Duration,
}

impl SolveReport {
    /// The outcome, if the problem did not fail.
    pub fn outcome(&self) -> Option<Outcome> {
        self.result.as_ref().ok().copied()
    }

    pub fn is_error(&self) -> bool {
        self.result.is_err()
    }
}

impl fmt::Display for SolveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Problem {} ({}): ", self.number, self.name)?;
        match &self.result {
            Ok(outcome) => write!(f, "{}", outcome),
            Err(e) => write!(f, "error: {}", e),
        }
    }
}

/// Engine that runs problems in sequence.
pub struct SolveEngine {
    problems: Vec<Box<dyn Problem>>,
}

impl SolveEngine {
    pub fn new(problems: Vec<Box<dyn Problem>>) -> Self {
        Self { problems }
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Run every problem once, in order.
    ///
    /// Updates `ProblemsSolved`, `ProblemsWithoutSolution` or
    /// `ProblemsFailed` in the context for each problem.
    pub fn run(&mut self, ctx: &mut SolveContext) -> Vec<SolveReport> {
        let mut reports = Vec::with_capacity(self.problems.len());

        for problem in self.problems.iter_mut() {
            let number = problem.number();
            let _span = info_span!("problem", number).entered();

            let start = Instant::now();
            let result = problem.solve(ctx);
            let elapsed = start.elapsed();

            match &result {
                Ok(Outcome::Solved(value)) => {
                    debug!(value, ?elapsed, "solved");
                    ctx.statistics.increment(Counters::ProblemsSolved);
                }
                Ok(Outcome::NoSolution) => {
                    debug!(?elapsed, "no solution");
                    ctx.statistics.increment(Counters::ProblemsWithoutSolution);
                }
                Err(e) => {
                    warn!(error = %e, "problem failed");
                    ctx.statistics.increment(Counters::ProblemsFailed);
                }
            }

            reports.push(SolveReport {
                number,
                name: problem.name().to_string(),
                result,
                elapsed,
            });
        }

        reports
    }
}

/// Builder for [`SolveEngine`].
#[derive(Default)]
pub struct EngineBuilder {
    problems: Vec<Box<dyn Problem>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a problem to the run.
    pub fn add(mut self, problem: Box<dyn Problem>) -> Self {
        self.problems.push(problem);
        self
    }

    pub fn extend<I>(mut self, problems: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn Problem>>,
    {
        self.problems.extend(problems);
        self
    }

    pub fn build(self) -> SolveEngine {
        SolveEngine::new(self.problems)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EulerError;

    /// Test problem that always answers 42.
    #[derive(Debug)]
    struct Answer;

    impl Problem for Answer {
        fn number(&self) -> u32 {
            42
        }

        fn solve(&mut self, _ctx: &mut SolveContext) -> EulerResult<Outcome> {
            Ok(Outcome::Solved(42))
        }

        fn name(&self) -> &str {
            "Answer"
        }
    }

    /// Test problem that never finds anything.
    #[derive(Debug)]
    struct Nothing;

    impl Problem for Nothing {
        fn number(&self) -> u32 {
            0
        }

        fn solve(&mut self, _ctx: &mut SolveContext) -> EulerResult<Outcome> {
            Ok(Outcome::NoSolution)
        }
    }

    /// Test problem that always fails.
    #[derive(Debug)]
    struct Broken;

    impl Problem for Broken {
        fn number(&self) -> u32 {
            13
        }

        fn solve(&mut self, _ctx: &mut SolveContext) -> EulerResult<Outcome> {
            Err(EulerError::InvalidArgument("broken".to_string()))
        }
    }

    #[test]
    fn test_empty_engine() {
        let mut ctx = SolveContext::new();
        let mut engine = EngineBuilder::new().build();
        assert!(engine.is_empty());
        assert!(engine.run(&mut ctx).is_empty());
    }

    #[test]
    fn test_reports_in_order() {
        let mut ctx = SolveContext::new();
        let mut engine = EngineBuilder::new()
            .add(Box::new(Answer))
            .add(Box::new(Nothing))
            .build();
        assert_eq!(engine.len(), 2);

        let reports = engine.run(&mut ctx);
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].number, 42);
        assert_eq!(reports[0].outcome(), Some(Outcome::Solved(42)));
        assert_eq!(reports[1].outcome(), Some(Outcome::NoSolution));
        assert_eq!(ctx.statistics.get(Counters::ProblemsSolved), 1);
        assert_eq!(ctx.statistics.get(Counters::ProblemsWithoutSolution), 1);
    }

    #[test]
    fn test_failure_does_not_stop_run() {
        let mut ctx = SolveContext::new();
        let mut engine = EngineBuilder::new()
            .add(Box::new(Broken))
            .add(Box::new(Answer))
            .build();

        let reports = engine.run(&mut ctx);
        assert!(reports[0].is_error());
        assert_eq!(reports[1].outcome(), Some(Outcome::Solved(42)));
        assert_eq!(ctx.statistics.get(Counters::ProblemsFailed), 1);
    }

    #[test]
    fn test_default_name_is_type_name() {
        assert!(Nothing.name().ends_with("Nothing"));
    }

    #[test]
    fn test_report_display() {
        let mut ctx = SolveContext::new();
        let mut engine = EngineBuilder::new()
            .extend([Box::new(Answer) as Box<dyn Problem>, Box::new(Broken)])
            .build();
        let reports = engine.run(&mut ctx);
        assert_eq!(reports[0].to_string(), "Problem 42 (Answer): 42");
        assert!(reports[1]
            .to_string()
            .ends_with("error: invalid argument: broken"));
    }
}
