//! Rod cutting by dynamic programming, two ways.
//!
//! Given a rod of integer length `n` and a price for every piece length
//! `1..=n`, find the partition that maximizes total price, together with one
//! concrete cut sequence achieving it.
//!
//! ## Core idea
//! The same recurrence is evaluated by two independent strategies:
//! 1. [`MemoizedSolver`]: top-down recursion with per-call caches.
//! 2. [`TabulatedSolver`]: bottom-up filling in increasing sub-length order.
//!
//! Both fill a [`CutTables`] (profit and first-cut mappings indexed by
//! sub-length) under the same strict-improvement rule, so among equal-profit
//! options the shortest first piece is kept. A shared reconstruction walk
//! then turns the first-cut mapping into a [`CutPlan`]. The two strategies
//! agree on profit *and* on the cut sequence for every valid input.
//!
//! ## Quick start
//! ```
//! use rodcut_dp::{solve_memoized, solve_tabulated};
//!
//! let prices = [2, 5, 7, 8, 10];
//! let plan = solve_tabulated(5, &prices).unwrap();
//! assert_eq!(plan.max_profit, 12);
//! assert_eq!(plan.cuts, vec![1, 2, 2]);
//! assert_eq!(plan.number_of_cuts, 2);
//! assert_eq!(solve_memoized(5, &prices).unwrap(), plan);
//! ```
//!
//! Invalid input is reported, never panicked on:
//! ```
//! use rodcut_dp::{solve_tabulated, CutError};
//!
//! assert_eq!(solve_tabulated(-3, &[]), Err(CutError::InvalidLength(-3)));
//! ```
//!
//! The [`batching`] module carries an unrelated greedy print-job scheduler
//! that shares no state with the DP core.

pub mod batching;
pub mod builder;
pub mod error;
pub mod plan;
pub mod problem;
pub mod reconstruct;
pub mod solvers;
pub mod tables;
pub mod traits;

pub use crate::builder::{RodCutter, RodCutterBuilder, Strategy};
pub use crate::error::CutError;
pub use crate::plan::CutPlan;
pub use crate::problem::{Price, RodProblem};
pub use crate::solvers::{MemoStats, MemoizedSolver, TabulatedSolver};
pub use crate::tables::CutTables;
pub use crate::traits::CutSolver;

/// Solve with top-down memoized recursion.
pub fn solve_memoized(length: i64, prices: &[Price]) -> Result<CutPlan, CutError> {
    let problem = RodProblem::new(length, prices)?;
    Ok(MemoizedSolver.solve(&problem))
}

/// Solve with bottom-up tabulation.
pub fn solve_tabulated(length: i64, prices: &[Price]) -> Result<CutPlan, CutError> {
    let problem = RodProblem::new(length, prices)?;
    Ok(TabulatedSolver.solve(&problem))
}

/// Solve many independent instances across the rayon pool.
///
/// Each instance is still a single sequential pass; results keep input order.
#[cfg(feature = "parallel")]
pub fn solve_batch(
    strategy: Strategy,
    instances: &[(i64, Vec<Price>)],
) -> Vec<Result<CutPlan, CutError>> {
    use rayon::prelude::*;

    let cutter = RodCutter::new(strategy);
    instances
        .par_iter()
        .map(|(length, prices)| cutter.solve(*length, prices))
        .collect()
}
