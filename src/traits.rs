//! Core trait for rod-cutting strategies.
//!
//! A strategy only has to fill the two DP mappings for a validated instance.
//! Reading the optimum and reconstructing the cut sequence is shared, so any
//! two strategies that fill identical tables produce identical plans.
//!
//! Contract for [`CutSolver::fill_tables`]:
//! - the returned tables cover sub-lengths `0..=problem.length()`,
//! - every entry `1..=length` is recorded,
//! - for each sub-length `n`, candidates `i = 1..=n` are scanned in
//!   increasing order against a running best that starts at profit `0` with
//!   first cut `n`, and a candidate replaces the best only on strict
//!   improvement. The smallest first cut therefore wins every tie.

use crate::plan::CutPlan;
use crate::problem::RodProblem;
use crate::tables::CutTables;

/// A strategy for solving one rod-cutting instance.
pub trait CutSolver {
    /// Short identifier, used in trace spans and CLI output.
    fn name(&self) -> &'static str;

    /// Compute the profit and first-cut mappings for every sub-length.
    fn fill_tables(&self, problem: &RodProblem<'_>) -> CutTables;

    /// Solve the instance: fill the tables, then reconstruct from them.
    fn solve(&self, problem: &RodProblem<'_>) -> CutPlan {
        let tables = self.fill_tables(problem);
        CutPlan::from_tables(&tables, problem.length())
    }
}
