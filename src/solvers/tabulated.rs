//! Bottom-up tabulation.
//!
//! Sub-lengths are filled in strictly increasing order. The optimum for `n`
//! reads only entries `n - i` with `i >= 1`, all of which are final by the
//! time `n` is reached, so no entry is ever revisited.

use crate::problem::{Price, RodProblem};
use crate::tables::CutTables;
use crate::traits::CutSolver;

/// Iterative table-filling solver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabulatedSolver;

impl CutSolver for TabulatedSolver {
    fn name(&self) -> &'static str {
        "tabulated"
    }

    fn fill_tables(&self, problem: &RodProblem<'_>) -> CutTables {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("fill", solver = self.name(), length = problem.length());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let length = problem.length();
        let mut tables = CutTables::new(length);
        // Dense copy of the profit column; avoids Option checks in the inner loop.
        let mut profit: Vec<Price> = vec![0; length + 1];

        for n in 1..=length {
            let mut best = 0;
            let mut best_cut = n;
            for i in 1..=n {
                let candidate = problem.price(i).saturating_add(profit[n - i]);
                if candidate > best {
                    best = candidate;
                    best_cut = i;
                }
            }
            profit[n] = best;
            tables.record(n, best, best_cut);
        }

        tables
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_cuts_regression() {
        let prices = [3, 5, 6, 7];
        let problem = RodProblem::new(4, &prices).unwrap();
        let plan = TabulatedSolver.solve(&problem);
        assert_eq!(plan.max_profit, 12);
        assert_eq!(plan.cuts, vec![1, 1, 1, 1]);
        assert_eq!(plan.number_of_cuts, 3);
    }

    #[test]
    fn tables_are_filled_for_every_sub_length() {
        let prices = [2, 5, 7, 8, 10];
        let problem = RodProblem::new(5, &prices).unwrap();
        let tables = TabulatedSolver.fill_tables(&problem);
        assert!(tables.is_complete());
        let profits: Vec<_> = (0..=5).map(|k| tables.profit(k).unwrap()).collect();
        assert_eq!(profits, vec![0, 2, 5, 7, 10, 12]);
        let cuts: Vec<_> = (1..=5).map(|k| tables.first_cut(k).unwrap()).collect();
        assert_eq!(cuts, vec![1, 2, 1, 2, 1]);
    }

    #[test]
    fn single_unit_rod() {
        let problem = RodProblem::new(1, &[9]).unwrap();
        let plan = TabulatedSolver.solve(&problem);
        assert_eq!(plan.max_profit, 9);
        assert_eq!(plan.cuts, vec![1]);
        assert_eq!(plan.number_of_cuts, 0);
    }

    #[test]
    fn ties_prefer_the_shortest_first_piece() {
        // p(k) = 2k: every partition is worth 2n.
        let prices: Vec<Price> = (1..=6).map(|k| 2 * k).collect();
        let problem = RodProblem::new(6, &prices).unwrap();
        let plan = TabulatedSolver.solve(&problem);
        assert_eq!(plan.max_profit, 12);
        assert_eq!(plan.cuts, vec![1; 6]);
    }
}
