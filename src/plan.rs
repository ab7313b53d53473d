//! The outcome of a solve: optimal profit plus one optimal partition.

use serde::{Deserialize, Serialize};

use crate::problem::Price;
use crate::reconstruct::reconstruct;
use crate::tables::CutTables;

/// Optimal profit and the cut sequence that achieves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutPlan {
    pub max_profit: Price,
    /// Piece lengths in the order they are cut off.
    pub cuts: Vec<usize>,
    /// Cut operations performed: one fewer than the number of pieces.
    pub number_of_cuts: usize,
}

impl CutPlan {
    pub fn new(max_profit: Price, cuts: Vec<usize>) -> Self {
        let number_of_cuts = cuts.len().saturating_sub(1);
        Self {
            max_profit,
            cuts,
            number_of_cuts,
        }
    }

    /// Read the optimum for `length` out of filled tables.
    ///
    /// An absent profit entry reads as zero; callers pass complete tables.
    pub fn from_tables(tables: &CutTables, length: usize) -> Self {
        let max_profit = tables.profit(length).unwrap_or(0);
        Self::new(max_profit, reconstruct(tables.first_cuts(), length))
    }

    /// Sum of all piece lengths.
    pub fn total_length(&self) -> usize {
        self.cuts.iter().sum()
    }

    /// True when the rod is sold as a single piece.
    pub fn is_uncut(&self) -> bool {
        self.cuts.len() == 1
    }
}
