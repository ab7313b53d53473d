//! Per-call DP tables shared by both solvers.
//!
//! A [`CutTables`] holds the profit mapping and the first-cut mapping for
//! sub-lengths `0..=n`, stored as flat vectors indexed by sub-length.
//! Entries are `None` until a solver records them; the memoized solver fills
//! them lazily, the tabulated solver in increasing order.

use crate::problem::Price;

/// Profit and first-cut mappings for sub-lengths `0..=length`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutTables {
    profit: Vec<Option<Price>>,
    first_cut: Vec<Option<usize>>,
}

impl CutTables {
    /// Fresh tables for a rod of `length`, with only the empty piece known.
    pub fn new(length: usize) -> Self {
        let mut profit = vec![None; length + 1];
        profit[0] = Some(0);
        Self {
            profit,
            first_cut: vec![None; length + 1],
        }
    }

    /// Best profit recorded for `sub_length`, if it has been computed.
    #[inline]
    pub fn profit(&self, sub_length: usize) -> Option<Price> {
        self.profit.get(sub_length).copied().flatten()
    }

    /// First piece chosen for `sub_length`, if it has been computed.
    #[inline]
    pub fn first_cut(&self, sub_length: usize) -> Option<usize> {
        self.first_cut.get(sub_length).copied().flatten()
    }

    /// The whole first-cut mapping, indexed by sub-length.
    #[inline]
    pub fn first_cuts(&self) -> &[Option<usize>] {
        &self.first_cut
    }

    /// Store the optimum for `sub_length`.
    ///
    /// `cut` must lie in `1..=sub_length`.
    #[inline]
    pub fn record(&mut self, sub_length: usize, profit: Price, cut: usize) {
        debug_assert!(sub_length >= 1, "sub-length 0 is fixed at zero profit");
        debug_assert!(
            (1..=sub_length).contains(&cut),
            "first cut {cut} outside 1..={sub_length}"
        );
        self.profit[sub_length] = Some(profit);
        self.first_cut[sub_length] = Some(cut);
    }

    /// True once every sub-length `1..=length` has an entry.
    pub fn is_complete(&self) -> bool {
        self.profit.iter().all(Option::is_some) && self.first_cut[1..].iter().all(Option::is_some)
    }
}
