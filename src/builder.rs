use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CutError, ParseStrategyError};
use crate::plan::CutPlan;
use crate::problem::{Price, RodProblem};
use crate::solvers::{MemoizedSolver, TabulatedSolver};
use crate::traits::CutSolver;

/// Which DP formulation a [`RodCutter`] runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Memoized,
    #[default]
    Tabulated,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Memoized, Strategy::Tabulated];

    /// The solver implementing this strategy.
    pub fn solver(self) -> &'static dyn CutSolver {
        match self {
            Strategy::Memoized => &MemoizedSolver,
            Strategy::Tabulated => &TabulatedSolver,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.solver().name()
    }

    /// Run this strategy on an already validated instance.
    pub fn solve(self, problem: &RodProblem<'_>) -> CutPlan {
        self.solver().solve(problem)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "memoized" | "memo" => Ok(Strategy::Memoized),
            "tabulated" | "table" => Ok(Strategy::Tabulated),
            _ => Err(ParseStrategyError(value.to_string())),
        }
    }
}

/// Configured entry point: validates input, then runs one strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RodCutter {
    strategy: Strategy,
}

impl RodCutter {
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    pub fn builder() -> RodCutterBuilder {
        RodCutterBuilder::new()
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn solve(&self, length: i64, prices: &[Price]) -> Result<CutPlan, CutError> {
        let problem = RodProblem::new(length, prices)?;
        Ok(self.strategy.solve(&problem))
    }
}

#[derive(Debug, Clone, Default)]
pub struct RodCutterBuilder {
    strategy: Option<Strategy>,
}

impl RodCutterBuilder {
    pub fn new() -> Self {
        Self { strategy: None }
    }
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }
    pub fn build(self) -> RodCutter {
        RodCutter::new(self.strategy.unwrap_or_default())
    }
}
