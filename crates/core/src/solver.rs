//! Solver traits and configuration.

use crate::matrix::CostMatrix;
use crate::result::SolveResult;
use crate::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Common configuration for assignment solvers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Upper bound on cover/adjust rounds (None = derived from the reduced matrix).
    pub max_rounds: Option<usize>,

    /// Recompute a minimum cover when the greedy cover overstates the
    /// number of lines and extraction fails.
    pub repair_cover: bool,

    /// Record the line count of every cover pass in the result.
    pub record_history: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_rounds: None,
            repair_cover: true,
            record_history: false,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit round limit.
    pub fn with_max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = Some(rounds);
        self
    }

    /// Enables or disables cover repair.
    pub fn with_repair_cover(mut self, enabled: bool) -> Self {
        self.repair_cover = enabled;
        self
    }

    /// Enables or disables line-count history.
    pub fn with_history(mut self, enabled: bool) -> Self {
        self.record_history = enabled;
        self
    }
}

/// Trait for linear assignment solvers.
///
/// Solvers take ownership of the cost matrix; implementations are free to
/// mutate it while solving.
pub trait Solver {
    /// Short name used in results and reports.
    fn name(&self) -> &'static str;

    /// Solves the minimum-cost assignment problem for `matrix`.
    fn solve(&self, matrix: CostMatrix) -> Result<SolveResult>;
}
