//! Solve result representation.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of an assignment solve.
///
/// `assignment[i] == Some(j)` means row `i` is matched to column `j`;
/// `None` marks a row left unassigned.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolveResult {
    /// Column chosen for every row.
    pub assignment: Vec<Option<usize>>,

    /// Total cost against the original matrix (None if incomplete).
    pub total_cost: Option<u64>,

    /// Number of adjustment rounds performed.
    pub rounds: usize,

    /// Line count after every cover pass (empty unless recorded).
    pub line_history: Vec<usize>,

    /// Number of times the greedy cover had to be replaced by a minimum cover.
    pub repairs: usize,

    /// Computation time in milliseconds.
    pub computation_time_ms: u64,

    /// Name of the solver that produced this result.
    pub solver: Option<String>,
}

impl SolveResult {
    /// Creates an empty result for a `dim x dim` problem.
    pub fn new(dim: usize) -> Self {
        Self {
            assignment: vec![None; dim],
            total_cost: None,
            rounds: 0,
            line_history: Vec::new(),
            repairs: 0,
            computation_time_ms: 0,
            solver: None,
        }
    }

    /// Creates a result from a complete permutation and its cost.
    pub fn from_permutation(permutation: &[usize], total_cost: u64) -> Self {
        Self {
            assignment: permutation.iter().copied().map(Some).collect(),
            total_cost: Some(total_cost),
            ..Self::new(permutation.len())
        }
    }

    pub fn dim(&self) -> usize {
        self.assignment.len()
    }

    /// Returns true if every row received a column.
    pub fn is_complete(&self) -> bool {
        self.assignment.iter().all(Option::is_some)
    }

    /// Rows that did not receive a column.
    pub fn unassigned_rows(&self) -> Vec<usize> {
        self.assignment
            .iter()
            .enumerate()
            .filter_map(|(row, col)| col.is_none().then_some(row))
            .collect()
    }

    /// Returns the assignment as a plain permutation if it is complete.
    pub fn permutation(&self) -> Option<Vec<usize>> {
        self.assignment.iter().copied().collect()
    }

    /// Consumes the result, returning the permutation or
    /// [`Error::NoFeasibleAssignment`].
    pub fn into_permutation(self) -> Result<Vec<usize>> {
        match self.permutation() {
            Some(permutation) => Ok(permutation),
            None => Err(Error::NoFeasibleAssignment {
                unassigned: self.unassigned_rows(),
            }),
        }
    }

    /// Sets the solver name.
    pub fn with_solver(mut self, name: impl Into<String>) -> Self {
        self.solver = Some(name.into());
        self
    }
}

/// Summary statistics for a solve result.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolveSummary {
    /// Problem dimension.
    pub dim: usize,
    /// Whether every row was assigned.
    pub complete: bool,
    /// Total cost, if complete.
    pub total_cost: Option<u64>,
    /// Adjustment rounds.
    pub rounds: usize,
    /// Computation time in milliseconds.
    pub time_ms: u64,
    /// Solver used.
    pub solver: String,
}

impl From<&SolveResult> for SolveSummary {
    fn from(result: &SolveResult) -> Self {
        Self {
            dim: result.dim(),
            complete: result.is_complete(),
            total_cost: result.total_cost,
            rounds: result.rounds,
            time_ms: result.computation_time_ms,
            solver: result
                .solver
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
        }
    }
}
