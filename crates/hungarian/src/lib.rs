//! # U-Assign Hungarian
//!
//! Kuhn-Munkres (Hungarian) method for the square linear assignment problem.
//!
//! ## Pipeline
//!
//! 1. Row reduction, then column reduction ([`reduction`])
//! 2. Greedy line cover of the zero entries ([`cover`])
//! 3. Adjustment while fewer than `dim` lines are needed ([`AssignmentSolver::change_cost_matrix`])
//! 4. Extraction of a zero matching ([`extraction`])
//!
//! ## Example
//!
//! ```rust
//! use u_assign_core::{CostMatrix, Solver};
//! use u_assign_hungarian::HungarianSolver;
//!
//! let costs = CostMatrix::from_rows(vec![vec![4, 1, 3], vec![2, 0, 5], vec![3, 2, 2]])?;
//! let result = HungarianSolver::default().solve(costs)?;
//! assert_eq!(result.total_cost, Some(5));
//! # Ok::<(), u_assign_core::Error>(())
//! ```

pub mod brute_force;
pub mod cover;
pub mod engine;
pub mod extraction;
pub mod reduction;
pub mod solver;

pub use brute_force::{BruteForceSolver, MAX_BRUTE_FORCE_DIM};
pub use cover::LineCover;
pub use engine::AssignmentSolver;
pub use solver::HungarianSolver;
pub use u_assign_core::{Config, CostMatrix, Error, Result, SolveResult, Solver};

/// Solves `rows` with the default configuration and returns the column
/// assigned to each row.
pub fn solve(rows: Vec<Vec<u32>>) -> Result<Vec<usize>> {
    let matrix = CostMatrix::from_rows(rows)?;
    HungarianSolver::default().solve(matrix)?.into_permutation()
}
