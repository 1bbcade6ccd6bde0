//! # U-Assign
//!
//! Linear assignment engine: given an `n x n` matrix of non-negative integer
//! costs, find the one-to-one mapping of rows to columns with minimum total
//! cost using the Kuhn-Munkres (Hungarian) method.
//!
//! ## Quick Start
//!
//! ```rust
//! use u_assign::{CostMatrix, HungarianSolver, Solver};
//!
//! let costs = CostMatrix::from_rows(vec![vec![4, 1, 3], vec![2, 0, 5], vec![3, 2, 2]])?;
//! let result = HungarianSolver::default().solve(costs)?;
//!
//! assert_eq!(result.into_permutation()?, vec![1, 0, 2]);
//! # Ok::<(), u_assign::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support for configuration and results

/// Core types and traits.
pub use u_assign_core as core;

/// Hungarian method implementation.
pub use u_assign_hungarian as hungarian;

// Re-export commonly used types at root level
pub use u_assign_core::{Config, CostMatrix, Error, Result, SolveResult, Solver};
pub use u_assign_hungarian::{solve, BruteForceSolver, HungarianSolver};
