//! Error types for U-Assign.

use thiserror::Error;

/// Result type alias for U-Assign operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or solving an assignment problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The cost matrix is empty, ragged, or not square.
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// No cost matrix was supplied.
    #[error("Missing input: {0}")]
    MissingInput(String),

    /// Extraction finished with rows left unassigned.
    #[error("No feasible assignment: rows {unassigned:?} are unassigned")]
    NoFeasibleAssignment {
        /// Rows that did not receive a column.
        unassigned: Vec<usize>,
    },

    /// The cover/adjust loop ran past its convergence bound.
    #[error("Cover search did not converge after {rounds} adjustment rounds")]
    NonConvergence {
        /// Adjustment rounds performed before giving up.
        rounds: usize,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn invalid_dimension(message: impl Into<String>) -> Self {
        Self::InvalidDimension(message.into())
    }

    pub fn missing_input(message: impl Into<String>) -> Self {
        Self::MissingInput(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
