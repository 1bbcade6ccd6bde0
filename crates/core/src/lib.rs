//! # U-Assign Core
//!
//! Core types and traits for the U-Assign linear assignment engine.
//!
//! This crate provides the foundational types shared by the solver crates:
//!
//! - **Cost matrix**: validated square [`CostMatrix`] of non-negative costs
//! - **Solver trait**: common interface for assignment algorithms
//! - **Results**: [`SolveResult`] distinguishing complete from incomplete assignments
//! - **Generators**: random and planted instances driven by an injected RNG
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod generator;
pub mod matrix;
pub mod result;
pub mod solver;

// Re-exports
pub use error::{Error, Result};
pub use matrix::CostMatrix;
pub use result::{SolveResult, SolveSummary};
pub use solver::{Config, Solver};
