//! Benchmark suite for U-Assign
//!
//! This crate provides:
//! - JSON instance parser for assignment problems
//! - Benchmark runner with optional brute-force verification
//! - Result recording (JSON/CSV) and summaries

mod dataset;
mod parser;
mod result;
mod runner;

pub use dataset::{Instance, InstanceInfo};
pub use parser::{InstanceParser, ParseError};
pub use result::{BenchmarkResult, DimSummary, RunResult};
pub use runner::{BenchmarkConfig, BenchmarkRunner};
