//! Benchmark result recording.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Outcome of one solver run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    /// Instance name
    pub instance: String,
    /// Matrix dimension
    pub dim: usize,
    /// Run index for this instance
    pub run: usize,
    /// Column per row (null for unassigned rows)
    pub assignment: Vec<Option<usize>>,
    /// Whether every row was assigned
    pub complete: bool,
    /// Total cost, if complete
    pub total_cost: Option<u64>,
    /// Known or brute-force optimum
    pub reference_cost: Option<u64>,
    /// Whether the cost matched the reference (None if not checked)
    pub verified: Option<bool>,
    /// Adjustment rounds
    pub rounds: usize,
    /// Cover repairs
    pub repairs: usize,
    /// Solve time in milliseconds
    pub time_ms: u64,
    /// Error message if the run failed
    pub error: Option<String>,
}

impl RunResult {
    pub fn new(instance: impl Into<String>, dim: usize, run: usize) -> Self {
        Self {
            instance: instance.into(),
            dim,
            run,
            assignment: Vec::new(),
            complete: false,
            total_cost: None,
            reference_cost: None,
            verified: None,
            rounds: 0,
            repairs: 0,
            time_ms: 0,
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Returns true if the run failed, was incomplete, or missed the reference.
    pub fn is_failure(&self) -> bool {
        self.error.is_some() || !self.complete || self.verified == Some(false)
    }
}

/// Aggregated statistics for one dimension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimSummary {
    pub dim: usize,
    pub run_count: usize,
    pub avg_rounds: f64,
    pub max_rounds: usize,
    pub total_repairs: usize,
    pub avg_time_ms: u64,
}

/// Collection of benchmark runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub runs: Vec<RunResult>,
}

impl BenchmarkResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_run(&mut self, run: RunResult) {
        self.runs.push(run);
    }

    /// Runs that failed, were incomplete, or missed their reference cost.
    pub fn failures(&self) -> Vec<&RunResult> {
        self.runs.iter().filter(|r| r.is_failure()).collect()
    }

    /// Returns true if every run was checked and matched its reference.
    pub fn all_verified(&self) -> bool {
        self.runs.iter().all(|r| r.verified == Some(true))
    }

    /// Per-dimension statistics, ordered by dimension.
    pub fn summary_by_dim(&self) -> Vec<DimSummary> {
        let mut groups: BTreeMap<usize, Vec<&RunResult>> = BTreeMap::new();
        for run in &self.runs {
            groups.entry(run.dim).or_default().push(run);
        }

        groups
            .into_iter()
            .map(|(dim, runs)| {
                let n = runs.len();
                DimSummary {
                    dim,
                    run_count: n,
                    avg_rounds: runs.iter().map(|r| r.rounds as f64).sum::<f64>() / n as f64,
                    max_rounds: runs.iter().map(|r| r.rounds).max().unwrap_or(0),
                    total_repairs: runs.iter().map(|r| r.repairs).sum(),
                    avg_time_ms: runs.iter().map(|r| r.time_ms).sum::<u64>() / n as u64,
                }
            })
            .collect()
    }

    /// Prints a table of runs followed by per-dimension statistics.
    pub fn print_summary(&self) {
        println!(
            "{:<24} {:>5} {:>4} {:>12} {:>12} {:>7} {:>7} {:>8}",
            "instance", "dim", "run", "cost", "reference", "rounds", "repairs", "status"
        );
        println!("{:-<86}", "");
        for run in &self.runs {
            let status = match (&run.error, run.complete, run.verified) {
                (Some(_), _, _) => "error",
                (None, false, _) => "partial",
                (None, true, Some(false)) => "MISMATCH",
                (None, true, Some(true)) => "ok",
                (None, true, None) => "-",
            };
            println!(
                "{:<24} {:>5} {:>4} {:>12} {:>12} {:>7} {:>7} {:>8}",
                run.instance,
                run.dim,
                run.run,
                fmt_opt(run.total_cost),
                fmt_opt(run.reference_cost),
                run.rounds,
                run.repairs,
                status
            );
        }

        println!("\nBy dimension:");
        for summary in self.summary_by_dim() {
            println!(
                "  dim={:<5} runs={:<4} avg_rounds={:.2} max_rounds={} repairs={} avg_time={}ms",
                summary.dim,
                summary.run_count,
                summary.avg_rounds,
                summary.max_rounds,
                summary.total_repairs,
                summary.avg_time_ms
            );
        }

        let failures = self.failures().len();
        if failures > 0 {
            println!("\n{} of {} runs failed", failures, self.runs.len());
        }
    }

    /// Saves the runs as pretty JSON.
    pub fn save_json(&self, path: &Path) -> io::Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self).map_err(io::Error::from)
    }

    /// Saves one CSV row per run.
    pub fn save_csv(&self, path: &Path) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        writeln!(
            out,
            "instance,dim,run,total_cost,reference_cost,verified,rounds,repairs,time_ms,error"
        )?;
        for run in &self.runs {
            writeln!(
                out,
                "{},{},{},{},{},{},{},{},{},{}",
                csv_field(&run.instance),
                run.dim,
                run.run,
                fmt_opt(run.total_cost),
                fmt_opt(run.reference_cost),
                run.verified.map(|v| v.to_string()).unwrap_or_default(),
                run.rounds,
                run.repairs,
                run.time_ms,
                csv_field(run.error.as_deref().unwrap_or(""))
            )?;
        }
        out.flush()
    }
}

fn fmt_opt(value: Option<u64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn csv_field(value: &str) -> String {
    if value.contains(&[',', '"', '\n'][..]) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
