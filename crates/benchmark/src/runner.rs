//! Benchmark runner.

use crate::dataset::Instance;
use crate::result::{BenchmarkResult, RunResult};
use log::{info, warn};
use rayon::prelude::*;
use u_assign_core::{Config, Solver};
use u_assign_hungarian::{BruteForceSolver, HungarianSolver, MAX_BRUTE_FORCE_DIM};

/// Benchmark configuration.
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Solver configuration
    pub solver: Config,
    /// Number of runs per instance
    pub runs_per_instance: usize,
    /// Check results against brute force when no optimum is known
    pub verify: bool,
    /// Largest dimension checked by brute force
    pub verify_max_dim: usize,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            solver: Config::default(),
            runs_per_instance: 1,
            verify: false,
            verify_max_dim: 8,
        }
    }
}

impl BenchmarkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_solver_config(mut self, config: Config) -> Self {
        self.solver = config;
        self
    }

    pub fn with_runs_per_instance(mut self, runs: usize) -> Self {
        self.runs_per_instance = runs.max(1);
        self
    }

    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    pub fn with_verify_max_dim(mut self, dim: usize) -> Self {
        self.verify_max_dim = dim.min(MAX_BRUTE_FORCE_DIM);
        self
    }
}

/// Runs the Hungarian solver over instances in parallel.
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
    solver: HungarianSolver,
}

impl BenchmarkRunner {
    pub fn new(config: BenchmarkConfig) -> Self {
        let solver = HungarianSolver::new(config.solver.clone());
        Self { config, solver }
    }

    /// Solves every instance `runs_per_instance` times.
    pub fn run_instances(&self, instances: &[Instance]) -> BenchmarkResult {
        info!(
            "running {} instances x {} runs",
            instances.len(),
            self.config.runs_per_instance
        );

        let jobs: Vec<(&Instance, usize)> = instances
            .iter()
            .flat_map(|instance| (0..self.config.runs_per_instance).map(move |run| (instance, run)))
            .collect();

        let runs: Vec<RunResult> = jobs
            .into_par_iter()
            .map(|(instance, run)| self.run_single(instance, run))
            .collect();

        let mut result = BenchmarkResult::new();
        for run in runs {
            result.add_run(run);
        }
        result
    }

    /// Solves one instance once and verifies the cost if possible.
    pub fn run_single(&self, instance: &Instance, run: usize) -> RunResult {
        let mut record = RunResult::new(&instance.name, instance.dim(), run);

        let matrix = match instance.cost_matrix() {
            Ok(matrix) => matrix,
            Err(e) => return record.with_error(e.to_string()),
        };

        let solved = match self.solver.solve(matrix) {
            Ok(solved) => solved,
            Err(e) => {
                warn!("{} run {}: {}", instance.name, run, e);
                return record.with_error(e.to_string());
            }
        };

        record.total_cost = solved.total_cost;
        record.complete = solved.is_complete();
        record.rounds = solved.rounds;
        record.repairs = solved.repairs;
        record.time_ms = solved.computation_time_ms;
        record.assignment = solved.assignment;

        record.reference_cost = match instance.optimal_cost {
            Some(cost) => Some(cost),
            None => self.reference_cost(instance),
        };
        if let Some(reference) = record.reference_cost {
            let ok = record.total_cost == Some(reference);
            if !ok {
                warn!(
                    "{} run {}: cost {:?} differs from reference {}",
                    instance.name, run, record.total_cost, reference
                );
            }
            record.verified = Some(ok);
        }

        record
    }

    fn reference_cost(&self, instance: &Instance) -> Option<u64> {
        if !self.config.verify || instance.dim() > self.config.verify_max_dim {
            return None;
        }
        let matrix = instance.cost_matrix().ok()?;
        BruteForceSolver.solve(matrix).ok()?.total_cost
    }
}
