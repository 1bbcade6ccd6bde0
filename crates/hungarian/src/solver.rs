//! Kuhn-Munkres solver.

use std::time::Instant;

use log::{debug, trace, warn};
use u_assign_core::{Config, CostMatrix, Error, Result, SolveResult, Solver};

use crate::engine::AssignmentSolver;

/// Minimum-cost assignment via the Hungarian method.
///
/// Pipeline: row and column reduction, greedy line cover, adjustment while
/// fewer than `dim` lines are needed, then extraction of a zero matching.
/// When the greedy cover reports `dim` lines although no zero matching
/// exists, the cover is recomputed as a minimum cover and the loop resumes
/// (see [`Config::repair_cover`]).
#[derive(Debug, Clone, Default)]
pub struct HungarianSolver {
    config: Config,
}

impl HungarianSolver {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Solver for HungarianSolver {
    fn name(&self) -> &'static str {
        "hungarian"
    }

    fn solve(&self, matrix: CostMatrix) -> Result<SolveResult> {
        let start = Instant::now();
        let dim = matrix.dim();
        let original = matrix.clone();
        let mut result = SolveResult::new(dim).with_solver(self.name());

        let mut engine = AssignmentSolver::new(matrix);
        engine.reduce();
        trace!("reduced cost matrix:\n{}", engine.matrix());

        let max_rounds = self
            .config
            .max_rounds
            .unwrap_or_else(|| convergence_bound(engine.matrix()));

        let mut lines = engine.cover_zeros();
        self.record(&mut result, lines);
        debug!("cover pass: {} lines for dim {}", lines, dim);

        loop {
            while lines < dim {
                if result.rounds >= max_rounds {
                    return Err(Error::NonConvergence {
                        rounds: result.rounds,
                    });
                }
                let min_uncovered = engine.change_cost_matrix()?;
                result.rounds += 1;

                lines = engine.cover_zeros();
                self.record(&mut result, lines);
                debug!(
                    "round {}: adjusted by {}, cover pass: {} lines",
                    result.rounds, min_uncovered, lines
                );
            }

            trace!("cost matrix before extraction:\n{}", engine.matrix());
            engine.find_assignment();
            if engine.is_complete() || !self.config.repair_cover {
                break;
            }

            lines = engine.repair_cover();
            result.repairs += 1;
            self.record(&mut result, lines);
            warn!(
                "greedy cover overstated the line count; minimum cover has {} lines for dim {}",
                lines, dim
            );
            if lines >= dim {
                return Err(Error::internal(
                    "minimum cover has dim lines but no zero matching exists",
                ));
            }
        }

        result.assignment = engine.assignment().to_vec();
        result.total_cost = result
            .permutation()
            .and_then(|permutation| original.total_cost(&permutation));
        result.computation_time_ms = start.elapsed().as_millis() as u64;

        if !result.is_complete() {
            debug!("extraction left rows {:?} unassigned", result.unassigned_rows());
        }

        Ok(result)
    }
}

impl HungarianSolver {
    fn record(&self, result: &mut SolveResult, lines: usize) {
        if self.config.record_history {
            result.line_history.push(lines);
        }
    }
}

/// Upper bound on adjustment rounds for a reduced matrix.
///
/// Entries never go negative, and an adjustment with `k < dim` lines lowers
/// the matrix sum by `min_uncovered * dim * (dim - k) >= dim`.
pub fn convergence_bound(reduced: &CostMatrix) -> usize {
    let per_round = reduced.dim() as u64;
    let rounds = (reduced.sum() / per_round).saturating_add(1);
    usize::try_from(rounds).unwrap_or(usize::MAX)
}
