//! Exhaustive reference solver for small matrices.

use std::time::Instant;

use u_assign_core::{CostMatrix, Error, Result, SolveResult, Solver};

/// Largest dimension [`BruteForceSolver`] accepts (10! permutations).
pub const MAX_BRUTE_FORCE_DIM: usize = 10;

/// Enumerates permutations with branch-and-bound pruning.
///
/// Ties resolve to the lexicographically smallest permutation. Intended as
/// an independent check on [`HungarianSolver`](crate::HungarianSolver).
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceSolver;

impl BruteForceSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Solver for BruteForceSolver {
    fn name(&self) -> &'static str {
        "brute-force"
    }

    fn solve(&self, matrix: CostMatrix) -> Result<SolveResult> {
        let dim = matrix.dim();
        if dim > MAX_BRUTE_FORCE_DIM {
            return Err(Error::ConfigError(format!(
                "brute force supports dim <= {}, got {}",
                MAX_BRUTE_FORCE_DIM, dim
            )));
        }

        let start = Instant::now();
        let mut search = Search {
            matrix: &matrix,
            used: vec![false; dim],
            current: Vec::with_capacity(dim),
            best: None,
        };
        search.descend(0);

        let (permutation, cost) = search
            .best
            .ok_or_else(|| Error::internal("no permutation enumerated"))?;
        let mut result = SolveResult::from_permutation(&permutation, cost).with_solver(self.name());
        result.computation_time_ms = start.elapsed().as_millis() as u64;
        Ok(result)
    }
}

struct Search<'a> {
    matrix: &'a CostMatrix,
    used: Vec<bool>,
    current: Vec<usize>,
    best: Option<(Vec<usize>, u64)>,
}

impl Search<'_> {
    fn descend(&mut self, cost: u64) {
        if let Some((_, best)) = &self.best {
            if cost >= *best {
                return;
            }
        }

        let row = self.current.len();
        if row == self.matrix.dim() {
            self.best = Some((self.current.clone(), cost));
            return;
        }

        for col in 0..self.matrix.dim() {
            if self.used[col] {
                continue;
            }
            self.used[col] = true;
            self.current.push(col);
            self.descend(cost + self.matrix.get(row, col));
            self.current.pop();
            self.used[col] = false;
        }
    }
}
