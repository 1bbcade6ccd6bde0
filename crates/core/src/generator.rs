//! Random problem generation.
//!
//! The random source is always passed in, so callers decide between a
//! seeded generator (tests, reproducible benchmarks) and `thread_rng`.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::matrix::CostMatrix;
use crate::Result;

/// Returns a uniformly random permutation of `0..dim`.
pub fn random_permutation<R: Rng>(dim: usize, rng: &mut R) -> Vec<usize> {
    let mut permutation: Vec<usize> = (0..dim).collect();
    permutation.shuffle(rng);
    permutation
}

/// Returns a `dim x dim` matrix with entries drawn uniformly from `0..=max_cost`.
pub fn random_cost_matrix<R: Rng>(
    dim: usize,
    max_cost: u32,
    rng: &mut R,
) -> Result<CostMatrix> {
    let rows = (0..dim)
        .map(|_| (0..dim).map(|_| rng.gen_range(0..=max_cost)).collect())
        .collect();
    CostMatrix::from_rows(rows)
}

/// Returns a matrix whose unique optimum is a random permutation.
///
/// The planted cells cost `0`; every other cell costs between `1` and
/// `max_cost` (at least `1`).
pub fn planted_cost_matrix<R: Rng>(
    dim: usize,
    max_cost: u32,
    rng: &mut R,
) -> Result<(CostMatrix, Vec<usize>)> {
    let permutation = random_permutation(dim, rng);
    let upper = max_cost.max(1);
    let rows = (0..dim)
        .map(|i| {
            (0..dim)
                .map(|j| {
                    if permutation[i] == j {
                        0
                    } else {
                        rng.gen_range(1..=upper)
                    }
                })
                .collect()
        })
        .collect();
    Ok((CostMatrix::from_rows(rows)?, permutation))
}
