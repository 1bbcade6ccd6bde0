//! Stateful Kuhn-Munkres pipeline over an owned cost matrix.

use u_assign_core::{CostMatrix, Error, Result};

use crate::cover::LineCover;
use crate::extraction;
use crate::reduction;

/// Owns a cost matrix and the bookkeeping of the Hungarian method.
///
/// The matrix is reduced and adjusted in place; callers only get read-only
/// views of it. [`HungarianSolver`](crate::HungarianSolver) drives the steps
/// in order, but they are exposed individually for inspection.
#[derive(Debug, Clone)]
pub struct AssignmentSolver {
    matrix: CostMatrix,
    cover: LineCover,
    assignment: Vec<Option<usize>>,
}

impl AssignmentSolver {
    /// Takes ownership of `matrix`.
    pub fn new(matrix: CostMatrix) -> Self {
        let dim = matrix.dim();
        Self {
            matrix,
            cover: LineCover::new(dim),
            assignment: vec![None; dim],
        }
    }

    pub fn dim(&self) -> usize {
        self.matrix.dim()
    }

    /// Current (reduced/adjusted) matrix.
    pub fn matrix(&self) -> &CostMatrix {
        &self.matrix
    }

    /// Cover produced by the last cover pass.
    pub fn cover(&self) -> &LineCover {
        &self.cover
    }

    /// Lines used by the last cover pass.
    pub fn lines(&self) -> usize {
        self.cover.lines()
    }

    pub fn row_covered(&self) -> &[bool] {
        self.cover.row_covered()
    }

    pub fn column_covered(&self) -> &[bool] {
        self.cover.column_covered()
    }

    /// Assignment produced by the last extraction.
    pub fn assignment(&self) -> &[Option<usize>] {
        &self.assignment
    }

    pub fn is_complete(&self) -> bool {
        extraction::is_perfect(&self.assignment)
    }

    pub fn subtract_min_from_rows(&mut self) {
        reduction::subtract_min_from_rows(&mut self.matrix);
    }

    pub fn subtract_min_from_columns(&mut self) {
        reduction::subtract_min_from_columns(&mut self.matrix);
    }

    /// Row reduction followed by column reduction.
    pub fn reduce(&mut self) {
        self.subtract_min_from_rows();
        self.subtract_min_from_columns();
    }

    /// Greedy cover pass; returns the number of lines.
    pub fn cover_zeros(&mut self) -> usize {
        self.cover.cover_zeros(&self.matrix)
    }

    /// Replaces the current cover with a minimum one; returns its line count.
    pub fn repair_cover(&mut self) -> usize {
        self.cover.cover_zeros_minimum(&self.matrix)
    }

    pub fn all_zeros_covered(&self) -> bool {
        self.cover.all_zeros_covered()
    }

    /// Subtracts the smallest uncovered entry from every uncovered cell and
    /// adds it to every cell covered twice. Returns that entry.
    ///
    /// Fails if the cover leaves no cell uncovered or an uncovered zero,
    /// since the matrix could not change.
    pub fn change_cost_matrix(&mut self) -> Result<u64> {
        let dim = self.dim();
        let min_uncovered = (0..dim)
            .flat_map(|i| (0..dim).map(move |j| (i, j)))
            .filter(|&(i, j)| !self.cover.is_covered(i, j))
            .map(|(i, j)| self.matrix.get(i, j))
            .min()
            .ok_or_else(|| Error::internal("cover leaves no cell uncovered"))?;

        if min_uncovered == 0 {
            return Err(Error::internal("cover leaves a zero uncovered"));
        }

        let rows = self.cover.row_covered();
        let columns = self.cover.column_covered();
        for i in 0..dim {
            for j in 0..dim {
                match (rows[i], columns[j]) {
                    (false, false) => self.matrix[(i, j)] -= min_uncovered,
                    (true, true) => self.matrix[(i, j)] += min_uncovered,
                    _ => {}
                }
            }
        }

        Ok(min_uncovered)
    }

    /// Extracts an assignment from the zero entries.
    pub fn find_assignment(&mut self) -> &[Option<usize>] {
        self.assignment = extraction::find_assignment(&self.matrix);
        &self.assignment
    }

    /// Gives the working matrix back.
    pub fn into_matrix(self) -> CostMatrix {
        self.matrix
    }
}
