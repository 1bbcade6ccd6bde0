//! Covering the zeros of a reduced matrix with row and column lines.

use std::collections::VecDeque;

use u_assign_core::CostMatrix;

use crate::extraction::maximum_zero_matching;

/// Line cover of the zero entries plus the bookkeeping used to build it.
///
/// `zeros_in_row[i]` and `zeros_in_column[j]` count the zeros of a line that
/// no chosen line covers yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineCover {
    zeros_in_row: Vec<usize>,
    zeros_in_column: Vec<usize>,
    row_covered: Vec<bool>,
    column_covered: Vec<bool>,
    lines: usize,
}

impl LineCover {
    /// Creates an empty cover for a `dim x dim` matrix.
    pub fn new(dim: usize) -> Self {
        Self {
            zeros_in_row: vec![0; dim],
            zeros_in_column: vec![0; dim],
            row_covered: vec![false; dim],
            column_covered: vec![false; dim],
            lines: 0,
        }
    }

    /// Greedy line cover of every zero in `matrix`; returns the line count.
    ///
    /// Each step takes the row and the column with the most uncovered zeros
    /// (lowest index on ties). The column is covered only if its count is
    /// strictly greater than the row's, otherwise the row is covered.
    pub fn cover_zeros(&mut self, matrix: &CostMatrix) -> usize {
        let dim = matrix.dim();
        self.reset(dim);

        for (i, row) in matrix.rows().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                if value == 0 {
                    self.zeros_in_row[i] += 1;
                    self.zeros_in_column[j] += 1;
                }
            }
        }

        while !self.all_zeros_covered() {
            let (max_row, row_max) = first_max(&self.zeros_in_row);
            let (max_column, column_max) = first_max(&self.zeros_in_column);

            if column_max > row_max {
                self.cover_column(matrix, max_column);
            } else {
                self.cover_row(matrix, max_row);
            }
            self.lines += 1;
        }

        self.lines
    }

    /// Replaces this cover with a minimum one (König's theorem).
    ///
    /// Rows unreachable and columns reachable by alternating paths from the
    /// unmatched rows of a maximum zero matching cover every zero, using as
    /// many lines as the matching has edges.
    pub fn cover_zeros_minimum(&mut self, matrix: &CostMatrix) -> usize {
        let dim = matrix.dim();
        self.reset(dim);

        let matching = maximum_zero_matching(matrix);
        let mut row_of_column = vec![None; dim];
        for (row, col) in matching.iter().enumerate() {
            if let Some(col) = *col {
                row_of_column[col] = Some(row);
            }
        }

        let mut row_reached = vec![false; dim];
        let mut column_reached = vec![false; dim];
        let mut queue: VecDeque<usize> = matching
            .iter()
            .enumerate()
            .filter_map(|(row, col)| col.is_none().then_some(row))
            .collect();
        for &row in &queue {
            row_reached[row] = true;
        }

        while let Some(row) = queue.pop_front() {
            for col in 0..dim {
                if !matrix.is_zero(row, col) || column_reached[col] {
                    continue;
                }
                column_reached[col] = true;
                if let Some(next) = row_of_column[col] {
                    if !row_reached[next] {
                        row_reached[next] = true;
                        queue.push_back(next);
                    }
                }
            }
        }

        for i in 0..dim {
            self.row_covered[i] = !row_reached[i];
            self.column_covered[i] = column_reached[i];
        }
        self.lines = self.row_covered.iter().filter(|&&c| c).count()
            + self.column_covered.iter().filter(|&&c| c).count();

        self.lines
    }

    /// Returns true once no uncovered zero remains.
    pub fn all_zeros_covered(&self) -> bool {
        self.zeros_in_row.iter().all(|&c| c == 0) && self.zeros_in_column.iter().all(|&c| c == 0)
    }

    /// Lines used by the last cover pass.
    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn row_covered(&self) -> &[bool] {
        &self.row_covered
    }

    pub fn column_covered(&self) -> &[bool] {
        &self.column_covered
    }

    pub fn zeros_in_row(&self) -> &[usize] {
        &self.zeros_in_row
    }

    pub fn zeros_in_column(&self) -> &[usize] {
        &self.zeros_in_column
    }

    /// Returns true if cell `(row, col)` lies on a covered line.
    #[inline]
    pub fn is_covered(&self, row: usize, col: usize) -> bool {
        self.row_covered[row] || self.column_covered[col]
    }

    fn reset(&mut self, dim: usize) {
        for v in [&mut self.zeros_in_row, &mut self.zeros_in_column] {
            v.clear();
            v.resize(dim, 0);
        }
        for v in [&mut self.row_covered, &mut self.column_covered] {
            v.clear();
            v.resize(dim, false);
        }
        self.lines = 0;
    }

    fn cover_column(&mut self, matrix: &CostMatrix, col: usize) {
        for i in 0..matrix.dim() {
            if !self.row_covered[i] && matrix.is_zero(i, col) {
                self.zeros_in_row[i] -= 1;
            }
        }
        self.zeros_in_column[col] = 0;
        self.column_covered[col] = true;
    }

    fn cover_row(&mut self, matrix: &CostMatrix, row: usize) {
        for j in 0..matrix.dim() {
            if !self.column_covered[j] && matrix.is_zero(row, j) {
                self.zeros_in_column[j] -= 1;
            }
        }
        self.zeros_in_row[row] = 0;
        self.row_covered[row] = true;
    }
}

/// Index and value of the largest count; the first occurrence wins ties.
fn first_max(counts: &[usize]) -> (usize, usize) {
    counts
        .iter()
        .enumerate()
        .fold((0, counts[0]), |best, (i, &count)| {
            if count > best.1 {
                (i, count)
            } else {
                best
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: Vec<Vec<u32>>) -> CostMatrix {
        CostMatrix::from_rows(rows).unwrap()
    }

    fn assert_covers_all_zeros(m: &CostMatrix, cover: &LineCover) {
        for i in 0..m.dim() {
            for j in 0..m.dim() {
                if m.is_zero(i, j) {
                    assert!(cover.is_covered(i, j), "zero at ({}, {}) uncovered", i, j);
                }
            }
        }
    }

    #[test]
    fn test_first_max_tie_keeps_first() {
        assert_eq!(first_max(&[2, 3, 3, 1]), (1, 3));
        assert_eq!(first_max(&[0, 0, 0]), (0, 0));
        assert_eq!(first_max(&[4]), (0, 4));
    }

    #[test]
    fn test_cover_reduced_example() {
        // Reduced form of [[4,1,3],[2,0,5],[3,2,2]].
        let m = matrix(vec![vec![2, 0, 2], vec![1, 0, 5], vec![0, 0, 0]]);
        let mut cover = LineCover::new(3);

        // Row 2 has 3 zeros, column 1 has 3: the tie goes to the row, then
        // column 1 still holds 2 uncovered zeros.
        assert_eq!(cover.cover_zeros(&m), 2);
        assert_eq!(cover.row_covered(), &[false, false, true]);
        assert_eq!(cover.column_covered(), &[false, true, false]);
        assert!(cover.all_zeros_covered());
        assert_covers_all_zeros(&m, &cover);
    }

    #[test]
    fn test_cover_diagonal() {
        let m = matrix(vec![vec![0, 5, 5], vec![5, 0, 5], vec![5, 5, 0]]);
        let mut cover = LineCover::new(3);
        assert_eq!(cover.cover_zeros(&m), 3);
        assert_eq!(cover.row_covered(), &[true, true, true]);
        assert_covers_all_zeros(&m, &cover);
    }

    #[test]
    fn test_counts_never_go_negative() {
        // Covering row 0 first, then column 0 crosses the covered row's zero.
        let m = matrix(vec![vec![0, 0, 0], vec![0, 4, 4], vec![0, 4, 4]]);
        let mut cover = LineCover::new(3);
        assert_eq!(cover.cover_zeros(&m), 2);
        assert!(cover.zeros_in_row().iter().all(|&c| c == 0));
        assert!(cover.zeros_in_column().iter().all(|&c| c == 0));
        assert_covers_all_zeros(&m, &cover);
    }

    #[test]
    fn test_cover_pass_resets_state() {
        let mut cover = LineCover::new(2);
        let a = matrix(vec![vec![0, 0], vec![0, 0]]);
        let b = matrix(vec![vec![0, 1], vec![1, 0]]);

        assert_eq!(cover.cover_zeros(&a), 2);
        assert_eq!(cover.cover_zeros(&b), 2);
        assert_eq!(cover.row_covered(), &[true, true]);
        assert_eq!(cover.column_covered(), &[false, false]);
    }

    #[test]
    fn test_greedy_overcounts_where_minimum_does_not() {
        // All zeros lie in columns 0..3, but the greedy pass starts with the
        // 3-zero row and then needs one row per remaining zero.
        let m = matrix(vec![
            vec![0, 0, 0, 5],
            vec![0, 5, 5, 5],
            vec![5, 0, 5, 5],
            vec![5, 5, 0, 5],
        ]);
        let mut cover = LineCover::new(4);
        assert_eq!(cover.cover_zeros(&m), 4);
        assert_eq!(cover.row_covered(), &[true, true, true, true]);

        assert_eq!(cover.cover_zeros_minimum(&m), 3);
        assert_eq!(cover.row_covered(), &[false, false, false, false]);
        assert_eq!(cover.column_covered(), &[true, true, true, false]);
        assert_covers_all_zeros(&m, &cover);
    }

    #[test]
    fn test_minimum_cover_perfect_matching() {
        let m = matrix(vec![vec![0, 5, 5], vec![5, 0, 5], vec![5, 5, 0]]);
        let mut cover = LineCover::new(3);
        assert_eq!(cover.cover_zeros_minimum(&m), 3);
        assert_covers_all_zeros(&m, &cover);
    }
}
