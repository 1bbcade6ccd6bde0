//! Square cost matrix.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::{Error, Result};

/// Square `dim x dim` matrix of non-negative integer costs.
///
/// Entry `(i, j)` is the cost of assigning row (job) `i` to column
/// (worker) `j`. Input entries are `u32`; storage is widened to `u64` so the
/// additions performed by the Hungarian adjustment step cannot overflow.
///
/// A matrix is validated once at construction and is never resized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix {
    dim: usize,
    data: Vec<u64>,
}

impl CostMatrix {
    /// Builds a matrix from rows, validating that it is square and non-empty.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self> {
        let dim = rows.len();
        if dim == 0 {
            return Err(Error::invalid_dimension("cost matrix has no rows"));
        }

        let mut data = Vec::with_capacity(dim * dim);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != dim {
                return Err(Error::invalid_dimension(format!(
                    "matrix must be square: row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    dim
                )));
            }
            data.extend(row.into_iter().map(u64::from));
        }

        Ok(Self { dim, data })
    }

    /// Builds a matrix that is zero on the cells `(i, permutation[i])` and
    /// `off_cost` everywhere else.
    ///
    /// With a positive `off_cost` the permutation is the unique optimum.
    pub fn from_permutation(permutation: &[usize], off_cost: u32) -> Result<Self> {
        let dim = permutation.len();
        if dim == 0 {
            return Err(Error::invalid_dimension("permutation is empty"));
        }

        let mut seen = vec![false; dim];
        for &col in permutation {
            if col >= dim || seen[col] {
                return Err(Error::invalid_dimension(format!(
                    "{:?} is not a permutation of 0..{}",
                    permutation, dim
                )));
            }
            seen[col] = true;
        }

        let mut data = vec![u64::from(off_cost); dim * dim];
        for (row, &col) in permutation.iter().enumerate() {
            data[row * dim + col] = 0;
        }

        Ok(Self { dim, data })
    }

    /// Number of rows (equal to the number of columns).
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u64 {
        self.data[row * self.dim + col]
    }

    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut u64 {
        &mut self.data[row * self.dim + col]
    }

    #[inline]
    pub fn is_zero(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == 0
    }

    pub fn row(&self, row: usize) -> &[u64] {
        let start = row * self.dim;
        &self.data[start..start + self.dim]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [u64] {
        let start = row * self.dim;
        &mut self.data[start..start + self.dim]
    }

    /// Iterates over the rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[u64]> + '_ {
        self.data.chunks_exact(self.dim)
    }

    /// Iterates over the entries of one column, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = u64> + '_ {
        self.data.iter().skip(col).step_by(self.dim).copied()
    }

    pub fn row_min(&self, row: usize) -> u64 {
        self.row(row).iter().copied().min().unwrap_or(0)
    }

    pub fn column_min(&self, col: usize) -> u64 {
        self.column(col).min().unwrap_or(0)
    }

    /// Counts the zero entries of the whole matrix.
    pub fn count_zeros(&self) -> usize {
        self.data.iter().filter(|&&v| v == 0).count()
    }

    /// Sum of all entries, saturating at `u64::MAX`.
    pub fn sum(&self) -> u64 {
        self.data.iter().fold(0u64, |acc, &v| acc.saturating_add(v))
    }

    /// Total cost of assigning row `i` to `assignment[i]`.
    ///
    /// Returns `None` if the assignment has the wrong length or references a
    /// column outside the matrix.
    pub fn total_cost(&self, assignment: &[usize]) -> Option<u64> {
        if assignment.len() != self.dim {
            return None;
        }
        assignment
            .iter()
            .enumerate()
            .try_fold(0u64, |acc, (row, &col)| {
                (col < self.dim).then(|| acc.saturating_add(self.get(row, col)))
            })
    }

    /// Copies the matrix out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<u64>> {
        self.rows().map(<[u64]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<u32>>> for CostMatrix {
    type Error = Error;

    fn try_from(rows: Vec<Vec<u32>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl Index<(usize, usize)> for CostMatrix {
    type Output = u64;

    fn index(&self, (row, col): (usize, usize)) -> &u64 {
        &self.data[row * self.dim + col]
    }
}

impl IndexMut<(usize, usize)> for CostMatrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut u64 {
        self.get_mut(row, col)
    }
}

impl fmt::Display for CostMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str("\t")?;
                }
                write!(f, "{}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_square() {
        let m = CostMatrix::from_rows(vec![vec![4, 1, 3], vec![2, 0, 5], vec![3, 2, 2]]).unwrap();
        assert_eq!(m.dim(), 3);
        assert_eq!(m.get(0, 1), 1);
        assert_eq!(m[(2, 2)], 2);
        assert_eq!(m.row(1), &[2, 0, 5]);
        assert_eq!(m.column(0).collect::<Vec<_>>(), vec![4, 2, 3]);
    }

    #[test]
    fn test_from_rows_rejects_empty() {
        let err = CostMatrix::from_rows(vec![]).unwrap_err();
        assert!(matches!(err, Error::InvalidDimension(_)));
    }

    #[test]
    fn test_from_rows_rejects_non_square() {
        let err = CostMatrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap_err();
        assert!(matches!(err, Error::InvalidDimension(_)));

        let err = CostMatrix::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert!(matches!(err, Error::InvalidDimension(_)));

        let err = CostMatrix::from_rows(vec![vec![]]).unwrap_err();
        assert!(matches!(err, Error::InvalidDimension(_)));
    }

    #[test]
    fn test_minima_and_zeros() {
        let m = CostMatrix::from_rows(vec![vec![4, 1, 3], vec![2, 0, 5], vec![3, 2, 2]]).unwrap();
        assert_eq!(m.row_min(0), 1);
        assert_eq!(m.row_min(1), 0);
        assert_eq!(m.column_min(2), 2);
        assert_eq!(m.count_zeros(), 1);
        assert_eq!(m.sum(), 22);
    }

    #[test]
    fn test_total_cost() {
        let m = CostMatrix::from_rows(vec![vec![4, 1, 3], vec![2, 0, 5], vec![3, 2, 2]]).unwrap();
        assert_eq!(m.total_cost(&[1, 0, 2]), Some(5));
        assert_eq!(m.total_cost(&[0, 1, 2]), Some(6));
        assert_eq!(m.total_cost(&[0, 1]), None);
        assert_eq!(m.total_cost(&[0, 1, 3]), None);
    }

    #[test]
    fn test_from_permutation() {
        let m = CostMatrix::from_permutation(&[2, 0, 1], 7).unwrap();
        assert_eq!(m.to_rows(), vec![vec![7, 7, 0], vec![0, 7, 7], vec![7, 0, 7]]);

        assert!(CostMatrix::from_permutation(&[0, 0, 1], 7).is_err());
        assert!(CostMatrix::from_permutation(&[0, 3, 1], 7).is_err());
        assert!(CostMatrix::from_permutation(&[], 7).is_err());
    }

    #[test]
    fn test_mutation_and_display() {
        let mut m = CostMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        *m.get_mut(0, 0) = 0;
        m[(1, 1)] += 10;
        m.row_mut(1)[0] = 9;
        assert_eq!(m.to_string(), "0\t2\n9\t14\n");
    }

    #[test]
    fn test_large_entries_widen() {
        let m = CostMatrix::from_rows(vec![vec![u32::MAX, u32::MAX], vec![u32::MAX, u32::MAX]])
            .unwrap();
        assert_eq!(m.sum(), 4 * u64::from(u32::MAX));
    }
}
