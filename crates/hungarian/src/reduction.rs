//! Row and column reduction.
//!
//! Subtracting a constant from a whole row or column changes every
//! assignment's cost by the same amount, so the optimal assignment is
//! unchanged. Rows must be reduced before columns.

use u_assign_core::CostMatrix;

/// Subtracts each row's minimum from every entry of that row.
///
/// Afterwards every row contains at least one zero.
pub fn subtract_min_from_rows(matrix: &mut CostMatrix) {
    for i in 0..matrix.dim() {
        let min = matrix.row_min(i);
        if min == 0 {
            continue;
        }
        for value in matrix.row_mut(i) {
            *value -= min;
        }
    }
}

/// Subtracts each column's minimum from every entry of that column.
///
/// Run after [`subtract_min_from_rows`]: a column that already holds a zero
/// has minimum `0` and is left untouched, so the row zeros survive and every
/// column gains at least one zero.
pub fn subtract_min_from_columns(matrix: &mut CostMatrix) {
    let dim = matrix.dim();
    for j in 0..dim {
        let min = matrix.column_min(j);
        if min == 0 {
            continue;
        }
        for i in 0..dim {
            matrix[(i, j)] -= min;
        }
    }
}

/// Returns true if every row and every column holds at least one zero.
pub fn is_reduced(matrix: &CostMatrix) -> bool {
    let dim = matrix.dim();
    (0..dim).all(|i| matrix.row_min(i) == 0) && (0..dim).all(|j| matrix.column_min(j) == 0)
}
