//! Extracting a matching from the zero entries of a reduced matrix.

use u_assign_core::CostMatrix;

/// Row-by-row search steps allowed per cell before switching to augmenting paths.
const SEARCH_STEPS_PER_CELL: usize = 4;

/// Finds a perfect matching that uses only zero entries.
///
/// Rows are assigned in order, each to the lowest free zero column; a row
/// with no free zero undoes the previous row's choice and resumes that row
/// from its next column. The search is depth-first over an explicit stack.
/// If the step budget runs out or the search space is exhausted the result
/// comes from [`maximum_zero_matching`], so the returned assignment is
/// complete whenever a zero perfect matching exists and otherwise assigns as
/// many rows as possible.
pub fn find_assignment(matrix: &CostMatrix) -> Vec<Option<usize>> {
    let dim = matrix.dim();
    let budget = dim
        .saturating_mul(dim)
        .saturating_mul(SEARCH_STEPS_PER_CELL);

    match depth_first_assignment(matrix, budget) {
        Some(assignment) => assignment.into_iter().map(Some).collect(),
        None => maximum_zero_matching(matrix),
    }
}

/// Backtracking search in row order; `None` if it fails within `budget` steps.
fn depth_first_assignment(matrix: &CostMatrix, budget: usize) -> Option<Vec<usize>> {
    let dim = matrix.dim();
    let mut used = vec![false; dim];
    // stack[i] = column chosen for row i; next[i] = first column still to try.
    let mut stack: Vec<usize> = Vec::with_capacity(dim);
    let mut next = vec![0usize; dim];
    let mut steps = 0usize;

    while stack.len() < dim {
        steps += 1;
        if steps > budget {
            return None;
        }

        let row = stack.len();
        let candidate = (next[row]..dim).find(|&col| !used[col] && matrix.is_zero(row, col));

        match candidate {
            Some(col) => {
                used[col] = true;
                next[row] = col + 1;
                stack.push(col);
                if row + 1 < dim {
                    next[row + 1] = 0;
                }
            }
            None => {
                let col = stack.pop()?;
                used[col] = false;
            }
        }
    }

    Some(stack)
}

/// Maximum matching over the zero entries (augmenting paths).
///
/// Returns the column matched to each row, `None` for unmatched rows.
pub fn maximum_zero_matching(matrix: &CostMatrix) -> Vec<Option<usize>> {
    let dim = matrix.dim();
    let mut column_of_row: Vec<Option<usize>> = vec![None; dim];
    let mut row_of_column: Vec<Option<usize>> = vec![None; dim];
    let mut visited = vec![false; dim];

    for row in 0..dim {
        visited.fill(false);
        augment(
            matrix,
            row,
            &mut visited,
            &mut column_of_row,
            &mut row_of_column,
        );
    }

    column_of_row
}

fn augment(
    matrix: &CostMatrix,
    row: usize,
    visited: &mut [bool],
    column_of_row: &mut [Option<usize>],
    row_of_column: &mut [Option<usize>],
) -> bool {
    for col in 0..matrix.dim() {
        if visited[col] || !matrix.is_zero(row, col) {
            continue;
        }
        visited[col] = true;

        let free = match row_of_column[col] {
            None => true,
            Some(owner) => augment(matrix, owner, visited, column_of_row, row_of_column),
        };
        if free {
            column_of_row[row] = Some(col);
            row_of_column[col] = Some(row);
            return true;
        }
    }
    false
}

/// Returns true if `assignment` is total and uses every column once.
pub fn is_perfect(assignment: &[Option<usize>]) -> bool {
    let mut seen = vec![false; assignment.len()];
    assignment.iter().all(|col| match col {
        Some(col) if *col < seen.len() && !seen[*col] => {
            seen[*col] = true;
            true
        }
        _ => false,
    })
}
