//! Integration tests for u-assign-hungarian.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_assign_core::generator::{planted_cost_matrix, random_cost_matrix};
use u_assign_core::{Config, CostMatrix, Error, Solver};
use u_assign_hungarian::reduction::{is_reduced, subtract_min_from_columns, subtract_min_from_rows};
use u_assign_hungarian::{solve, BruteForceSolver, HungarianSolver};

fn matrix(rows: Vec<Vec<u32>>) -> CostMatrix {
    CostMatrix::from_rows(rows).unwrap()
}

fn assert_bijection(permutation: &[usize], dim: usize) {
    assert_eq!(permutation.len(), dim);
    let mut sorted = permutation.to_vec();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..dim).collect::<Vec<_>>(), "not a permutation: {:?}", permutation);
}

/// A 5x5 matrix whose zeros admit no perfect matching although the greedy
/// cover needs 5 lines.
fn greedy_overcount_matrix() -> CostMatrix {
    matrix(vec![
        vec![0, 0, 0, 5, 5],
        vec![0, 5, 5, 5, 5],
        vec![5, 0, 5, 5, 5],
        vec![5, 5, 0, 5, 5],
        vec![5, 5, 5, 0, 0],
    ])
}

mod known_cases {
    use super::*;

    #[test]
    fn test_worked_example() {
        let costs = vec![vec![4, 1, 3], vec![2, 0, 5], vec![3, 2, 2]];
        let expected = BruteForceSolver.solve(matrix(costs.clone())).unwrap();
        let result = HungarianSolver::default().solve(matrix(costs)).unwrap();

        assert_eq!(result.total_cost, expected.total_cost);
        assert_eq!(result.total_cost, Some(5));
        assert_eq!(result.permutation(), Some(vec![1, 0, 2]));
    }

    #[test]
    fn test_identity_case() {
        let assignment = solve(vec![vec![0, 5, 5], vec![5, 0, 5], vec![5, 5, 0]]).unwrap();
        assert_eq!(assignment, vec![0, 1, 2]);
    }

    #[test]
    fn test_single_cell() {
        assert_eq!(solve(vec![vec![7]]).unwrap(), vec![0]);
    }

    #[test]
    fn test_multiple_optima_compare_cost() {
        let costs = vec![
            vec![1, 1, 1, 1],
            vec![1, 1, 1, 1],
            vec![2, 2, 1, 1],
            vec![2, 2, 1, 1],
        ];
        let result = HungarianSolver::default().solve(matrix(costs.clone())).unwrap();
        let permutation = result.permutation().unwrap();

        assert_bijection(&permutation, 4);
        assert_eq!(result.total_cost, Some(4));
        assert_eq!(matrix(costs).total_cost(&permutation), Some(4));
    }

    #[test]
    fn test_anti_diagonal() {
        let costs = vec![
            vec![9, 9, 9, 1],
            vec![9, 9, 1, 9],
            vec![9, 1, 9, 9],
            vec![1, 9, 9, 9],
        ];
        assert_eq!(solve(costs).unwrap(), vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_large_costs_do_not_overflow() {
        let max = u32::MAX;
        let costs = vec![vec![max, max, 0], vec![max, 0, max], vec![0, max, max - 1]];
        let result = HungarianSolver::default().solve(matrix(costs)).unwrap();
        assert_eq!(result.permutation(), Some(vec![2, 1, 0]));
        assert_eq!(result.total_cost, Some(0));
    }
}

mod validation {
    use super::*;

    #[test]
    fn test_non_square_rejected() {
        let err = solve(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap_err();
        assert!(matches!(err, Error::InvalidDimension(_)));
    }

    #[test]
    fn test_empty_rejected() {
        let err = solve(vec![]).unwrap_err();
        assert!(matches!(err, Error::InvalidDimension(_)));
    }

    #[test]
    fn test_ragged_rejected() {
        let err = solve(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert!(matches!(err, Error::InvalidDimension(_)));
    }
}

mod cover_repair {
    use super::*;

    #[test]
    fn test_repair_recovers_optimum() {
        let solver = HungarianSolver::new(Config::new().with_history(true));
        let result = solver.solve(greedy_overcount_matrix()).unwrap();

        assert!(result.is_complete());
        assert_eq!(result.repairs, 1);
        assert_eq!(result.rounds, 1);
        assert_eq!(result.total_cost, Some(5));
        assert_eq!(result.line_history[0], 5);
        assert_eq!(result.line_history[1], 4);

        let expected = BruteForceSolver.solve(greedy_overcount_matrix()).unwrap();
        assert_eq!(result.total_cost, expected.total_cost);
    }

    #[test]
    fn test_without_repair_result_is_incomplete() {
        let solver = HungarianSolver::new(Config::new().with_repair_cover(false));
        let result = solver.solve(greedy_overcount_matrix()).unwrap();

        assert!(!result.is_complete());
        assert_eq!(result.total_cost, None);
        assert_eq!(result.unassigned_rows().len(), 1);
        assert_eq!(result.repairs, 0);

        match result.into_permutation() {
            Err(Error::NoFeasibleAssignment { unassigned }) => assert_eq!(unassigned.len(), 1),
            other => panic!("expected NoFeasibleAssignment, got {:?}", other),
        }
    }
}

mod properties {
    use super::*;

    #[test]
    fn test_reduction_leaves_zero_in_every_line() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let dim = rng.gen_range(1..=8);
            let mut m = random_cost_matrix(dim, 50, &mut rng).unwrap();
            subtract_min_from_rows(&mut m);
            subtract_min_from_columns(&mut m);
            assert!(is_reduced(&m), "not reduced:\n{}", m);
        }
    }

    #[test]
    fn test_assignment_is_bijection() {
        let mut rng = StdRng::seed_from_u64(17);
        let solver = HungarianSolver::default();
        for _ in 0..300 {
            let dim = rng.gen_range(1..=8);
            let m = random_cost_matrix(dim, 20, &mut rng).unwrap();
            let result = solver.solve(m).unwrap();
            let permutation = result.permutation().expect("complete assignment");
            assert_bijection(&permutation, dim);
        }
    }

    #[test]
    fn test_matches_brute_force_optimum() {
        let mut rng = StdRng::seed_from_u64(2024);
        let solver = HungarianSolver::default();
        for _ in 0..300 {
            let dim = rng.gen_range(1..=6);
            // Small cost ranges produce many zeros and ties.
            let max_cost = if rng.gen_bool(0.5) { 3 } else { 100 };
            let m = random_cost_matrix(dim, max_cost, &mut rng).unwrap();

            let expected = BruteForceSolver.solve(m.clone()).unwrap();
            let result = solver.solve(m.clone()).unwrap();

            assert_eq!(
                result.total_cost, expected.total_cost,
                "suboptimal assignment {:?} for\n{}",
                result.assignment, m
            );
        }
    }

    #[test]
    fn test_planted_optimum_found() {
        let mut rng = StdRng::seed_from_u64(99);
        let solver = HungarianSolver::default();
        for dim in 1..=12 {
            let (m, planted) = planted_cost_matrix(dim, 40, &mut rng).unwrap();
            let result = solver.solve(m).unwrap();
            assert_eq!(result.permutation(), Some(planted));
            assert_eq!(result.total_cost, Some(0));
        }
    }

    #[test]
    fn test_rounds_stay_within_bound() {
        let mut rng = StdRng::seed_from_u64(7);
        let solver = HungarianSolver::default();
        for _ in 0..50 {
            let m = random_cost_matrix(20, 1000, &mut rng).unwrap();
            let result = solver.solve(m).unwrap();
            assert!(result.is_complete());
        }
    }
}
