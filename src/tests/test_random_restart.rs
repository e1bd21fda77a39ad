use rand::{SeedableRng, rngs::StdRng};

use crate::{
    Objective, Problem, SearchProgress,
    optim::{DEFAULT_RESTARTS, LocalSearchOptimizer, RandomRestartOptimizer},
    problems::{DEFAULT_GOAL, EightPuzzle, NQueens, QueensState},
};

use super::LandscapeProblem;

#[test]
fn test_default_budget() {
    assert_eq!(RandomRestartOptimizer::default().restarts(), DEFAULT_RESTARTS);
    assert_eq!(DEFAULT_RESTARTS, 1000);
}

#[test]
fn test_solved_n_queens_returns_on_first_attempt() {
    let solved = vec![Some(1), Some(3), Some(0), Some(2)];
    let mut problem = NQueens::with_initial(4, solved.clone()).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let mut n_moves = 0;
    let mut callback = |_: SearchProgress<QueensState, usize>| n_moves += 1;
    let (state, score) =
        RandomRestartOptimizer::new(1000).optimize(&mut problem, &mut rng, &mut callback);
    assert_eq!(state, solved);
    assert_eq!(score, 0);
    assert_eq!(n_moves, 0);
    // the initial state was never re-randomised
    assert_eq!(problem.initial(), &solved);
}

#[test]
fn test_solved_eight_puzzle_returns_on_first_attempt() {
    let mut problem = EightPuzzle::new(DEFAULT_GOAL).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let (state, score) = RandomRestartOptimizer::new(10).run(&mut problem, &mut rng);
    assert_eq!(state, DEFAULT_GOAL);
    assert_eq!(score, 9);
    assert_eq!(problem.initial(), &DEFAULT_GOAL);
}

#[test]
fn test_escapes_local_optimum() {
    let mut problem = LandscapeProblem::new(vec![0, 5, 1, 2, 3, 9], 0, Objective::Maximize);
    let mut rng = StdRng::seed_from_u64(17);
    let (state, score) = RandomRestartOptimizer::new(1000).run(&mut problem, &mut rng);
    assert_eq!((state, score), (5, 9));
    assert!(problem.n_randomized >= 1);
    assert!(problem.n_randomized < 1000);
}

#[test]
fn test_single_attempt_behaves_like_steepest_ascent() {
    let mut problem = LandscapeProblem::new(vec![0, 5, 1, 9], 0, Objective::Maximize);
    let mut rng = StdRng::seed_from_u64(0);
    let (state, score) = RandomRestartOptimizer::new(1).run(&mut problem, &mut rng);
    assert_eq!((state, score), (1, 5));
    assert_eq!(problem.n_randomized, 1);
}

#[test]
fn test_zero_budget_returns_initial() {
    let mut problem = LandscapeProblem::new(vec![0, 5, 1, 9], 2, Objective::Maximize);
    let mut rng = StdRng::seed_from_u64(0);
    let (state, score) = RandomRestartOptimizer::new(0).run(&mut problem, &mut rng);
    assert_eq!((state, score), (2, 1));
    assert_eq!(problem.n_randomized, 0);
}

#[test]
fn test_exhausted_budget_returns_best() {
    // three queens cannot be placed without conflict
    let mut problem = NQueens::new(3).unwrap();
    let initial_score = problem.value(problem.initial());
    let mut rng = StdRng::seed_from_u64(9);
    let mut restarts = Vec::new();
    let mut callback = |p: SearchProgress<QueensState, usize>| restarts.push(p.restart);
    let (state, score) =
        RandomRestartOptimizer::new(20).optimize(&mut problem, &mut rng, &mut callback);
    assert!(!problem.goal_test(&state));
    assert!(score < initial_score);
    assert_eq!(score, problem.value(&state));
    assert!(restarts.iter().all(|&r| r < 20));
    // the last climb was followed by a restart from a full random board
    assert!(problem.initial().iter().all(Option::is_some));
}
