use puzzle_localsearch::{
    PuzzleError,
    bench::{Algorithm, BenchConfig, run_eight_puzzle_batch, run_n_queens_batch},
    optim::ExpSchedule,
};

fn small_config() -> BenchConfig {
    BenchConfig::default()
        .with_trials(5)
        .with_restarts(50)
        .with_schedule(ExpSchedule::default().with_limit(500))
        .with_seed(2024)
}

#[test_log::test]
fn test_eight_puzzle_batch() {
    let config = small_config();
    let mut rng = config.make_rng();
    let mut finished = Vec::new();
    let report = run_eight_puzzle_batch(&config, &mut rng, |trial| finished.push(trial));

    assert_eq!(finished, vec![0, 1, 2, 3, 4]);
    assert_eq!(report.trials, 5);
    assert!(report.solvable.is_some_and(|n| n <= 5));
    for algorithm in Algorithm::ALL {
        let tally = report.get(algorithm);
        assert_eq!(tally.successes + tally.fails, 5);
    }

    let text = report.to_string();
    assert!(text.starts_with("Out of 5 random 8-puzzles"));
    for algorithm in Algorithm::ALL {
        assert!(text.contains(&algorithm.to_string()));
    }
    assert!(text.contains("Successes:"));
    assert!(text.contains("Time Taken:"));
}

#[test_log::test]
fn test_n_queens_batch() {
    let config = small_config().with_queens(4);
    let mut rng = config.make_rng();
    let report = run_n_queens_batch(&config, &mut rng, |_| {}).unwrap();

    assert_eq!(report.solvable, None);
    assert!(report.to_string().starts_with("Out of 5 random 4-queens"));
    for algorithm in Algorithm::ALL {
        let tally = report.get(algorithm);
        assert_eq!(tally.successes + tally.fails, 5);
    }
}

#[test]
fn test_seeded_batches_agree() {
    let config = small_config();
    let first = run_eight_puzzle_batch(&config, &mut config.make_rng(), |_| {});
    let second = run_eight_puzzle_batch(&config, &mut config.make_rng(), |_| {});
    assert_eq!(first.solvable, second.solvable);
    for algorithm in Algorithm::ALL {
        assert_eq!(first.get(algorithm).successes, second.get(algorithm).successes);
    }
}

#[test]
fn test_invalid_board_size() {
    let config = small_config().with_queens(0);
    let err = run_n_queens_batch(&config, &mut config.make_rng(), |_| {}).unwrap_err();
    assert_eq!(err, PuzzleError::InvalidBoardSize(0));
}
