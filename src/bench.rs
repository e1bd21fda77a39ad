//! Benchmark harness
//!
//! Runs batches of random trials, hands every algorithm its own copy of the trial problem and
//! tallies how often the returned state passes the goal test.

use std::{
    fmt,
    time::{Duration, Instant},
};

use log::info;
use rand::{Rng, RngExt as _, SeedableRng, rngs::StdRng};

use crate::{
    Problem, PuzzleError,
    optim::{
        DEFAULT_RESTARTS, ExpSchedule, FirstChoiceOptimizer, LocalSearchOptimizer,
        RandomRestartOptimizer, SimulatedAnnealingOptimizer, SteepestAscentOptimizer,
    },
    problems::{EightPuzzle, NQueens},
};

/// Algorithms compared by the harness, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    SteepestAscent,
    FirstChoice,
    RandomRestart,
    SimulatedAnnealing,
}

impl Algorithm {
    /// Every algorithm, in report order
    pub const ALL: [Algorithm; 4] = [
        Algorithm::SteepestAscent,
        Algorithm::FirstChoice,
        Algorithm::RandomRestart,
        Algorithm::SimulatedAnnealing,
    ];
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::SteepestAscent => "Steepest Hill Climbing",
            Algorithm::FirstChoice => "First Hill Climbing",
            Algorithm::RandomRestart => "Random Restart Hill Climbing",
            Algorithm::SimulatedAnnealing => "Simulated Annealing",
        };
        f.write_str(name)
    }
}

/// Parameters of a benchmark batch
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Number of random trials per puzzle type
    pub trials: usize,
    /// Climb budget of random-restart hill climbing
    pub restarts: usize,
    /// Board size of the N-Queens batch
    pub queens: usize,
    /// Cooling schedule of simulated annealing
    pub schedule: ExpSchedule,
    /// Seed of the batch generator. A fresh seed is drawn when `None`.
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            trials: 100,
            restarts: DEFAULT_RESTARTS,
            queens: 8,
            schedule: ExpSchedule::default(),
            seed: None,
        }
    }
}

impl BenchConfig {
    /// Set the number of trials per puzzle type
    pub fn with_trials(self, trials: usize) -> Self {
        Self { trials, ..self }
    }

    /// Set the climb budget of random restart
    pub fn with_restarts(self, restarts: usize) -> Self {
        Self { restarts, ..self }
    }

    /// Set the N-Queens board size
    pub fn with_queens(self, queens: usize) -> Self {
        Self { queens, ..self }
    }

    /// Set the annealing schedule
    pub fn with_schedule(self, schedule: ExpSchedule) -> Self {
        Self { schedule, ..self }
    }

    /// Fix the seed so the batch can be reproduced
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// Generator for a batch
    pub fn make_rng(&self) -> StdRng {
        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        StdRng::seed_from_u64(seed)
    }
}

/// Tally of one algorithm over a batch
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AlgorithmReport {
    /// Trials whose returned state passed the goal test
    pub successes: usize,
    /// Trials whose returned state did not
    pub fails: usize,
    /// Wall time summed over all trials
    pub elapsed: Duration,
}

impl AlgorithmReport {
    fn record(&mut self, solved: bool, elapsed: Duration) {
        if solved {
            self.successes += 1;
        } else {
            self.fails += 1;
        }
        self.elapsed += elapsed;
    }
}

/// Result of a batch of trials on one puzzle type
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    /// Puzzle description used in the report header, e.g. `8-puzzles`
    pub puzzle: String,
    /// Number of trials run
    pub trials: usize,
    /// Number of trial starts passing the solvability check, when the puzzle has one
    pub solvable: Option<usize>,
    /// One entry per algorithm, in [`Algorithm::ALL`] order
    pub algorithms: [(Algorithm, AlgorithmReport); 4],
}

impl BatchReport {
    fn new(puzzle: String, trials: usize) -> Self {
        Self {
            puzzle,
            trials,
            solvable: None,
            algorithms: Algorithm::ALL.map(|algorithm| (algorithm, AlgorithmReport::default())),
        }
    }

    /// Tally of `algorithm`
    pub fn get(&self, algorithm: Algorithm) -> &AlgorithmReport {
        &self.algorithms[algorithm as usize].1
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Out of {} random {}", self.trials, self.puzzle)?;
        if let Some(solvable) = self.solvable {
            writeln!(f, "Solvable starts: {solvable}")?;
        }
        for (i, (algorithm, report)) in self.algorithms.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{algorithm}")?;
            writeln!(f, "     Successes: {}", report.successes)?;
            writeln!(f, "     Fails: {}", report.fails)?;
            writeln!(f, "     Time Taken: {:.6}", report.elapsed.as_secs_f64())?;
        }
        Ok(())
    }
}

fn run_algorithm<P, R>(
    algorithm: Algorithm,
    config: &BenchConfig,
    problem: &mut P,
    rng: &mut R,
) -> P::State
where
    P: Problem,
    R: Rng + ?Sized,
{
    let (state, _) = match algorithm {
        Algorithm::SteepestAscent => SteepestAscentOptimizer::new().run(problem, rng),
        Algorithm::FirstChoice => FirstChoiceOptimizer::new().run(problem, rng),
        Algorithm::RandomRestart => RandomRestartOptimizer::new(config.restarts).run(problem, rng),
        Algorithm::SimulatedAnnealing => {
            SimulatedAnnealingOptimizer::new(config.schedule).run(problem, rng)
        }
    };
    state
}

// Each algorithm gets a fresh clone of `problem`, so restarts never leak between algorithms.
fn run_trial<P, R>(report: &mut BatchReport, config: &BenchConfig, problem: &P, rng: &mut R)
where
    P: Problem + Clone,
    R: Rng + ?Sized,
{
    for (algorithm, tally) in report.algorithms.iter_mut() {
        let mut instance = problem.clone();
        let start = Instant::now();
        let state = run_algorithm(*algorithm, config, &mut instance, rng);
        let elapsed = start.elapsed();
        tally.record(instance.goal_test(&state), elapsed);
    }
}

/// Run `config.trials` random 8-puzzles through every algorithm
///
/// - `on_trial` : invoked with the trial index once a trial is done
pub fn run_eight_puzzle_batch<R, F>(
    config: &BenchConfig,
    rng: &mut R,
    mut on_trial: F,
) -> BatchReport
where
    R: Rng + ?Sized,
    F: FnMut(usize),
{
    info!("running {} random 8-puzzles", config.trials);
    let mut report = BatchReport::new("8-puzzles".to_string(), config.trials);
    let mut solvable = 0;
    for trial in 0..config.trials {
        let puzzle = EightPuzzle::random(rng);
        if puzzle.check_solvability(puzzle.initial()) {
            solvable += 1;
        }
        run_trial(&mut report, config, &puzzle, rng);
        on_trial(trial);
    }
    report.solvable = Some(solvable);
    info!("8-puzzle batch done");
    report
}

/// Run `config.trials` N-Queens problems, each starting from the empty board,
/// through every algorithm
///
/// - `on_trial` : invoked with the trial index once a trial is done
pub fn run_n_queens_batch<R, F>(
    config: &BenchConfig,
    rng: &mut R,
    mut on_trial: F,
) -> Result<BatchReport, PuzzleError>
where
    R: Rng + ?Sized,
    F: FnMut(usize),
{
    info!("running {} {}-queens problems", config.trials, config.queens);
    let problem = NQueens::new(config.queens)?;
    let mut report = BatchReport::new(format!("{}-queens", config.queens), config.trials);
    for trial in 0..config.trials {
        run_trial(&mut report, config, &problem, rng);
        on_trial(trial);
    }
    info!("{}-queens batch done", config.queens);
    Ok(report)
}
