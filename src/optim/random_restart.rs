use log::{debug, trace};
use rand::Rng;

use crate::{Node, Problem, SearchProgress, callback::SearchCallbackFn};

use super::{LocalSearchOptimizer, SteepestAscentOptimizer};

/// Default number of climbs attempted by [`RandomRestartOptimizer`]
pub const DEFAULT_RESTARTS: usize = 1000;

/// Optimizer that implements random-restart hill climbing
///
/// Runs steepest-ascent climbs from the problem's initial state, re-randomising it with
/// [`Problem::set_random_initial`] after every climb, and keeps the best state seen on any
/// trajectory.
#[derive(Debug, Clone, Copy)]
pub struct RandomRestartOptimizer {
    restarts: usize,
}

impl Default for RandomRestartOptimizer {
    fn default() -> Self {
        Self::new(DEFAULT_RESTARTS)
    }
}

impl RandomRestartOptimizer {
    /// Constructor of RandomRestartOptimizer
    ///
    /// - `restarts` : maximum number of climbs, the first one included
    pub fn new(restarts: usize) -> Self {
        Self { restarts }
    }

    /// Maximum number of climbs
    pub fn restarts(&self) -> usize {
        self.restarts
    }
}

impl<P: Problem> LocalSearchOptimizer<P> for RandomRestartOptimizer {
    /// Start search
    ///
    /// - `problem` : the problem to solve. Its initial state is replaced after every climb.
    /// - `rng` : used for tie breaking and for the random restarts
    /// - `callback` : callback function that will be invoked after each move
    ///
    /// Returns as soon as a goal is visited. Otherwise the best state over all climbs is
    /// returned once the restart budget is spent.
    fn optimize<R: Rng + ?Sized>(
        &self,
        problem: &mut P,
        rng: &mut R,
        callback: &mut dyn SearchCallbackFn<P::State, P::ScoreType>,
    ) -> (P::State, P::ScoreType) {
        let objective = problem.objective();
        let climber = SteepestAscentOptimizer::new();
        let mut best_state = problem.initial().clone();
        let mut best_score = problem.value(&best_state);
        let mut iter = 0;

        for restart in 0..self.restarts {
            let mut current = Node::new(problem.initial().clone());

            loop {
                let score = problem.value(current.state());
                if objective.improves(score, best_score) || problem.goal_test(current.state()) {
                    best_state = current.state().clone();
                    best_score = score;
                    if problem.goal_test(&best_state) {
                        debug!("random restart reached a goal on climb {}", restart + 1);
                        return (best_state, best_score);
                    }
                }

                let Some(next) = climber.step(&*problem, &current, rng) else {
                    break;
                };
                current = next;
                iter += 1;

                let score = problem.value(current.state());
                callback(SearchProgress::new(
                    iter,
                    restart,
                    iter,
                    current.state().clone(),
                    score,
                ));
            }

            trace!("climb {} ended with best score {:?}", restart + 1, best_score);
            problem.set_random_initial(rng);
        }

        debug!(
            "random restart spent all {} climbs, best score {:?}",
            self.restarts, best_score
        );
        (best_state, best_score)
    }
}
