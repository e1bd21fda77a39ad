use auto_impl::auto_impl;
use rand::Rng;

use crate::{Problem, SearchProgress, callback::SearchCallbackFn};

/// Optimizer that implements a local search algorithm
#[auto_impl(&, Box, Rc, Arc)]
pub trait LocalSearchOptimizer<P: Problem> {
    /// Start search
    ///
    /// - `problem` : the problem to solve. Restarting optimizers may replace its initial state.
    /// - `rng` : source of every random draw made by the search
    /// - `callback` : callback function that will be invoked at the end of each iteration
    ///
    /// Returns the terminal state and its value. The state is not necessarily a goal.
    fn optimize<R: Rng + ?Sized>(
        &self,
        problem: &mut P,
        rng: &mut R,
        callback: &mut dyn SearchCallbackFn<P::State, P::ScoreType>,
    ) -> (P::State, P::ScoreType);

    /// Start search without a callback
    fn run<R: Rng + ?Sized>(&self, problem: &mut P, rng: &mut R) -> (P::State, P::ScoreType) {
        self.optimize(
            problem,
            rng,
            &mut |_: SearchProgress<P::State, P::ScoreType>| {},
        )
    }
}
