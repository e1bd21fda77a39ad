use log::trace;
use rand::Rng;

use crate::{Node, Problem, SearchProgress, callback::SearchCallbackFn};

use super::LocalSearchOptimizer;

/// Optimizer that implements first-choice hill climbing
///
/// Neighbors are scanned in action order and the first one that strictly improves on the
/// current state is taken, without looking at the rest.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstChoiceOptimizer;

impl FirstChoiceOptimizer {
    /// Constructor of FirstChoiceOptimizer
    pub fn new() -> Self {
        Self
    }
}

impl<P: Problem> LocalSearchOptimizer<P> for FirstChoiceOptimizer {
    /// Start search
    ///
    /// - `problem` : the problem to solve, starting from its initial state
    /// - `rng` : unused, the scan order is fixed by [`Problem::actions`]
    /// - `callback` : callback function that will be invoked after each move
    fn optimize<R: Rng + ?Sized>(
        &self,
        problem: &mut P,
        _rng: &mut R,
        callback: &mut dyn SearchCallbackFn<P::State, P::ScoreType>,
    ) -> (P::State, P::ScoreType) {
        let objective = problem.objective();
        let mut current = Node::new(problem.initial().clone());
        let mut current_score = problem.value(current.state());
        let mut iter = 0;

        while !problem.goal_test(current.state()) {
            let better = current
                .expand(&*problem)
                .into_iter()
                .map(|node| {
                    let score = problem.value(node.state());
                    (node, score)
                })
                .find(|&(_, score)| objective.improves(score, current_score));

            let Some((next, next_score)) = better else {
                trace!("first choice stopped at a local optimum after {iter} moves");
                break;
            };
            current = next;
            current_score = next_score;
            iter += 1;

            callback(SearchProgress::new(
                iter,
                0,
                iter,
                current.state().clone(),
                current_score,
            ));
        }

        (current.into_state(), current_score)
    }
}
