use log::trace;
use rand::Rng;

use crate::{Node, Problem, SearchProgress, callback::SearchCallbackFn, utils::argmax_random_tie};

use super::LocalSearchOptimizer;

/// Optimizer that implements the steepest-ascent hill climbing algorithm
///
/// Every neighbor is scored and the one with the largest value is taken, ties broken at
/// random. The climb stops at the first goal or as soon as that neighbor is not strictly
/// better than the current state.
#[derive(Debug, Clone, Copy, Default)]
pub struct SteepestAscentOptimizer;

impl SteepestAscentOptimizer {
    /// Constructor of SteepestAscentOptimizer
    pub fn new() -> Self {
        Self
    }

    /// Perform one climbing step
    ///
    /// Returns the neighbor to move to, or `None` when `current` has no neighbor or is a local
    /// optimum. Selection always maximises [`Problem::value`]; only the acceptance test follows
    /// [`Problem::objective`], so a minimising problem compares against its worst neighbor.
    pub fn step<P, R>(
        &self,
        problem: &P,
        current: &Node<P::State>,
        rng: &mut R,
    ) -> Option<Node<P::State>>
    where
        P: Problem,
        R: Rng + ?Sized,
    {
        let neighbors = current.expand(problem);
        let neighbor = argmax_random_tie(&neighbors, |node| problem.value(node.state()), rng)?;
        let neighbor_score = problem.value(neighbor.state());
        if problem
            .objective()
            .improves(neighbor_score, problem.value(current.state()))
        {
            Some(neighbor.clone())
        } else {
            None
        }
    }
}

impl<P: Problem> LocalSearchOptimizer<P> for SteepestAscentOptimizer {
    /// Start search
    ///
    /// - `problem` : the problem to solve, starting from its initial state
    /// - `rng` : used to break ties between equally good neighbors
    /// - `callback` : callback function that will be invoked after each move
    fn optimize<R: Rng + ?Sized>(
        &self,
        problem: &mut P,
        rng: &mut R,
        callback: &mut dyn SearchCallbackFn<P::State, P::ScoreType>,
    ) -> (P::State, P::ScoreType) {
        let mut current = Node::new(problem.initial().clone());
        let mut iter = 0;

        while !problem.goal_test(current.state()) {
            let Some(next) = self.step(&*problem, &current, rng) else {
                trace!("steepest ascent stopped at a local optimum after {iter} moves");
                break;
            };
            current = next;
            iter += 1;

            let score = problem.value(current.state());
            callback(SearchProgress::new(iter, 0, iter, current.state().clone(), score));
        }

        let score = problem.value(current.state());
        (current.into_state(), score)
    }
}
