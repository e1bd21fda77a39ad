use std::fmt::Debug;

use auto_impl::auto_impl;

use crate::Node;

/// Direction in which a problem's [`Problem::value`] improves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Objective {
    /// Higher values are better
    Maximize,
    /// Lower values are better
    Minimize,
}

impl Objective {
    /// Whether `candidate` is strictly better than `incumbent` in this direction
    pub fn improves<T: Ord>(self, candidate: T, incumbent: T) -> bool {
        match self {
            Objective::Maximize => candidate > incumbent,
            Objective::Minimize => candidate < incumbent,
        }
    }
}

/// Problem is a trait that defines a state space to be explored by the optimizers in
/// [`crate::optim`]
///
/// Implementations keep their own sign conventions: the 8-puzzle maximises its value while
/// N-Queens minimises a conflict count. The optimizers only compare scores through
/// [`Problem::objective`] and never try to unify the two.
#[auto_impl(&mut, Box)]
pub trait Problem {
    /// Type of the State
    type State: Clone + PartialEq + Debug;
    /// Type of the Action
    type Action: Clone + Debug;
    /// Type of the Score returned by [`Problem::value`]
    type ScoreType: Ord + Copy + Debug;

    /// Current initial state. Restart logic may replace it.
    fn initial(&self) -> &Self::State;

    /// All legal actions from `state`
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// State reached by applying `action` to `state`. `state` itself is left untouched.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Whether `state` solves the problem
    fn goal_test(&self, state: &Self::State) -> bool;

    /// Local goodness score used by hill climbing
    fn value(&self, state: &Self::State) -> Self::ScoreType;

    /// Heuristic distance to the goal, used by simulated annealing
    fn h(&self, node: &Node<Self::State>) -> usize;

    /// Direction in which [`Problem::value`] improves
    fn objective(&self) -> Objective;

    /// Energy difference fed to the annealing acceptance rule.
    /// A positive value is always accepted.
    fn annealing_delta(&self, current: &Node<Self::State>, candidate: &Node<Self::State>) -> f64;

    /// Replace the initial state with a random one
    fn set_random_initial<R: rand::Rng + ?Sized>(&mut self, rng: &mut R);
}
