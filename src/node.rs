//! Search node

use crate::Problem;

/// A state visited during search.
///
/// Nodes carry no parent link: the optimizers only ever return the final state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<S> {
    state: S,
}

impl<S> Node<S> {
    /// Wrap `state`
    pub fn new(state: S) -> Self {
        Self { state }
    }

    /// Wrapped state
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Unwrap the state
    pub fn into_state(self) -> S {
        self.state
    }

    /// Child nodes reachable through every action of `problem`, in action order.
    /// Children are recomputed on every call.
    pub fn expand<P>(&self, problem: &P) -> Vec<Node<S>>
    where
        P: Problem<State = S> + ?Sized,
    {
        problem
            .actions(&self.state)
            .iter()
            .map(|action| Node::new(problem.result(&self.state, action)))
            .collect()
    }
}

impl<S> From<S> for Node<S> {
    fn from(state: S) -> Self {
        Self::new(state)
    }
}
