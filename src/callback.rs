//! Callback of Search Iteration

/// SearchProgress expresses search progress that is passed to a [`SearchCallbackFn`]
#[derive(Debug, Clone)]
pub struct SearchProgress<S, SC> {
    /// current iteration step, counted across restarts
    pub iter: usize,
    /// index of the current restart attempt (always 0 for single-run searches)
    pub restart: usize,
    /// number of moves taken so far
    pub accepted_count: usize,
    /// current state
    pub state: S,
    /// value of the current state
    pub score: SC,
}

impl<S, SC: Ord> SearchProgress<S, SC> {
    /// constructor of SearchProgress
    pub fn new(iter: usize, restart: usize, accepted_count: usize, state: S, score: SC) -> Self {
        Self {
            iter,
            restart,
            accepted_count,
            state,
            score,
        }
    }
}

/// SearchCallbackFn is a trait of a callback function invoked after every search iteration.
/// Typical usage is to trace a trajectory or to drive a progress bar.
///
/// Example
///
/// ```rust
/// let mut moves = Vec::new();
/// let mut callback = |p: SearchProgress<[u8; 9], usize>| moves.push(p.score);
/// SteepestAscentOptimizer.optimize(&mut problem, &mut rng, &mut callback);
/// ```
pub trait SearchCallbackFn<S, SC: Ord>: FnMut(SearchProgress<S, SC>) {}

impl<F: FnMut(SearchProgress<S, SC>), S, SC: Ord> SearchCallbackFn<S, SC> for F {}
