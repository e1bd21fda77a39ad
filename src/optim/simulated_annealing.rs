use log::trace;
use rand::{Rng, RngExt as _, seq::IndexedRandom};

use crate::{Node, Problem, PuzzleError, SearchProgress, callback::SearchCallbackFn};

use super::LocalSearchOptimizer;

/// Maps an iteration count to a temperature. A temperature of exactly `0.0` stops the search.
pub trait CoolingSchedule {
    /// Temperature at iteration `t`
    fn temperature(&self, t: usize) -> f64;
}

impl<F: Fn(usize) -> f64> CoolingSchedule for F {
    fn temperature(&self, t: usize) -> f64 {
        self(t)
    }
}

/// Exponential cooling `k * exp(-lam * t)`, cut to zero from `t = limit` on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpSchedule {
    k: f64,
    lam: f64,
    limit: usize,
}

impl Default for ExpSchedule {
    fn default() -> Self {
        Self {
            k: 20.0,
            lam: 0.001,
            limit: 5000,
        }
    }
}

impl ExpSchedule {
    /// Constructor of ExpSchedule
    ///
    /// - `k` : initial temperature, must be positive and finite
    /// - `lam` : decay rate, must be non-negative and finite
    /// - `limit` : first iteration at which the temperature drops to zero
    pub fn new(k: f64, lam: f64, limit: usize) -> Result<Self, PuzzleError> {
        if !(k.is_finite() && k > 0.0) {
            return Err(PuzzleError::InvalidSchedule(format!(
                "k must be positive and finite, got {k}"
            )));
        }
        if !(lam.is_finite() && lam >= 0.0) {
            return Err(PuzzleError::InvalidSchedule(format!(
                "lam must be non-negative and finite, got {lam}"
            )));
        }
        Ok(Self { k, lam, limit })
    }

    /// Same schedule with another cut-off iteration
    pub fn with_limit(self, limit: usize) -> Self {
        Self { limit, ..self }
    }

    /// Iteration at which the temperature drops to zero
    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl CoolingSchedule for ExpSchedule {
    fn temperature(&self, t: usize) -> f64 {
        if t < self.limit {
            self.k * (-self.lam * t as f64).exp()
        } else {
            0.0
        }
    }
}

/// Optimizer that implements the simulated annealing algorithm
///
/// At every iteration one neighbor is drawn uniformly. It replaces the current state when
/// [`Problem::annealing_delta`] is positive, or otherwise with probability `exp(delta / T)`.
/// The search ends when the schedule reaches zero, at a goal, or at a state with no
/// neighbor.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedAnnealingOptimizer<S: CoolingSchedule = ExpSchedule> {
    schedule: S,
}

impl Default for SimulatedAnnealingOptimizer<ExpSchedule> {
    fn default() -> Self {
        Self::new(ExpSchedule::default())
    }
}

impl<S: CoolingSchedule> SimulatedAnnealingOptimizer<S> {
    /// Constructor of SimulatedAnnealingOptimizer
    ///
    /// - `schedule` : cooling schedule
    pub fn new(schedule: S) -> Self {
        Self { schedule }
    }

    /// Cooling schedule
    pub fn schedule(&self) -> &S {
        &self.schedule
    }
}

impl<P: Problem, S: CoolingSchedule> LocalSearchOptimizer<P> for SimulatedAnnealingOptimizer<S> {
    /// Start search
    ///
    /// - `problem` : the problem to solve, starting from its initial state
    /// - `rng` : used to draw neighbors and to decide acceptance
    /// - `callback` : callback function that will be invoked at the end of each iteration
    fn optimize<R: Rng + ?Sized>(
        &self,
        problem: &mut P,
        rng: &mut R,
        callback: &mut dyn SearchCallbackFn<P::State, P::ScoreType>,
    ) -> (P::State, P::ScoreType) {
        let mut current = Node::new(problem.initial().clone());
        let mut accepted_counter = 0;

        for t in 0.. {
            let temperature = self.schedule.temperature(t);
            if temperature == 0.0 || problem.goal_test(current.state()) {
                trace!("annealing stopped at t = {t} with temperature {temperature}");
                break;
            }

            let neighbors = current.expand(&*problem);
            let Some(candidate) = neighbors.choose(rng) else {
                trace!("annealing reached a state without neighbors at t = {t}");
                break;
            };

            let delta = problem.annealing_delta(&current, candidate);
            // temperature is non-zero here
            let accepted = delta > 0.0 || {
                let p = (delta / temperature).exp();
                let r: f64 = rng.random();
                p > r
            };
            if accepted {
                current = candidate.clone();
                accepted_counter += 1;
            }

            let score = problem.value(current.state());
            callback(SearchProgress::new(
                t,
                0,
                accepted_counter,
                current.state().clone(),
                score,
            ));
        }

        let score = problem.value(current.state());
        (current.into_state(), score)
    }
}
