//! Local search algorithms

mod base;
mod first_choice;
mod hill_climbing;
mod random_restart;
mod simulated_annealing;

pub use base::LocalSearchOptimizer;
pub use first_choice::FirstChoiceOptimizer;
pub use hill_climbing::SteepestAscentOptimizer;
pub use random_restart::{DEFAULT_RESTARTS, RandomRestartOptimizer};
pub use simulated_annealing::{CoolingSchedule, ExpSchedule, SimulatedAnnealingOptimizer};
