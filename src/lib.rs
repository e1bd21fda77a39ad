//! Local search on the 8-puzzle and N-Queens
//!
//! The crate provides a small [`Problem`] abstraction, a [`Node`] expansion helper and four
//! local search strategies in [`optim`] that only talk to those two. Concrete puzzles live in
//! [`problems`] and the benchmarking harness in [`bench`].

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod bench;
mod callback;
mod error;
mod model;
mod node;
pub mod optim;
pub mod problems;
pub mod utils;

pub use callback::{SearchCallbackFn, SearchProgress};
pub use error::PuzzleError;
pub use model::{Objective, Problem};
pub use node::Node;
