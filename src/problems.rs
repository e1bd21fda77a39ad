//! Concrete problems

mod eight_puzzle;
mod n_queens;

pub use eight_puzzle::{DEFAULT_GOAL, EightPuzzle, Move, PuzzleState};
pub use n_queens::{NQueens, QueensAction, QueensState};
