use thiserror::Error;

/// Errors raised while constructing problems or schedules.
///
/// The searches themselves never fail: not reaching a goal is reported through the
/// returned state, not through an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PuzzleError {
    /// The tuple is not a permutation of `0..9`.
    #[error("8-puzzle state {0:?} is not a permutation of 0..9")]
    InvalidPermutation(Vec<u8>),
    /// The board must have at least one column.
    #[error("N-Queens board size must be positive, got {0}")]
    InvalidBoardSize(usize),
    /// A queen placed outside the board or a state of the wrong length.
    #[error("invalid N-Queens state for a board of size {n}: {reason}")]
    InvalidRow { n: usize, reason: String },
    /// Cooling schedule parameters that cannot produce a usable temperature.
    #[error("invalid cooling schedule: {0}")]
    InvalidSchedule(String),
}
