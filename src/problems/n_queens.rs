use rand::{Rng, RngExt as _};

use crate::{Node, Objective, Problem, PuzzleError};

/// Row of the queen in every column, `None` while the column is still empty
pub type QueensState = Vec<Option<usize>>;

/// Move on an N-Queens board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueensAction {
    /// Put a queen on `row` of the leftmost empty column
    Place(usize),
    /// Move the queen of `column` to `row`
    Relocate { column: usize, row: usize },
}

/// Place N queens on an NxN board so that none attacks another.
///
/// Columns are filled left to right; once the board is full, queens are relocated within
/// their column. [`Problem::value`] counts attacking queens (twice per pair) and is minimised,
/// the opposite direction from [`crate::problems::EightPuzzle`].
#[derive(Debug, Clone)]
pub struct NQueens {
    n: usize,
    initial: QueensState,
}

// Empty columns take part in conflict checks as if their queen sat on row -1, so two empty
// columns attack each other and a partial board scores worse than a filled one.
fn row_key(cell: Option<usize>) -> isize {
    cell.map_or(-1, |row| row as isize)
}

impl NQueens {
    /// Empty board of size `n`
    pub fn new(n: usize) -> Result<Self, PuzzleError> {
        if n == 0 {
            return Err(PuzzleError::InvalidBoardSize(n));
        }
        Ok(Self {
            n,
            initial: vec![None; n],
        })
    }

    /// Board of size `n` starting from `initial`
    pub fn with_initial(n: usize, initial: QueensState) -> Result<Self, PuzzleError> {
        let mut problem = Self::new(n)?;
        problem.set_initial(initial)?;
        Ok(problem)
    }

    /// Board size
    pub fn n(&self) -> usize {
        self.n
    }

    /// Replace the initial state
    pub fn set_initial(&mut self, initial: QueensState) -> Result<(), PuzzleError> {
        if initial.len() != self.n {
            return Err(PuzzleError::InvalidRow {
                n: self.n,
                reason: format!("expected {} columns, got {}", self.n, initial.len()),
            });
        }
        if let Some(row) = initial.iter().flatten().find(|&&row| row >= self.n) {
            return Err(PuzzleError::InvalidRow {
                n: self.n,
                reason: format!("row {row} is off the board"),
            });
        }
        self.initial = initial;
        Ok(())
    }

    /// Whether queens at `(row1, col1)` and `(row2, col2)` attack each other
    pub fn conflict(row1: isize, col1: isize, row2: isize, col2: isize) -> bool {
        row1 == row2 || col1 == col2 || row1 - col1 == row2 - col2 || row1 + col1 == row2 + col2
    }

    /// Whether a queen at `(row, col)` would be attacked by a placed queen.
    /// Column `col` and `exclude` are left out of the check.
    pub fn conflicted(
        &self,
        state: &QueensState,
        row: usize,
        col: usize,
        exclude: Option<usize>,
    ) -> bool {
        state.iter().enumerate().any(|(c, cell)| match cell {
            Some(r) if c != col && Some(c) != exclude => {
                Self::conflict(row as isize, col as isize, *r as isize, c as isize)
            }
            _ => false,
        })
    }

    /// Number of attacking queens, counted from both sides: every attacking pair adds 2
    pub fn num_conflicts(&self, state: &QueensState) -> usize {
        (0..state.len())
            .flat_map(|c1| {
                (0..state.len())
                    .filter(move |&c2| c2 != c1)
                    .map(move |c2| (c1, c2))
            })
            .filter(|&(c1, c2)| {
                Self::conflict(
                    row_key(state[c1]),
                    c1 as isize,
                    row_key(state[c2]),
                    c2 as isize,
                )
            })
            .count()
    }

    fn is_filled(state: &QueensState) -> bool {
        state.iter().all(Option::is_some)
    }
}

impl Problem for NQueens {
    type State = QueensState;
    type Action = QueensAction;
    type ScoreType = usize;

    fn initial(&self) -> &QueensState {
        &self.initial
    }

    fn actions(&self, state: &QueensState) -> Vec<QueensAction> {
        match state.iter().position(Option::is_none) {
            Some(col) => (0..self.n)
                .filter(|&row| !self.conflicted(state, row, col, None))
                .map(QueensAction::Place)
                .collect(),
            None => (0..self.n)
                .flat_map(|column| (0..self.n).map(move |row| (column, row)))
                .filter(|&(column, row)| {
                    state[column] != Some(row) && !self.conflicted(state, row, column, Some(column))
                })
                .map(|(column, row)| QueensAction::Relocate { column, row })
                .collect(),
        }
    }

    fn result(&self, state: &QueensState, action: &QueensAction) -> QueensState {
        let mut new_state = state.clone();
        match *action {
            QueensAction::Place(row) => {
                if let Some(cell) = new_state.iter_mut().find(|cell| cell.is_none()) {
                    *cell = Some(row);
                }
            }
            QueensAction::Relocate { column, row } => new_state[column] = Some(row),
        }
        new_state
    }

    fn goal_test(&self, state: &QueensState) -> bool {
        Self::is_filled(state)
            && !state.iter().enumerate().any(|(col, cell)| match cell {
                Some(row) => self.conflicted(state, *row, col, None),
                None => true,
            })
    }

    fn value(&self, state: &QueensState) -> usize {
        self.num_conflicts(state)
    }

    fn h(&self, node: &Node<QueensState>) -> usize {
        self.num_conflicts(node.state())
    }

    // fewer conflicts is better
    fn objective(&self) -> Objective {
        Objective::Minimize
    }

    // Change in conflict count. Unlike the 8-puzzle this is positive when the candidate is
    // worse; kept as is since it decides which moves annealing accepts.
    fn annealing_delta(&self, current: &Node<QueensState>, candidate: &Node<QueensState>) -> f64 {
        self.value(candidate.state()) as f64 - self.value(current.state()) as f64
    }

    fn set_random_initial<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.initial = (0..self.n)
            .map(|_| Some(rng.random_range(0..self.n)))
            .collect();
    }
}
