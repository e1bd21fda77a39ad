use std::fmt;

use rand::{Rng, seq::SliceRandom};

use crate::{Node, Objective, Problem, PuzzleError};

/// 3x3 board read row by row, `0` is the blank
pub type PuzzleState = [u8; 9];

/// Goal used by [`EightPuzzle::new`]
pub const DEFAULT_GOAL: PuzzleState = [0, 1, 2, 3, 4, 5, 6, 7, 8];

const WIDTH: usize = 3;

/// Direction in which the blank moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Every move, in the order [`EightPuzzle::actions`] reports them
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    fn offset(self) -> isize {
        match self {
            Move::Up => -(WIDTH as isize),
            Move::Down => WIDTH as isize,
            Move::Left => -1,
            Move::Right => 1,
        }
    }

    fn is_legal_from(self, blank: usize) -> bool {
        match self {
            Move::Up => blank >= WIDTH,
            Move::Down => blank < 2 * WIDTH,
            Move::Left => blank % WIDTH != 0,
            Move::Right => blank % WIDTH != WIDTH - 1,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Up => "UP",
            Move::Down => "DOWN",
            Move::Left => "LEFT",
            Move::Right => "RIGHT",
        };
        f.write_str(name)
    }
}

/// The sliding tile puzzle on a 3x3 board.
///
/// [`Problem::value`] counts the cells already in their goal position and is maximised.
/// [`Problem::h`] is the Manhattan distance of the tiles, blank excluded.
#[derive(Debug, Clone)]
pub struct EightPuzzle {
    initial: PuzzleState,
    goal: PuzzleState,
    // goal_positions[tile] = index of `tile` in `goal`
    goal_positions: [usize; 9],
}

fn validate(state: &PuzzleState) -> Result<(), PuzzleError> {
    let mut seen = [false; 9];
    for &tile in state {
        match seen.get_mut(tile as usize) {
            Some(slot) if !*slot => *slot = true,
            _ => return Err(PuzzleError::InvalidPermutation(state.to_vec())),
        }
    }
    Ok(())
}

impl EightPuzzle {
    /// Puzzle starting at `initial` with [`DEFAULT_GOAL`] as goal
    pub fn new(initial: PuzzleState) -> Result<Self, PuzzleError> {
        Self::with_goal(initial, DEFAULT_GOAL)
    }

    /// Puzzle starting at `initial` with a custom goal
    pub fn with_goal(initial: PuzzleState, goal: PuzzleState) -> Result<Self, PuzzleError> {
        validate(&initial)?;
        validate(&goal)?;
        let mut goal_positions = [0; 9];
        for (idx, &tile) in goal.iter().enumerate() {
            goal_positions[tile as usize] = idx;
        }
        Ok(Self {
            initial,
            goal,
            goal_positions,
        })
    }

    /// Puzzle starting from a uniformly random permutation
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut puzzle = Self {
            initial: DEFAULT_GOAL,
            goal: DEFAULT_GOAL,
            goal_positions: DEFAULT_GOAL.map(usize::from),
        };
        puzzle.set_random_initial(rng);
        puzzle
    }

    /// Goal state
    pub fn goal(&self) -> &PuzzleState {
        &self.goal
    }

    /// Replace the initial state
    pub fn set_initial(&mut self, initial: PuzzleState) -> Result<(), PuzzleError> {
        validate(&initial)?;
        self.initial = initial;
        Ok(())
    }

    /// Index of the blank square
    pub fn find_blank_square(&self, state: &PuzzleState) -> usize {
        state.iter().position(|&tile| tile == 0).unwrap_or_default()
    }

    /// Whether `state` can reach a goal with an even inversion count,
    /// i.e. the number of tile pairs out of order (blank ignored) is even
    pub fn check_solvability(&self, state: &PuzzleState) -> bool {
        let inversions = (0..state.len())
            .flat_map(|i| ((i + 1)..state.len()).map(move |j| (i, j)))
            .filter(|&(i, j)| state[i] != 0 && state[j] != 0 && state[i] > state[j])
            .count();
        inversions % 2 == 0
    }
}

impl Problem for EightPuzzle {
    type State = PuzzleState;
    type Action = Move;
    type ScoreType = usize;

    fn initial(&self) -> &PuzzleState {
        &self.initial
    }

    fn actions(&self, state: &PuzzleState) -> Vec<Move> {
        let blank = self.find_blank_square(state);
        Move::ALL
            .into_iter()
            .filter(|m| m.is_legal_from(blank))
            .collect()
    }

    fn result(&self, state: &PuzzleState, action: &Move) -> PuzzleState {
        let blank = self.find_blank_square(state);
        let neighbor = blank.wrapping_add_signed(action.offset());
        let mut new_state = *state;
        new_state.swap(blank, neighbor);
        new_state
    }

    fn goal_test(&self, state: &PuzzleState) -> bool {
        *state == self.goal
    }

    fn value(&self, state: &PuzzleState) -> usize {
        state
            .iter()
            .zip(self.goal.iter())
            .filter(|(tile, goal)| tile == goal)
            .count()
    }

    fn h(&self, node: &Node<PuzzleState>) -> usize {
        node.state()
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != 0)
            .map(|(idx, &tile)| {
                let goal_idx = self.goal_positions[tile as usize];
                (idx / WIDTH).abs_diff(goal_idx / WIDTH) + (idx % WIDTH).abs_diff(goal_idx % WIDTH)
            })
            .sum()
    }

    // more matching cells is better
    fn objective(&self) -> Objective {
        Objective::Maximize
    }

    // decrease of the Manhattan distance
    fn annealing_delta(&self, current: &Node<PuzzleState>, candidate: &Node<PuzzleState>) -> f64 {
        self.h(current) as f64 - self.h(candidate) as f64
    }

    fn set_random_initial<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut tiles: PuzzleState = [0, 1, 2, 3, 4, 5, 6, 7, 8];
        tiles.shuffle(rng);
        self.initial = tiles;
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};

    use super::*;

    #[test]
    fn test_actions_respect_board_edges() {
        let puzzle = EightPuzzle::new(DEFAULT_GOAL).unwrap();
        assert_eq!(
            puzzle.actions(&[1, 2, 3, 4, 5, 6, 7, 0, 8]),
            vec![Move::Up, Move::Left, Move::Right]
        );
        assert_eq!(puzzle.actions(&DEFAULT_GOAL), vec![Move::Down, Move::Right]);
        assert_eq!(
            puzzle.actions(&[1, 2, 3, 4, 0, 5, 6, 7, 8]),
            Move::ALL.to_vec()
        );
        assert_eq!(
            puzzle.actions(&[1, 2, 3, 4, 5, 6, 7, 8, 0]),
            vec![Move::Up, Move::Left]
        );
    }

    #[test]
    fn test_result_moves_blank_to_neighbor() {
        let puzzle = EightPuzzle::new(DEFAULT_GOAL).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = [4, 1, 2, 3, 0, 5, 6, 7, 8];
        for _ in 0..200 {
            let blank = puzzle.find_blank_square(&state);
            let action = *puzzle.actions(&state).choose(&mut rng).unwrap();
            let expected = blank.wrapping_add_signed(action.offset());
            assert!(expected < 9);
            let next = puzzle.result(&state, &action);
            assert_eq!(puzzle.find_blank_square(&next), expected);
            assert_eq!(next[blank], state[expected]);
            state = next;
        }
    }

    #[test]
    fn test_result_does_not_mutate_input() {
        let puzzle = EightPuzzle::new(DEFAULT_GOAL).unwrap();
        let state = [1, 2, 3, 4, 5, 6, 7, 0, 8];
        let next = puzzle.result(&state, &Move::Up);
        assert_eq!(state, [1, 2, 3, 4, 5, 6, 7, 0, 8]);
        assert_eq!(next, [1, 2, 3, 4, 0, 6, 7, 5, 8]);
    }

    #[test]
    fn test_solvability_is_preserved_by_moves() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let puzzle = EightPuzzle::random(&mut rng);
            let mut state = *puzzle.initial();
            let solvable = puzzle.check_solvability(&state);
            for _ in 0..50 {
                let action = *puzzle.actions(&state).choose(&mut rng).unwrap();
                state = puzzle.result(&state, &action);
                assert_eq!(puzzle.check_solvability(&state), solvable);
            }
        }
    }

    #[test]
    fn test_check_solvability() {
        let puzzle = EightPuzzle::new(DEFAULT_GOAL).unwrap();
        assert!(puzzle.check_solvability(&DEFAULT_GOAL));
        // a single swap of two tiles flips the parity
        assert!(!puzzle.check_solvability(&[0, 2, 1, 3, 4, 5, 6, 7, 8]));
        assert!(puzzle.check_solvability(&[1, 2, 3, 4, 5, 6, 7, 0, 8]));
    }

    #[test]
    fn test_value_and_h() {
        let puzzle = EightPuzzle::new(DEFAULT_GOAL).unwrap();
        assert_eq!(puzzle.value(&DEFAULT_GOAL), 9);
        assert_eq!(puzzle.h(&Node::new(DEFAULT_GOAL)), 0);

        let state = [1, 0, 2, 3, 4, 5, 6, 7, 8];
        assert_eq!(puzzle.value(&state), 7);
        assert_eq!(puzzle.h(&Node::new(state)), 1);

        // 8 sits in the top-left corner, four steps away from home
        let state = [8, 1, 2, 3, 4, 5, 6, 7, 0];
        assert_eq!(puzzle.h(&Node::new(state)), 4);
        assert_eq!(puzzle.value(&state), 7);
    }

    #[test]
    fn test_annealing_delta_is_heuristic_decrease() {
        let puzzle = EightPuzzle::new(DEFAULT_GOAL).unwrap();
        let far = Node::new([1, 0, 2, 3, 4, 5, 6, 7, 8]);
        let home = Node::new(DEFAULT_GOAL);
        assert_eq!(puzzle.annealing_delta(&far, &home), 1.0);
        assert_eq!(puzzle.annealing_delta(&home, &far), -1.0);
    }

    #[test]
    fn test_goal_test_is_idempotent() {
        let puzzle = EightPuzzle::new(DEFAULT_GOAL).unwrap();
        for _ in 0..3 {
            assert!(puzzle.goal_test(&DEFAULT_GOAL));
        }
        assert!(!puzzle.goal_test(&[1, 2, 3, 4, 5, 6, 7, 0, 8]));
    }

    #[test]
    fn test_custom_goal() {
        let goal = [1, 2, 3, 4, 5, 6, 7, 8, 0];
        let puzzle = EightPuzzle::with_goal([1, 2, 3, 4, 5, 6, 7, 0, 8], goal).unwrap();
        assert!(puzzle.goal_test(&goal));
        assert_eq!(puzzle.h(&Node::new(*puzzle.initial())), 1);
        assert_eq!(puzzle.value(puzzle.initial()), 7);
    }

    #[test]
    fn test_rejects_invalid_tuples() {
        assert_eq!(
            EightPuzzle::new([0, 0, 2, 3, 4, 5, 6, 7, 8]).unwrap_err(),
            PuzzleError::InvalidPermutation(vec![0, 0, 2, 3, 4, 5, 6, 7, 8])
        );
        assert!(EightPuzzle::with_goal(DEFAULT_GOAL, [9, 1, 2, 3, 4, 5, 6, 7, 8]).is_err());
        let mut puzzle = EightPuzzle::new(DEFAULT_GOAL).unwrap();
        assert!(puzzle.set_initial([1, 1, 1, 1, 1, 1, 1, 1, 1]).is_err());
        assert_eq!(puzzle.initial(), &DEFAULT_GOAL);
    }

    #[test]
    fn test_set_random_initial_is_permutation() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut puzzle = EightPuzzle::new(DEFAULT_GOAL).unwrap();
        for _ in 0..50 {
            puzzle.set_random_initial(&mut rng);
            let mut tiles = *puzzle.initial();
            tiles.sort_unstable();
            assert_eq!(tiles, DEFAULT_GOAL);
        }
    }
}
