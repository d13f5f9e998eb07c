use crate::evaluator::Score;
use crate::Cell;

/// Static desirability of each cell for a first move: center 4, corners 3, edges 2.
///
/// Searching a fresh board only rediscovers its symmetry, so the first move of a game is
/// scored from this table instead.
pub const OPENING_TABLE: [Score; 9] = [
    3, 2, 3, //
    2, 4, 2, //
    3, 2, 3,
];

/// Returns the opening score of `pos` for `mark`, in X's point of view like every other score.
///
/// O prefers low scores, so its table is negated.
pub fn opening_score(pos: usize, mark: Cell) -> Score {
    match mark {
        Cell::O => -OPENING_TABLE[pos],
        _ => OPENING_TABLE[pos],
    }
}
