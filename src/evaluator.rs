//! Static board evaluation.
//!
//! Every score is from X's point of view: X wants it as high as possible, O as low as
//! possible. The terminal scores are `X_WIN`, `O_WIN` and `DRAW`; `TWO_IN_LINE` and
//! `CONTINUE` are mid-game signals that only matter when the search runs out of depth.

use crate::board::Board;
use crate::{Cell, GameOutcome};

/// A board score from X's point of view.
pub type Score = i32;

/// The maximum boundary score for a finished game.
pub const MAX: Score = 200;
/// X completed a line.
pub const X_WIN: Score = MAX;
/// O completed a line.
pub const O_WIN: Score = -MAX;
/// Two marks in a line with the third cell empty. Positive for X, negated for O.
pub const TWO_IN_LINE: Score = MAX / 2;
/// Nothing special, keep playing.
pub const CONTINUE: Score = 1;
/// Full board without a completed line.
pub const DRAW: Score = 0;

/// The 8 ways to win: 3 rows, 3 columns and 2 diagonals, in that order.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Scores `board` for X.
///
/// A completed line always wins over anything else on the board, even if the rest of the
/// position could not arise in a legal game. With no completed line a full board is a draw.
/// Otherwise the last line (in [`WIN_LINES`] order) holding two equal marks and one empty
/// cell decides the sign of [`TWO_IN_LINE`]; earlier lines are overwritten, not summed.
pub fn evaluate(board: &Board) -> Score {
    let cells = board.cells();

    for [a, b, c] in WIN_LINES {
        let cell = cells[a];
        if cell != Cell::Empty && cell == cells[b] && cell == cells[c] {
            return if cell == Cell::X { X_WIN } else { O_WIN };
        }
    }

    if board.is_full() {
        return DRAW;
    }

    let mut score = CONTINUE;
    for line in WIN_LINES {
        let mut empty = 0;
        let mut x = 0;
        let mut o = 0;
        for idx in line {
            match cells[idx] {
                Cell::Empty => empty += 1,
                Cell::X => x += 1,
                Cell::O => o += 1,
            }
        }

        if empty == 1 {
            if x == 2 {
                score = TWO_IN_LINE;
            } else if o == 2 {
                score = -TWO_IN_LINE;
            }
        }
    }
    score
}

/// Returns `true` if `score` means the game is over.
pub fn is_terminal(score: Score) -> bool {
    score == X_WIN || score == O_WIN || score == DRAW
}

/// Maps the evaluation of `board` to the end-of-game state a caller should transition to.
pub fn outcome(board: &Board) -> GameOutcome {
    match evaluate(board) {
        X_WIN => GameOutcome::XWins,
        O_WIN => GameOutcome::OWins,
        DRAW => GameOutcome::Draw,
        _ => GameOutcome::InProgress,
    }
}
