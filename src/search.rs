use crate::board::Board;
use crate::evaluator::{evaluate, is_terminal, Score, O_WIN, X_WIN};
use crate::Cell;

/// Search depth that reaches the end of any game on a 3x3 board.
pub const FULL_DEPTH: u32 = 9;

/// Alpha-beta search for X to move. Returns the best score X can force, from X's point of view.
///
/// Moves are tried in ascending position order. On a cutoff (`best >= beta`) the function
/// returns `beta`: the minimizing caller already has something at least as good. Every move
/// placed on `board` is taken back before returning.
pub fn search_maximizing(board: &mut Board, mut alpha: Score, beta: Score, depth: u32) -> Score {
    let score = evaluate(board);
    if depth == 0 || is_terminal(score) {
        return score;
    }

    let mut best = O_WIN;
    for pos in board.empty_positions() {
        board.place(pos, Cell::X);
        best = best.max(search_minimizing(board, alpha, beta, depth - 1));
        board.clear(pos);

        if best >= beta {
            return beta;
        }
        alpha = alpha.max(best);
    }
    best
}

/// Alpha-beta search for O to move. Mirror of [`search_maximizing`]: O minimizes the score and
/// a cutoff (`best <= alpha`) returns `alpha`.
pub fn search_minimizing(board: &mut Board, alpha: Score, mut beta: Score, depth: u32) -> Score {
    let score = evaluate(board);
    if depth == 0 || is_terminal(score) {
        return score;
    }

    let mut best = X_WIN;
    for pos in board.empty_positions() {
        board.place(pos, Cell::O);
        best = best.min(search_maximizing(board, alpha, beta, depth - 1));
        board.clear(pos);

        if best <= alpha {
            return alpha;
        }
        beta = beta.min(best);
    }
    best
}

/// Scores the position after `mark` has just moved, by searching the opponent's best reply
/// with a full window.
pub(crate) fn score_reply(board: &mut Board, mark: Cell, depth: u32) -> Score {
    match mark {
        Cell::X => search_minimizing(board, O_WIN, X_WIN, depth),
        _ => search_maximizing(board, O_WIN, X_WIN, depth),
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::evaluator::{evaluate, DRAW, O_WIN, TWO_IN_LINE, X_WIN};
    use crate::search::{search_maximizing, search_minimizing, FULL_DEPTH};

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn empty_board_is_a_draw() {
        // arrange
        let mut b = Board::new();

        // act
        let score = search_maximizing(&mut b, O_WIN, X_WIN, FULL_DEPTH);

        // assert
        assert_eq!(score, DRAW);
        assert_eq!(b, Board::new());
    }

    #[test]
    fn finds_immediate_win() {
        let mut b = board("XX.|OO.|...");
        assert_eq!(search_maximizing(&mut b, O_WIN, X_WIN, FULL_DEPTH), X_WIN);
        assert_eq!(search_minimizing(&mut b, O_WIN, X_WIN, FULL_DEPTH), O_WIN);
    }

    #[test]
    fn solves_known_corner_openings() {
        // X on opposite corners around O's center: O holds with an edge
        let mut held = board("X..|.O.|..X");
        let before = held;
        assert_eq!(search_minimizing(&mut held, O_WIN, X_WIN, FULL_DEPTH), DRAW);
        assert_eq!(held, before);

        // O answering a corner with the opposite corner loses
        let mut lost = board("X..|...|..O");
        assert_eq!(search_maximizing(&mut lost, O_WIN, X_WIN, FULL_DEPTH), X_WIN);
    }

    #[test]
    fn terminal_board_returns_its_evaluation() {
        let mut b = board("XOX|OXO|..X");
        assert_eq!(search_minimizing(&mut b, O_WIN, X_WIN, FULL_DEPTH), X_WIN);
        assert_eq!(search_maximizing(&mut b, O_WIN, X_WIN, FULL_DEPTH), X_WIN);
    }

    #[test]
    fn depth_zero_returns_heuristic() {
        let mut b = board("XX.|.O.|...");
        assert_eq!(search_maximizing(&mut b, O_WIN, X_WIN, 0), TWO_IN_LINE);
        assert_eq!(search_minimizing(&mut b, O_WIN, X_WIN, 0), evaluate(&b));
    }

    #[test]
    fn depth_limit_is_honored() {
        // one ply ahead X only sees its own new pair, the full search sees the forced draw
        let mut b = board("OO.|.X.|...");
        assert_eq!(search_maximizing(&mut b, O_WIN, X_WIN, 1), TWO_IN_LINE);
        assert_eq!(search_maximizing(&mut b, O_WIN, X_WIN, FULL_DEPTH), DRAW);
    }

    #[test]
    fn cutoff_returns_bound_and_restores_board() {
        // X can win at once, so any window with beta below X_WIN fails high to beta
        let mut b = board("XX.|OO.|...");
        let before = b;
        assert_eq!(search_maximizing(&mut b, O_WIN, 50, FULL_DEPTH), 50);
        assert_eq!(search_minimizing(&mut b, -50, X_WIN, FULL_DEPTH), -50);
        assert_eq!(b, before);
    }
}
