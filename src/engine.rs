use crate::board::Board;
use crate::error::{Error, Result};
use crate::evaluator::{Score, O_WIN, X_WIN};
use crate::opening::opening_score;
use crate::random::{RandomGenerator, StandardRandomGenerator};
use crate::search::{score_reply, FULL_DEPTH};
use crate::Cell;
use tracing::{debug, instrument, trace};

/// Picks moves for either mark with alpha-beta search.
///
/// An engine is a plain value: it owns its random source and the one-shot opening flag, so
/// several engines (one per side, or one per simulated game) never share state.
#[derive(Debug)]
pub struct Engine<K: RandomGenerator = StandardRandomGenerator> {
    random: K,
    depth: u32,
    use_opening_book: bool,
    opening_pending: bool,
}

impl<K: RandomGenerator> Default for Engine<K> {
    fn default() -> Self {
        EngineBuilder::new().build()
    }
}

/// A builder for creating instances of `Engine`.
pub struct EngineBuilder<K: RandomGenerator = StandardRandomGenerator> {
    random_generator: K,
    depth: u32,
    use_opening_book: bool,
}

impl<K: RandomGenerator> Default for EngineBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: RandomGenerator> EngineBuilder<K> {
    /// Creates a new builder: full-depth search with the opening book enabled.
    pub fn new() -> Self {
        Self {
            random_generator: K::default(),
            depth: FULL_DEPTH,
            use_opening_book: true,
        }
    }

    /// Sets the random number generator used to break ties.
    pub fn with_random_generator<R: RandomGenerator>(self, rg: R) -> EngineBuilder<R> {
        EngineBuilder {
            random_generator: rg,
            depth: self.depth,
            use_opening_book: self.use_opening_book,
        }
    }

    /// Sets the search depth in plies after the candidate move.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Enables or disables the opening book for the first move of a game.
    pub fn with_opening_book(mut self, use_opening_book: bool) -> Self {
        self.use_opening_book = use_opening_book;
        self
    }

    pub fn build(self) -> Engine<K> {
        Engine {
            random: self.random_generator,
            depth: self.depth,
            use_opening_book: self.use_opening_book,
            opening_pending: self.use_opening_book,
        }
    }
}

impl Engine {
    /// Creates an engine with the default configuration and a thread-local random source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new builder for `Engine`.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }
}

impl<K: RandomGenerator> Engine<K> {
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Returns `true` if the next call to [`Engine::best_move`] will use the opening book.
    pub fn opening_pending(&self) -> bool {
        self.opening_pending
    }

    /// Re-arms the opening book for a fresh game. Does nothing if the book is disabled.
    pub fn new_game(&mut self) {
        self.opening_pending = self.use_opening_book;
    }

    /// Scores every legal move of `mark` with a full search, in ascending position order.
    ///
    /// Never consults the opening book. `board` is left as it was found.
    pub fn scored_moves(&self, board: &mut Board, mark: Cell) -> Result<Vec<(usize, Score)>> {
        Self::check_request(board, mark)?;

        let mut scores = Vec::with_capacity(9);
        for pos in board.empty_positions() {
            board.place(pos, mark);
            let score = score_reply(board, mark, self.depth);
            board.clear(pos);
            trace!(pos, score, "scored candidate");
            scores.push((pos, score));
        }
        Ok(scores)
    }

    /// Returns the position `mark` should play on `board`.
    ///
    /// The first call after construction (or [`Engine::new_game`]) scores moves from the opening
    /// book instead of searching. Every later call searches each empty cell. When several
    /// moves share the best score, one of them is drawn from the engine's random source.
    ///
    /// Fails with [`Error::InvalidMark`] for `Cell::Empty` and [`Error::BoardFull`] when there
    /// is nothing to play. `board` is left as it was found.
    #[instrument(level = "debug", skip(self, board), fields(board = %board))]
    pub fn best_move(&mut self, board: &mut Board, mark: Cell) -> Result<usize> {
        Self::check_request(board, mark)?;

        let scores: Vec<(usize, Score)> = if self.opening_pending {
            self.opening_pending = false;
            debug!("using opening book");
            board
                .empty_positions()
                .into_iter()
                .map(|pos| (pos, opening_score(pos, mark)))
                .collect()
        } else {
            self.scored_moves(board, mark)?
        };

        let candidates = Self::best_candidates(&scores, mark);
        let chosen = *self.random.choose(&candidates).ok_or(Error::BoardFull)?;
        debug!(?candidates, chosen, "picked move");
        Ok(chosen)
    }

    fn check_request(board: &Board, mark: Cell) -> Result<()> {
        if !mark.is_mark() {
            return Err(Error::InvalidMark { mark });
        }
        if board.is_full() {
            return Err(Error::BoardFull);
        }
        Ok(())
    }

    /// Returns every position sharing the best score for `mark`: the highest for X, the lowest
    /// for O.
    fn best_candidates(scores: &[(usize, Score)], mark: Cell) -> Vec<usize> {
        let mut best_score = if mark == Cell::X { O_WIN } else { X_WIN };
        let mut best_moves = Vec::new();
        for &(pos, score) in scores {
            let better = match mark {
                Cell::X => score > best_score,
                _ => score < best_score,
            };
            if better {
                best_moves.clear();
                best_moves.push(pos);
                best_score = score;
            } else if score == best_score {
                best_moves.push(pos);
            }
        }
        best_moves
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::engine::Engine;
    use crate::error::Error;
    use crate::evaluator::{DRAW, O_WIN, X_WIN};
    use crate::random::CustomNumberGenerator;
    use crate::Cell;

    fn seeded(seed: i64) -> Engine<CustomNumberGenerator> {
        Engine::builder()
            .with_random_generator(CustomNumberGenerator::new(seed))
            .build()
    }

    fn searching(seed: i64) -> Engine<CustomNumberGenerator> {
        Engine::builder()
            .with_random_generator(CustomNumberGenerator::new(seed))
            .with_opening_book(false)
            .build()
    }

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn opening_book_takes_center() {
        // arrange
        let mut engine = seeded(7);
        let mut b = Board::new();

        // act
        let pos = engine.best_move(&mut b, Cell::X).unwrap();

        // assert
        assert_eq!(pos, 4);
        assert!(!engine.opening_pending());
        assert_eq!(b, Board::new());
    }

    #[test]
    fn opening_book_for_o_answers_center_with_a_corner() {
        let mut engine = seeded(11);
        let mut b = board("...|.X.|...");
        let pos = engine.best_move(&mut b, Cell::O).unwrap();
        assert!([0, 2, 6, 8].contains(&pos), "got {}", pos);
    }

    #[test]
    fn second_move_searches_instead_of_using_the_book() {
        // arrange
        let mut engine = seeded(3);
        engine.best_move(&mut Board::new(), Cell::X).unwrap();
        // the book would send O to a corner, but only the block on 7 avoids losing
        let mut b = board("OX.|.X.|...");

        // act
        let pos = engine.best_move(&mut b, Cell::O).unwrap();

        // assert
        assert_eq!(pos, 7);
        assert!(!engine.opening_pending());
    }

    #[test]
    fn new_game_rearms_the_book() {
        let mut engine = seeded(3);
        engine.best_move(&mut Board::new(), Cell::X).unwrap();
        assert!(!engine.opening_pending());
        engine.new_game();
        assert!(engine.opening_pending());
        let pos = engine.best_move(&mut board("OX.|.X.|..."), Cell::O).unwrap();
        assert!([2, 6, 8].contains(&pos), "got {}", pos);
    }

    #[test]
    fn huge_seed_does_not_overflow() {
        let mut engine = searching(i64::MAX / 2);
        let pos = engine.best_move(&mut Board::new(), Cell::X).unwrap();
        assert!(pos < 9);
    }

    #[test]
    fn disabled_book_stays_disabled() {
        let mut engine = searching(3);
        assert!(!engine.opening_pending());
        engine.new_game();
        assert!(!engine.opening_pending());
    }

    #[test]
    fn takes_the_win() {
        let mut engine = searching(1);
        let mut b = board("XX.|OO.|...");
        assert_eq!(engine.best_move(&mut b, Cell::X).unwrap(), 2);
        // blocking on 2 also forks rows and the anti-diagonal, so both moves win for O
        let pos = engine.best_move(&mut b, Cell::O).unwrap();
        assert!([2, 5].contains(&pos), "got {}", pos);
    }

    #[test]
    fn blocks_the_only_threat() {
        // O must block row 0; anything else loses at once
        let mut engine = searching(5);
        let mut b = board("XX.|.O.|...");
        assert_eq!(engine.best_move(&mut b, Cell::O).unwrap(), 2);
    }

    #[test]
    fn search_without_book_picks_from_whole_tie_set() {
        // every first move draws with best play, so the tie set is the whole board
        let engine = searching(1);
        let mut b = Board::new();
        let scores = engine.scored_moves(&mut b, Cell::X).unwrap();
        assert_eq!(scores.len(), 9);
        assert!(scores.iter().all(|&(_, score)| score == DRAW));
        assert_eq!(b, Board::new());
    }

    #[test]
    fn scored_moves_report_wins_and_losses() {
        let engine = searching(1);
        let mut b = board("XX.|OO.|...");
        let scores = engine.scored_moves(&mut b, Cell::O).unwrap();
        assert_eq!(
            scores,
            vec![(2, O_WIN), (5, O_WIN), (6, X_WIN), (7, X_WIN), (8, X_WIN)]
        );
    }

    #[test]
    fn leaves_board_untouched() {
        let mut engine = searching(9);
        let mut b = board("X..|.O.|..X");
        let before = b;
        let pos = engine.best_move(&mut b, Cell::O).unwrap();
        assert_eq!(b, before);
        assert!(before.is_empty_at(pos));
        // the only drawing replies are the edges
        assert!([1, 3, 5, 7].contains(&pos), "got {}", pos);
    }

    #[test]
    fn rejects_full_board_and_empty_mark() {
        // arrange
        let mut engine = seeded(1);
        let mut full = board("XOX|XOO|OXX");
        let mut empty = Board::new();

        // act & assert
        assert_eq!(engine.best_move(&mut full, Cell::O), Err(Error::BoardFull));
        assert_eq!(
            engine.best_move(&mut empty, Cell::Empty),
            Err(Error::InvalidMark { mark: Cell::Empty })
        );
        // failed calls do not consume the opening book
        assert!(engine.opening_pending());
    }

    #[test]
    fn same_seed_same_choice() {
        let b = board("X..|...|...");
        let first = searching(1234).best_move(&mut b.clone(), Cell::O).unwrap();
        let second = searching(1234).best_move(&mut b.clone(), Cell::O).unwrap();
        assert_eq!(first, second);
        // a corner opening must be answered in the center
        assert_eq!(first, 4);
    }

    #[test]
    fn shallow_engine_still_returns_a_legal_move() {
        let mut engine = Engine::builder()
            .with_random_generator(CustomNumberGenerator::new(2))
            .with_opening_book(false)
            .with_depth(1)
            .build();
        let mut b = board("OO.|.X.|...");
        assert_eq!(engine.depth(), 1);
        let pos = engine.best_move(&mut b, Cell::X).unwrap();
        assert!(b.is_empty_at(pos));
    }
}
