//! Turn sequencing for a single game.
//!
//! [`Game`] owns the authoritative board, decides whose turn it is and moves to an end state
//! after every placement. In the single-player modes the engine replies on its own as soon
//! as it is its turn, so callers only ever place the human's marks.

use crate::board::Board;
use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::evaluator;
use crate::random::{RandomGenerator, StandardRandomGenerator};
use crate::{Cell, GameOutcome};
use tracing::{debug, info};

/// Who plays which mark.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Mode {
    /// The human plays X and moves first; the engine plays O.
    PlayX,
    /// The human plays O; the engine plays X and opens the game.
    PlayO,
    /// Two humans share the board; the engine never moves.
    HotSeat,
}

/// Where a game currently stands.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum GameState {
    XTurn,
    OTurn,
    XWin,
    OWin,
    Draw,
}

impl GameState {
    pub fn is_over(self) -> bool {
        matches!(self, GameState::XWin | GameState::OWin | GameState::Draw)
    }

    /// Returns the mark to move, or `None` once the game is over.
    pub fn to_move(self) -> Option<Cell> {
        match self {
            GameState::XTurn => Some(Cell::X),
            GameState::OTurn => Some(Cell::O),
            _ => None,
        }
    }
}

/// A game between a human and the engine, or between two humans.
#[derive(Debug)]
pub struct Game<K: RandomGenerator = StandardRandomGenerator> {
    board: Board,
    engine: Engine<K>,
    mode: Mode,
    state: GameState,
}

impl<K: RandomGenerator> Game<K> {
    /// Creates and starts a game. In [`Mode::PlayO`] the engine has already played its first
    /// move when this returns.
    pub fn new(mode: Mode, engine: Engine<K>) -> Result<Self> {
        let mut game = Self {
            board: Board::new(),
            engine,
            mode,
            state: GameState::XTurn,
        };
        game.start()?;
        Ok(game)
    }

    /// Clears the board and starts over with X to move.
    pub fn start(&mut self) -> Result<GameState> {
        self.board = Board::new();
        self.state = GameState::XTurn;
        self.engine.new_game();
        debug!(mode = ?self.mode, "game started");

        if self.is_engine_turn() {
            self.engine_move()?;
            return self.advance();
        }
        Ok(self.state)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn engine(&self) -> &Engine<K> {
        &self.engine
    }

    /// The mark the engine plays, or `None` in hot seat mode.
    pub fn engine_mark(&self) -> Option<Cell> {
        match self.mode {
            Mode::PlayX => Some(Cell::O),
            Mode::PlayO => Some(Cell::X),
            Mode::HotSeat => None,
        }
    }

    pub fn is_engine_turn(&self) -> bool {
        self.engine_mark().is_some() && self.engine_mark() == self.state.to_move()
    }

    pub fn is_player_turn(&self) -> bool {
        self.state.to_move().is_some() && !self.is_engine_turn()
    }

    /// Places the mark of the side to move at `pos` on behalf of a human player.
    ///
    /// If the engine is to move afterwards it replies before this returns. Returns the state
    /// the game settled in.
    pub fn place(&mut self, pos: usize) -> Result<GameState> {
        let mark = self.state.to_move().ok_or(Error::GameOver)?;
        self.board.play(pos, mark)?;
        debug!(pos, ?mark, "placed");
        self.advance()
    }

    fn engine_move(&mut self) -> Result<()> {
        let mark = self.state.to_move().ok_or(Error::GameOver)?;
        let pos = self.engine.best_move(&mut self.board, mark)?;
        self.board.play(pos, mark)?;
        debug!(pos, ?mark, "engine placed");
        Ok(())
    }

    /// Moves to an end state if the last placement finished the game, otherwise passes the
    /// turn and lets the engine reply when it is its turn.
    fn advance(&mut self) -> Result<GameState> {
        loop {
            self.state = match evaluator::outcome(&self.board) {
                GameOutcome::XWins => GameState::XWin,
                GameOutcome::OWins => GameState::OWin,
                GameOutcome::Draw => GameState::Draw,
                GameOutcome::InProgress => match self.state {
                    GameState::XTurn => GameState::OTurn,
                    GameState::OTurn => GameState::XTurn,
                    over => over,
                },
            };

            if self.state.is_over() {
                info!(state = ?self.state, board = %self.board, "game over");
                return Ok(self.state);
            }
            if !self.is_engine_turn() {
                return Ok(self.state);
            }
            self.engine_move()?;
        }
    }
}
