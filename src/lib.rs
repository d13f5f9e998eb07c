//! A small alpha-beta minimax engine for tic-tac-toe.
//!
//! The crate provides a static board evaluator, a depth-bounded alpha-beta search and an
//! [`Engine`](engine::Engine) that picks a move for either mark. Ties between equally good
//! moves are broken with an injected random source, so games against the engine are not
//! perfectly predictable while tests can still run deterministically.
//!
//! # Example
//!
//! ```rust
//! use tictactoe_alphabeta::board::Board;
//! use tictactoe_alphabeta::engine::Engine;
//! use tictactoe_alphabeta::random::CustomNumberGenerator;
//! use tictactoe_alphabeta::Cell;
//!
//! // Start from an empty board
//! let mut board = Board::new();
//!
//! // Create and configure a new engine using the builder
//! let mut engine = Engine::builder()
//!     .with_random_generator(CustomNumberGenerator::default())
//!     .with_opening_book(true)
//!     .build();
//!
//! // The opening book always prefers the center
//! let best_move = engine.best_move(&mut board, Cell::X).unwrap();
//! assert_eq!(best_move, 4);
//! ```

/// Contains the `Board` struct, the 3x3 grid the engine operates on.
pub mod board;
/// The move selection entry point, `Engine`, and its builder.
pub mod engine;
/// Contains the error type shared by the whole crate.
pub mod error;
/// Static scoring of a board from X's point of view.
pub mod evaluator;
/// A headless game controller that sequences turns between a human and the engine.
pub mod game;
/// The opening book used for the very first move of a game.
pub mod opening;
/// Contains traits and implementations for random number generation.
pub mod random;
/// Alpha-beta minimax search.
pub mod search;

pub use error::{Error, Result};

/// The content of a single board cell.
///
/// `X` is the maximizing mark: every score in this crate is expressed from X's point of view.
#[derive(Debug, Default, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty = 0,
    /// The maximizing player.
    X = 1,
    /// The minimizing player.
    O = 2,
}

impl Cell {
    /// Returns the mark of the other player. `Empty` stays `Empty`.
    pub fn opponent(self) -> Self {
        match self {
            Cell::X => Cell::O,
            Cell::O => Cell::X,
            Cell::Empty => Cell::Empty,
        }
    }

    /// Returns `true` for `X` and `O`.
    pub fn is_mark(self) -> bool {
        self != Cell::Empty
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// Represents the possible outcomes of a game.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum GameOutcome {
    /// The game is still ongoing.
    InProgress = 0,
    /// X completed a line.
    XWins = 1,
    /// O completed a line.
    OWins = 2,
    /// The board is full and nobody completed a line.
    Draw = 3,
}
