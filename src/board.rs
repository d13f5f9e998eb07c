use crate::error::{Error, Result};
use crate::Cell;
use std::fmt;
use std::str::FromStr;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// The 3x3 tic-tac-toe grid.
///
/// Cells are stored row-major, so positions are laid out as
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
///
/// The board has no notion of whose turn it is: turn bookkeeping belongs to whoever owns the
/// game (see [`crate::game::Game`]). The search mutates a board in place and always puts every
/// hypothetical move back before returning.
#[derive(Debug, Default, PartialEq, Eq, Hash, Copy, Clone)]
pub struct Board {
    field: [Cell; CELLS],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from raw cells.
    pub const fn from_cells(field: [Cell; CELLS]) -> Self {
        Self { field }
    }

    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.field
    }

    /// Returns the cell at `pos`, or `None` if `pos` is not in `0..9`.
    pub fn get(&self, pos: usize) -> Option<Cell> {
        self.field.get(pos).copied()
    }

    /// Writes `cell` at `pos` without any legality check.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not in `0..9`.
    pub fn place(&mut self, pos: usize, cell: Cell) {
        self.field[pos] = cell;
    }

    /// Empties the cell at `pos`. Used to take back a hypothetical move.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not in `0..9`.
    pub fn clear(&mut self, pos: usize) {
        self.field[pos] = Cell::Empty;
    }

    /// Places `mark` at `pos` after checking that the move is legal on this board.
    pub fn play(&mut self, pos: usize, mark: Cell) -> Result<()> {
        if !mark.is_mark() {
            return Err(Error::InvalidMark { mark });
        }
        match self.get(pos) {
            None => Err(Error::InvalidPosition { position: pos }),
            Some(Cell::Empty) => {
                self.field[pos] = mark;
                Ok(())
            }
            Some(_) => Err(Error::Occupied { position: pos }),
        }
    }

    pub fn is_empty_at(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Cell::Empty))
    }

    /// Returns the empty positions in ascending order.
    pub fn empty_positions(&self) -> Vec<usize> {
        self.field
            .iter()
            .enumerate()
            .filter(|(_, x)| **x == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        !self.field.contains(&Cell::Empty)
    }

    /// Counts the cells holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.field.iter().filter(|x| **x == cell).count()
    }

    /// Returns a unique base-3 encoding of the board (`Empty = 0`, `X = 1`, `O = 2`).
    pub fn get_hash(&self) -> u32 {
        let mut hash = 0;
        for (i, &cell) in self.field.iter().enumerate() {
            hash += cell as u32 * 3u32.pow(i as u32);
        }
        hash
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.field.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in cells {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parses nine cells, skipping line breaks and `|` separators.
    ///
    /// `.`, `_`, `-` and space are empty cells; `X`/`x` and `O`/`o`/`0` are marks.
    fn from_str(s: &str) -> Result<Self> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !matches!(c, '\n' | '\r' | '|'))
            .collect();
        if chars.len() != CELLS {
            return Err(Error::InvalidBoardLength {
                expected: CELLS,
                got: chars.len(),
            });
        }

        let mut field = [Cell::Empty; CELLS];
        for (i, &c) in chars.iter().enumerate() {
            field[i] = Cell::from_char(c).ok_or(Error::InvalidCellCharacter {
                character: c,
                position: i,
            })?;
        }
        Ok(Self { field })
    }
}
