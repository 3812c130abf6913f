//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Contents of a single square.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Cell {
    /// Unoccupied square.
    #[default]
    Empty,
    /// The human player's mark (X, always the first mover in a fresh match).
    Human,
    /// The automated opponent's mark (O).
    Computer,
}

impl Cell {
    /// Returns the other side, or `None` for an empty square.
    pub fn opponent(self) -> Option<Self> {
        match self {
            Cell::Human => Some(Cell::Computer),
            Cell::Computer => Some(Cell::Human),
            Cell::Empty => None,
        }
    }

    /// Returns true for `Human` and `Computer`.
    pub fn is_player(self) -> bool {
        self != Cell::Empty
    }

    /// Compact one-character notation.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Human => 'X',
            Cell::Computer => 'O',
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Cell::Human),
            'O' | 'o' => Some(Cell::Computer),
            '.' | '-' | '_' | ' ' => Some(Cell::Empty),
            _ => None,
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Creates a board from cells in row-major order.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Sets the cell at the given position.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Empty squares in ascending index order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(move |&pos| self.is_empty(pos))
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// Number of squares holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty squares show their 1-based number so a human can type it.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.cells[pos] {
                    Cell::Empty => (pos + 1).to_string(),
                    cell => cell.symbol().to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for cell in self.cells {
            write!(f, "{}", cell.symbol())?;
        }
        Ok(())
    }
}

/// Failure to parse the compact nine-character board notation.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// Wrong number of cells.
    #[display("Board must have exactly 9 cells, got {}", _0)]
    WrongLength(#[error(not(source))] usize),
    /// A character that is not a mark or an empty marker.
    #[display("Invalid cell {:?} at index {}", symbol, index)]
    InvalidCell {
        /// Offending character.
        symbol: char,
        /// Its index in the input.
        index: usize,
    },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 9 {
            return Err(ParseBoardError::WrongLength(chars.len()));
        }

        let mut cells = [Cell::Empty; 9];
        for (index, (&symbol, cell)) in chars.iter().zip(cells.iter_mut()).enumerate() {
            *cell = Cell::from_symbol(symbol)
                .ok_or(ParseBoardError::InvalidCell { symbol, index })?;
        }
        Ok(Self { cells })
    }
}

/// Value of a fully searched position, from the computer's point of view.
///
/// Variants are declared worst-to-best so `Ord` ranks them for the maximizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The human wins under optimal play.
    HumanWins,
    /// Neither side can force a win.
    Draw,
    /// The computer wins under optimal play.
    ComputerWins,
}

impl Outcome {
    /// Integer score: -1, 0 or +1.
    pub fn score(self) -> i8 {
        match self {
            Outcome::HumanWins => -1,
            Outcome::Draw => 0,
            Outcome::ComputerWins => 1,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Outcome::HumanWins => "human wins",
            Outcome::Draw => "draw",
            Outcome::ComputerWins => "computer wins",
        };
        write!(f, "{} ({:+})", label, self.score())
    }
}
