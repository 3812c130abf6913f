//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Position, RulesError};
use tracing::instrument;

/// The eight winning lines: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether `player` owns a complete line.
///
/// # Errors
///
/// Returns [`RulesError::InvalidPlayer`] when asked about [`Cell::Empty`].
#[instrument(level = "trace", skip(board))]
pub fn is_winning_board(board: &Board, player: Cell) -> Result<bool, RulesError> {
    if !player.is_player() {
        return Err(RulesError::InvalidPlayer(player));
    }
    Ok(has_line(board, player))
}

/// Returns the side owning a complete line, if any.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Cell> {
    [Cell::Computer, Cell::Human]
        .into_iter()
        .find(|&player| has_line(board, player))
}

/// Line check without the player validation, for the search hot path.
pub(crate) fn has_line(board: &Board, player: Cell) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == player))
}
