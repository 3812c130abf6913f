//! Exhaustive minimax search.
//!
//! The whole game tree is expanded: at most 9! leaves, far fewer in practice
//! because terminal positions cut branches short. Exploratory marks are
//! placed on a scratch board and removed again before the next sibling is
//! tried, so every branch sees the position it was reached from.

use super::rules::win::has_line;
use super::types::{Board, Cell, Outcome};
use tracing::{instrument, trace};

/// Game-theoretic value of `board` under optimal play by both sides.
///
/// `maximizing` selects the side to move: `true` for the computer, `false`
/// for the human. The caller's board is not modified.
#[instrument(level = "debug", skip(board), fields(board = %board))]
pub fn evaluate(board: &Board, maximizing: bool) -> Outcome {
    let mut scratch = *board;
    let outcome = minimax(&mut scratch, maximizing);
    debug_assert_eq!(&scratch, board, "search must restore every explored cell");
    trace!(%outcome, "position evaluated");
    outcome
}

/// Terminal value of a position, checked in priority order.
fn terminal(board: &Board) -> Option<Outcome> {
    if has_line(board, Cell::Computer) {
        Some(Outcome::ComputerWins)
    } else if has_line(board, Cell::Human) {
        Some(Outcome::HumanWins)
    } else if board.is_full() {
        Some(Outcome::Draw)
    } else {
        None
    }
}

/// Place-recurse-undo over every empty cell.
pub(crate) fn minimax(board: &mut Board, maximizing: bool) -> Outcome {
    if let Some(outcome) = terminal(board) {
        return outcome;
    }

    let (mark, bound) = if maximizing {
        (Cell::Computer, Outcome::ComputerWins)
    } else {
        (Cell::Human, Outcome::HumanWins)
    };

    let mut best: Option<Outcome> = None;
    for pos in super::Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }

        board.set(pos, mark);
        let value = minimax(board, !maximizing);
        board.set(pos, Cell::Empty);

        best = Some(match best {
            None => value,
            Some(current) if maximizing => current.max(value),
            Some(current) => current.min(value),
        });

        // Nothing can beat the side's own win; remaining siblings cannot
        // change the value.
        if best == Some(bound) {
            break;
        }
    }

    // Non-terminal positions always have an empty cell.
    best.unwrap_or(Outcome::Draw)
}
