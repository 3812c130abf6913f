//! Match state machine for a single game of tic-tac-toe.

use super::action::{Move, MoveError};
use super::rules::{is_full, win::has_line};
use super::types::{Board, Cell};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Where a match stands. The three finished states are absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    /// Game is ongoing.
    InProgress,
    /// The human completed a line.
    HumanWon,
    /// The computer completed a line.
    ComputerWon,
    /// Board filled with no line.
    Draw,
}

impl MatchStatus {
    /// Whether no further moves are accepted.
    pub fn is_over(self) -> bool {
        self != MatchStatus::InProgress
    }

    fn won_by(player: Cell) -> Self {
        match player {
            Cell::Computer => MatchStatus::ComputerWon,
            _ => MatchStatus::HumanWon,
        }
    }
}

/// One match: board, side to move, status and history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    board: Board,
    to_move: Cell,
    status: MatchStatus,
    history: Vec<Move>,
}

impl Match {
    /// Creates a new match with the human moving first.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Cell::Human,
            status: MatchStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Creates a new match with the given side moving first.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidPlayer`] for [`Cell::Empty`].
    #[instrument]
    pub fn with_first_player(first: Cell) -> Result<Self, MoveError> {
        if !first.is_player() {
            return Err(MoveError::InvalidPlayer(first));
        }
        Ok(Self {
            to_move: first,
            ..Self::new()
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move, or `None` once the match is over.
    pub fn to_move(&self) -> Option<Cell> {
        (!self.status.is_over()).then_some(self.to_move)
    }

    /// Returns the match status.
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Returns the moves applied so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Validates and applies a move, returning the resulting status.
    ///
    /// # Errors
    ///
    /// Rejects moves after the match ended, out of turn, by `Empty`, or onto
    /// an occupied square. A rejected move leaves the match untouched.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn play(&mut self, mv: Move) -> Result<MatchStatus, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if !mv.player.is_player() {
            return Err(MoveError::InvalidPlayer(mv.player));
        }
        if mv.player != self.to_move {
            return Err(MoveError::WrongPlayer(mv.player));
        }
        if !self.board.is_empty(mv.position) {
            return Err(MoveError::SquareOccupied(mv.position));
        }

        self.board.set(mv.position, mv.player);
        self.history.push(mv);
        debug!(%mv, "Move applied");

        if has_line(&self.board, mv.player) {
            self.status = MatchStatus::won_by(mv.player);
        } else if is_full(&self.board) {
            self.status = MatchStatus::Draw;
        } else if let Some(next) = mv.player.opponent() {
            self.to_move = next;
        }

        if self.status.is_over() {
            info!(status = ?self.status, moves = self.history.len(), "Match finished");
        }
        Ok(self.status)
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}
