//! Errors raised by the rules and the move selector.

use super::types::Cell;
use derive_more::Display;

/// Caller-side precondition violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RulesError {
    /// A move was requested on a board with no empty square.
    #[display("No legal move: the board is full")]
    InvalidState,

    /// A player-specific query was made for a value that is not a player.
    #[display("{:?} is not a player", _0)]
    InvalidPlayer(Cell),
}

impl std::error::Error for RulesError {}
