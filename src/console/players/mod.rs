//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use crate::games::tictactoe::{Match, Position};
use anyhow::Result;

/// Anything that can pick a move for the side to play.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// The returned position must be empty on the match board.
    fn get_move(&mut self, game: &Match) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
