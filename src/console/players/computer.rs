//! Computer player backed by the minimax move selector.

use super::Player;
use crate::games::tictactoe::{Match, MoveSelector, Position};
use anyhow::Result;
use rand::Rng;
use tracing::debug;

/// Automated opponent.
pub struct ComputerPlayer<R> {
    name: String,
    selector: MoveSelector<R>,
}

impl<R: Rng> ComputerPlayer<R> {
    /// Creates a computer player around a selector.
    pub fn new(name: impl Into<String>, selector: MoveSelector<R>) -> Self {
        Self {
            name: name.into(),
            selector,
        }
    }
}

impl<R: Rng> Player for ComputerPlayer<R> {
    fn get_move(&mut self, game: &Match) -> Result<Position> {
        let choice = self.selector.choose(game.board())?;
        debug!(
            ai = %self.name,
            position = %choice.position(),
            strategy = %choice.strategy(),
            "Computer chose position"
        );
        Ok(*choice.position())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
