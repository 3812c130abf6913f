//! Game orchestration between the two players.

use super::players::Player;
use crate::games::tictactoe::{Cell, Match, MatchStatus, Move};
use anyhow::{Context, Result};
use tracing::{debug, info, instrument};

/// Runs a single match between a human and a computer player.
#[derive(Debug, Clone, Default)]
pub struct Orchestrator {
    game: Match,
}

impl Orchestrator {
    /// Creates an orchestrator for a fresh match.
    pub fn new(game: Match) -> Self {
        Self { game }
    }

    /// Returns the match being played.
    pub fn game(&self) -> &Match {
        &self.game
    }

    /// Alternates players until the match reaches a final status.
    #[instrument(skip_all, fields(human = human.name(), computer = computer.name()))]
    pub fn run<'a>(
        &mut self,
        human: &'a mut dyn Player,
        computer: &'a mut dyn Player,
    ) -> Result<MatchStatus> {
        info!("Starting match");

        while let Some(side) = self.game.to_move() {
            let player = match side {
                Cell::Computer => &mut *computer,
                _ => &mut *human,
            };

            debug!(player = player.name(), "Waiting for move");
            let position = player.get_move(&self.game)?;
            self.game
                .play(Move::new(side, position))
                .with_context(|| format!("{} played an illegal move", player.name()))?;
        }

        Ok(self.game.status())
    }
}
