//! Human player reading moves from a line-oriented input.

use super::Player;
use crate::games::tictactoe::{Match, Position};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Human player typing square numbers 1-9.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    #[instrument(skip_all, fields(player = %self.name))]
    fn get_move(&mut self, game: &Match) -> Result<Position> {
        loop {
            writeln!(self.output, "{}", game.board().display())?;
            write!(self.output, "Enter your move (1-9): ")?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read move")?;
            if read == 0 {
                anyhow::bail!("Input closed before a move was entered");
            }

            match Position::from_human_number(&line) {
                Some(pos) if game.board().is_empty(pos) => {
                    debug!(position = %pos, "Human chose position");
                    return Ok(pos);
                }
                _ => {
                    debug!(input = line.trim(), "Rejected human input");
                    writeln!(self.output, "Invalid move! Try again.")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
