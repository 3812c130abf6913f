//! A hint session: matches are replayed after a draw until someone wins or
//! the human stops.

use super::orchestrator::Orchestrator;
use super::players::{HumanPlayer, Player};
use crate::games::tictactoe::{Cell, Match, MatchStatus};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{info, instrument};

/// Rules shown before the first match.
pub const INSTRUCTIONS: &str = "\
Here are the instructions:

1. You are X, and the computer is O.

2. The game board is numbered 1-9 like this:

     1 | 2 | 3
     - - - - -
     4 | 5 | 6
     - - - - -
     7 | 8 | 9

   Enter a number (1-9) to place your mark (X).

3. Win by getting 3 in a row (horizontally, vertically, or diagonally).

4. If the board is full and no one wins, it's a tie!

Can you outsmart the computer? Good luck!";

/// Interactive session on a line-oriented console.
///
/// The human reads from `input`; `computer` is usually a
/// [`ComputerPlayer`](super::ComputerPlayer).
pub struct Session<R, W, C> {
    input: R,
    output: W,
    computer: C,
    first_player: Cell,
}

impl<R: BufRead, W: Write, C: Player> Session<R, W, C> {
    /// Creates a session where the human opens every match.
    pub fn new(input: R, output: W, computer: C) -> Self {
        Self {
            input,
            output,
            computer,
            first_player: Cell::Human,
        }
    }

    /// Sets the side that opens every match.
    pub fn with_first_player(mut self, first_player: Cell) -> Self {
        self.first_player = first_player;
        self
    }

    /// Plays until a match is won or the human declines a rematch after a
    /// draw.
    ///
    /// Returns `true` when the human earned a hint.
    #[instrument(skip(self), fields(first_player = ?self.first_player))]
    pub fn run(&mut self) -> Result<bool> {
        writeln!(self.output, "*** Welcome to Tic-Tac-Toe! ***\n")?;
        writeln!(self.output, "{}\n", INSTRUCTIONS)?;

        loop {
            let game = self.play_match()?;
            writeln!(self.output, "{}", game.board().display())?;

            match game.status() {
                MatchStatus::HumanWon => {
                    info!("Human earned a hint");
                    writeln!(self.output, "You win!")?;
                    return Ok(true);
                }
                MatchStatus::ComputerWon => {
                    info!("Computer won, no hint");
                    writeln!(
                        self.output,
                        "Computer wins! You won't be getting any hints for now."
                    )?;
                    return Ok(false);
                }
                MatchStatus::Draw | MatchStatus::InProgress => {
                    writeln!(self.output, "It's a tie!")?;
                    if !self.ask_play_again()? {
                        writeln!(self.output, "Thanks for playing!")?;
                        return Ok(false);
                    }
                }
            }
        }
    }

    fn play_match(&mut self) -> Result<Match> {
        let game = Match::with_first_player(self.first_player)?;
        let mut orchestrator = Orchestrator::new(game);
        let mut human = HumanPlayer::new("You", &mut self.input, &mut self.output);
        orchestrator.run(&mut human, &mut self.computer)?;
        Ok(orchestrator.game().clone())
    }

    fn ask_play_again(&mut self) -> Result<bool> {
        write!(self.output, "Do you want to play again? (y/n): ")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .context("Failed to read answer")?;
        Ok(line.trim().eq_ignore_ascii_case("y"))
    }
}
