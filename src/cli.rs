//! Command-line interface for hint_tictactoe.

use clap::{Args, Parser, Subcommand};

/// Tic-tac-toe hint minigame against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "hint_tictactoe")]
#[command(about = "Tic-tac-toe minigame with a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive session on the terminal
    Play {
        /// Opponent settings
        #[command(flatten)]
        opponent: OpponentArgs,

        /// Let the computer open each match
        #[arg(long)]
        computer_first: bool,
    },

    /// Print the move the opponent would play on a board
    Suggest {
        /// Board in compact notation, e.g. "X...O...." (X human, O computer, . empty)
        board: String,

        /// Opponent settings
        #[command(flatten)]
        opponent: OpponentArgs,

        /// Print the choice as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the minimax value of a board from the computer's point of view
    Evaluate {
        /// Board in compact notation
        board: String,

        /// Evaluate with the human to move (default: computer to move)
        #[arg(long)]
        human_to_move: bool,
    },
}

/// Flags shared by commands that build an opponent.
#[derive(Args, Debug, Clone)]
pub struct OpponentArgs {
    /// Path to an opponent config file (TOML)
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Fixed rng seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Chance of a random move instead of the minimax move (0.0-1.0)
    #[arg(long)]
    pub random_move_probability: Option<f64>,
}
