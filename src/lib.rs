//! Hint tic-tac-toe library
//!
//! A tic-tac-toe minigame in which a human earns a hint by beating an
//! automated opponent.
//!
//! # Architecture
//!
//! - **Games**: board, rules, exhaustive minimax and the move selector
//! - **Console**: players, match orchestration and the hint session
//! - **Config**: opponent settings loaded from TOML
//!
//! # Example
//!
//! ```
//! use hint_tictactoe::{Board, MoveSelector, Position};
//!
//! // O threatens the middle row; with the random fallback disabled the
//! // opponent always completes it.
//! let board: Board = "XX.OO.X..".parse()?;
//! let mut selector = MoveSelector::seeded(42).with_random_move_probability(0.0);
//! assert_eq!(selector.select_move(&board)?, Position::MiddleRight);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, FirstPlayer, OpponentConfig};

// Crate-level exports - Console front end
pub use console::{ComputerPlayer, HumanPlayer, INSTRUCTIONS, Orchestrator, Player, Session};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Cell, Choice, DEFAULT_RANDOM_MOVE_PROBABILITY, LINES, Match, MatchStatus, Move,
    MoveError, MoveSelector, Outcome, ParseBoardError, Position, RulesError, Strategy, best_move,
    evaluate, is_draw, is_full, is_winning_board, random_move, winner,
};
