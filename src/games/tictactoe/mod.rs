//! Tic-tac-toe: board, rules, minimax search and the opponent's move selector.

mod action;
mod error;
mod game;
mod position;
pub mod rules;
mod search;
mod selector;
mod types;

pub use action::{Move, MoveError};
pub use error::RulesError;
pub use game::{Match, MatchStatus};
pub use position::Position;
pub use rules::{LINES, is_draw, is_full, is_winning_board, winner};
pub use search::evaluate;
pub use selector::{
    Choice, DEFAULT_RANDOM_MOVE_PROBABILITY, MoveSelector, Strategy, best_move, random_move,
};
pub use types::{Board, Cell, Outcome, ParseBoardError};
