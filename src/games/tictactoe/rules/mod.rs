//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). They are shared by the
//! minimax search and by the match state machine that drives a game.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, is_winning_board, winner};
