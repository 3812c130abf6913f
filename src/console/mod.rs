//! Console front end: the turn loop the hint minigame runs in a terminal.

mod orchestrator;
mod players;
mod session;

pub use orchestrator::Orchestrator;
pub use players::{ComputerPlayer, HumanPlayer, Player};
pub use session::{INSTRUCTIONS, Session};
