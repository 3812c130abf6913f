//! Move selection for the automated opponent.
//!
//! Most of the time the opponent plays the minimax-optimal move. With a fixed
//! probability it instead plays a uniformly random legal move, which gives a
//! human a real chance of winning a hint.

use super::error::RulesError;
use super::position::Position;
use super::search::minimax;
use super::types::{Board, Cell, Outcome};
use derive_more::Display;
use rand::distributions::Standard;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Probability of the random fallback used by the hint minigame.
pub const DEFAULT_RANDOM_MOVE_PROBABILITY: f64 = 0.3;

/// Which branch of the policy produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Strategy {
    /// Uniform choice among the empty squares.
    #[display("random")]
    Random,
    /// Exhaustive search.
    #[display("minimax")]
    Minimax,
}

/// A selected move together with the branch that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_getters::Getters)]
pub struct Choice {
    /// Square to play.
    position: Position,
    /// Branch of the policy that chose it.
    strategy: Strategy,
}

/// Stateless opponent policy with an injected randomness source.
///
/// Nothing is carried between calls except the state of the rng, so a seeded
/// rng makes every decision reproducible.
#[derive(Debug, Clone)]
pub struct MoveSelector<R> {
    rng: R,
    random_move_probability: f64,
}

impl MoveSelector<StdRng> {
    /// Selector with a deterministic rng.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Selector seeded from operating system entropy.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> MoveSelector<R> {
    /// Creates a selector with the default fallback probability.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            random_move_probability: DEFAULT_RANDOM_MOVE_PROBABILITY,
        }
    }

    /// Overrides the fallback probability.
    ///
    /// Values at or below 0 always search; values at or above 1 always play
    /// randomly.
    pub fn with_random_move_probability(mut self, probability: f64) -> Self {
        self.random_move_probability = probability;
        self
    }

    /// Current fallback probability.
    pub fn random_move_probability(&self) -> f64 {
        self.random_move_probability
    }

    /// Returns the square the computer should play.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::InvalidState`] if the board has no empty square.
    pub fn select_move(&mut self, board: &Board) -> Result<Position, RulesError> {
        self.choose(board).map(|choice| choice.position)
    }

    /// Like [`select_move`](Self::select_move), also reporting which branch
    /// of the policy was taken.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn choose(&mut self, board: &Board) -> Result<Choice, RulesError> {
        if board.is_full() {
            return Err(RulesError::InvalidState);
        }

        let roll: f64 = self.rng.sample(Standard);
        let choice = if roll < self.random_move_probability {
            Choice {
                position: random_move(&mut self.rng, board)?,
                strategy: Strategy::Random,
            }
        } else {
            Choice {
                position: best_move(board)?,
                strategy: Strategy::Minimax,
            }
        };

        debug!(
            position = %choice.position,
            strategy = %choice.strategy,
            "Opponent chose move"
        );
        Ok(choice)
    }
}

/// Uniformly random empty square.
///
/// # Errors
///
/// Returns [`RulesError::InvalidState`] if the board has no empty square.
pub fn random_move<R: Rng + ?Sized>(rng: &mut R, board: &Board) -> Result<Position, RulesError> {
    let available: Vec<Position> = board.empty_positions().collect();
    available
        .choose(rng)
        .copied()
        .ok_or(RulesError::InvalidState)
}

/// Minimax-optimal square for the computer.
///
/// Squares are scanned in index order and only a strictly better score
/// replaces the current pick, so ties go to the lowest index.
///
/// # Errors
///
/// Returns [`RulesError::InvalidState`] if the board has no empty square.
#[instrument(level = "debug", skip(board), fields(board = %board))]
pub fn best_move(board: &Board) -> Result<Position, RulesError> {
    let mut scratch = *board;
    let mut best: Option<(Position, Outcome)> = None;

    for pos in Position::ALL {
        if !scratch.is_empty(pos) {
            continue;
        }

        scratch.set(pos, Cell::Computer);
        let value = minimax(&mut scratch, false);
        scratch.set(pos, Cell::Empty);

        if best.is_none_or(|(_, best_value)| value > best_value) {
            best = Some((pos, value));
        }
    }
    debug_assert_eq!(&scratch, board);

    let (position, value) = best.ok_or(RulesError::InvalidState)?;
    debug!(%position, %value, "Best move found");
    Ok(position)
}
