//! Outcome consistency invariant: a stored outcome describes the live board.

use super::Invariant;
use crate::{GameState, rules};

/// Invariant: when an outcome is stored it equals the evaluation of the live board.
///
/// A missing outcome is always consistent: recalling a finished board
/// clears the outcome on purpose.
pub struct ConsistentOutcomeInvariant;

impl Invariant<GameState> for ConsistentOutcomeInvariant {
    fn holds(game: &GameState) -> bool {
        match game.outcome() {
            Some(outcome) => rules::evaluate(game.board()) == Some(outcome),
            None => true,
        }
    }

    fn description() -> &'static str {
        "Stored outcome matches the live board"
    }
}
