//! Anchored history invariant: history always starts from the empty board.

use super::Invariant;
use crate::{Board, GameState};

/// Invariant: history is non-empty and its first entry is the empty board.
pub struct AnchoredHistoryInvariant;

impl Invariant<GameState> for AnchoredHistoryInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History begins with the empty board"
    }
}
