//! Terminal results of a game.

use super::types::Player;
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
///
/// A game still in play has no outcome, so callers hold `Option<Outcome>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player completed a line.
    Winner(Player),
    /// Board filled with no line completed.
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Winner: {}", player),
            Outcome::Draw => write!(f, "Draw!"),
        }
    }
}
