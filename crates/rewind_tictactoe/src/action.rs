//! First-class action types for tic-tac-toe.
//!
//! Every user interaction is one [`Action`]. Applying it to a
//! [`GameState`](super::GameState) yields a [`Transition`] that says whether
//! the state changed and, if not, why.

use super::{Outcome, Position};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A single state transition request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Action {
    /// Place the current player's mark.
    #[display("place {}", _0)]
    Place(Position),
    /// Recall the board stored at a history step.
    #[display("jump to #{}", _0)]
    JumpTo(usize),
    /// Start a new game.
    #[display("reset")]
    Reset,
}

/// Why an action left the state untouched.
///
/// These are not failures: ignoring the action is the defined behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IgnoreReason {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game already has an outcome.
    #[display("Game is already over ({})", _0)]
    GameOver(Outcome),

    /// The requested history step does not exist.
    #[display("History step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

/// Result of dispatching an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The state changed.
    Applied,
    /// The action was a no-op.
    Ignored(IgnoreReason),
}

impl Transition {
    /// Returns true if the state changed.
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied)
    }
}

/// Error returned when a token does not name an action.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized action '{}': expected a cell (0-8 or label), h<N>, or reset", token)]
pub struct ActionParseError {
    /// The rejected token.
    pub token: String,
}

impl FromStr for Action {
    type Err = ActionParseError;

    /// Parses `0`-`8` or a position label as a placement, `h<N>` or
    /// `history:<N>` as a jump, and `r` or `reset` as a reset.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let lower = token.to_lowercase();

        if lower == "r" || lower == "reset" {
            return Ok(Action::Reset);
        }

        let step = lower
            .strip_prefix("history:")
            .or_else(|| lower.strip_prefix('h'));
        if let Some(step) = step
            && let Ok(step) = step.parse::<usize>()
        {
            return Ok(Action::JumpTo(step));
        }

        Position::from_label_or_number(token)
            .map(Action::Place)
            .ok_or_else(|| ActionParseError {
                token: token.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_parse_cells() {
        assert_eq!("0".parse::<Action>(), Ok(Action::Place(Position::TopLeft)));
        assert_eq!("8".parse::<Action>(), Ok(Action::Place(Position::BottomRight)));
        assert_eq!("Center".parse::<Action>(), Ok(Action::Place(Position::Center)));
    }

    #[test]
    fn test_parse_history_and_reset() {
        assert_eq!("h3".parse::<Action>(), Ok(Action::JumpTo(3)));
        assert_eq!("history:0".parse::<Action>(), Ok(Action::JumpTo(0)));
        assert_eq!("R".parse::<Action>(), Ok(Action::Reset));
        assert_eq!("reset".parse::<Action>(), Ok(Action::Reset));
    }

    #[test]
    fn test_parse_rejects_unknown_tokens() {
        assert!("9".parse::<Action>().is_err());
        assert!("h".parse::<Action>().is_err());
        let err = "hx".parse::<Action>().unwrap_err();
        assert_eq!(err.token, "hx");
    }

    #[test]
    fn test_ignore_reason_messages() {
        assert_eq!(
            IgnoreReason::SquareOccupied(Position::Center).to_string(),
            "Square Center is already occupied"
        );
        assert_eq!(
            IgnoreReason::GameOver(Outcome::Winner(Player::O)).to_string(),
            "Game is already over (Winner: O)"
        );
    }
}
