//! Tic-tac-toe game logic with move history recall.
//!
//! [`GameState`] is the whole engine: it owns the board, the player to move,
//! the outcome, and the list of board snapshots. It changes only through
//! [`GameState::apply_move`], [`GameState::jump_to`] and
//! [`GameState::reset`] (or [`GameState::dispatch`] with an [`Action`]).
//! Invalid requests are ignored and reported as [`Transition::Ignored`].
//!
//! ```
//! use rewind_tictactoe::{GameState, Outcome, Player, Position};
//!
//! let mut game = GameState::new();
//! for pos in [
//!     Position::TopLeft,
//!     Position::Center,
//!     Position::TopCenter,
//!     Position::MiddleLeft,
//!     Position::TopRight,
//! ] {
//!     game.apply_move(pos);
//! }
//! assert_eq!(game.outcome(), Some(Outcome::Winner(Player::X)));
//! assert_eq!(game.history().len(), 6);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod types;

pub use action::{Action, ActionParseError, IgnoreReason, Transition};
pub use game::GameState;
pub use outcome::Outcome;
pub use position::Position;
pub use types::{Board, Player, Square};
