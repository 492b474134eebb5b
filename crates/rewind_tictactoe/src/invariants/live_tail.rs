//! Live tail invariant: the live board is the newest history entry.

use super::Invariant;
use crate::GameState;

/// Invariant: the last history entry equals the live board.
///
/// Holds after every move and reset. A jump to an earlier step breaks it
/// until the next move appends the live board again.
pub struct LiveTailInvariant;

impl Invariant<GameState> for LiveTailInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().last() == Some(game.board())
    }

    fn description() -> &'static str {
        "Last history entry matches the live board"
    }
}
