//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here reads turn or history, so
//! the outcome of any position is a function of its squares alone.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use super::{Board, Outcome};
use tracing::instrument;

/// Evaluates a board: a winner if any line is complete, a draw if the board
/// is full otherwise, `None` while play can continue.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<Outcome> {
    if let Some(winner) = check_winner(board) {
        return Some(Outcome::Winner(winner));
    }
    if is_full(board) {
        return Some(Outcome::Draw);
    }
    None
}
