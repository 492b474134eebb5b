//! Game state with move history recall.

use super::action::{Action, IgnoreReason, Transition};
use super::invariants::{GameInvariants, InvariantSet};
use super::rules;
use super::{Board, Outcome, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Complete state of one tic-tac-toe session.
///
/// Holds the live board, the player to move, the outcome, and every board
/// snapshot since the last reset. `history[0]` is always the empty board.
///
/// Jumping back through history replaces the live board but never truncates
/// the history: moves made after a jump append to the end of the list, so
/// entries after the recalled step stay visible even though normal play can
/// no longer reach them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    to_move: Player,
    outcome: Option<Outcome>,
    history: Vec<Board>,
}

impl GameState {
    /// Creates a game at the start position.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            outcome: None,
            history: vec![Board::new()],
        }
    }

    /// Returns the live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark the next placement uses.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the outcome, or `None` while the game is live.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns every board snapshot since the last reset.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Ignored if the square is occupied or the game has an outcome. On
    /// success the new board is appended to history and the outcome is
    /// re-evaluated; the turn passes only if the game goes on.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply_move(&mut self, pos: Position) -> Transition {
        if let Some(outcome) = self.outcome {
            debug!(%outcome, "Ignoring move after game end");
            return Transition::Ignored(IgnoreReason::GameOver(outcome));
        }
        if !self.board.is_empty(pos) {
            debug!("Ignoring move on occupied square");
            return Transition::Ignored(IgnoreReason::SquareOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(self.to_move));
        self.history.push(self.board);
        self.outcome = rules::evaluate(&self.board);

        match self.outcome {
            Some(outcome) => info!(%outcome, moves = self.history.len() - 1, "Game finished"),
            None => self.to_move = self.to_move.opponent(),
        }

        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "game invariants violated after move"
        );
        Transition::Applied
    }

    /// Recalls the board stored at `step`.
    ///
    /// The player to move follows step parity (X on even steps) and the
    /// outcome is cleared, even when the recalled board is a finished one,
    /// so the position can be played again. History is kept as is.
    #[instrument(skip(self), fields(history_len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> Transition {
        let Some(board) = self.history.get(step).copied() else {
            debug!("Ignoring jump past end of history");
            return Transition::Ignored(IgnoreReason::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        };

        self.board = board;
        self.to_move = Player::for_step(step);
        self.outcome = None;
        debug!(to_move = %self.to_move, "Recalled history step");
        Transition::Applied
    }

    /// Returns to the start position, discarding history.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("Game reset");
        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "game invariants violated after reset"
        );
    }

    /// Routes an action to the matching operation.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) -> Transition {
        match action {
            Action::Place(pos) => self.apply_move(pos),
            Action::JumpTo(step) => self.jump_to(step),
            Action::Reset => {
                self.reset();
                Transition::Applied
            }
        }
    }

    /// Status line: the winner, a draw, or whose turn it is.
    pub fn status_text(&self) -> String {
        match self.outcome {
            Some(outcome) => outcome.to_string(),
            None => format!("Next Player: {}", self.to_move),
        }
    }

    /// Label for the history entry at `step`.
    pub fn history_label(step: usize) -> String {
        if step == 0 {
            "Go to move #Start".to_string()
        } else {
            format!("Go to move #{}", step)
        }
    }

    /// Labels for every history entry, in order.
    pub fn history_labels(&self) -> Vec<String> {
        (0..self.history.len()).map(Self::history_label).collect()
    }

    /// Whether the "Start New Game" control should be offered.
    ///
    /// True once the game has an outcome, or when a recalled board is full.
    pub fn can_start_new_game(&self) -> bool {
        self.outcome.is_some() || self.board.is_full()
    }

    /// Empty squares on the live board, or none once the game has an outcome.
    pub fn playable_positions(&self) -> Vec<Position> {
        if self.outcome.is_some() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
