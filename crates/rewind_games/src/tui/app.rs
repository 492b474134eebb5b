//! Application state and key bindings.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use rewind_tictactoe::{Action, GameState, Position, Transition};
use tracing::{debug, instrument};

use super::input::{digit_position, move_cursor};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 grid.
    #[default]
    Board,
    /// The move history list.
    History,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
///
/// Owns the only [`GameState`]; every key is turned into at most one
/// [`Action`] before the next redraw.
#[derive(Debug, Getters)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    history_selected: usize,
    show_cell_numbers: bool,
    last_ignored: Option<String>,
}

impl App {
    /// Creates a new application at the start of a game.
    pub fn new(show_cell_numbers: bool) -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            history_selected: 0,
            show_cell_numbers,
            last_ignored: None,
        }
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppCommand::Quit,
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                return AppCommand::Continue;
            }
            KeyCode::Char('n') => {
                if self.game.can_start_new_game() {
                    self.apply(Action::Reset);
                } else {
                    debug!("New game not offered yet");
                }
                return AppCommand::Continue;
            }
            _ => {}
        }

        if let Some(pos) = digit_position(key.code) {
            self.cursor = pos;
            self.apply(Action::Place(pos));
            return AppCommand::Continue;
        }

        match self.focus {
            Focus::Board => self.handle_board_key(key.code),
            Focus::History => self.handle_history_key(key.code),
        }
        AppCommand::Continue
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.apply(Action::Place(self.cursor)),
            other => self.cursor = move_cursor(self.cursor, other),
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        let last = self.game.history().len().saturating_sub(1);
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.history_selected = self.history_selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.history_selected = (self.history_selected + 1).min(last);
            }
            KeyCode::Home => self.history_selected = 0,
            KeyCode::End => self.history_selected = last,
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.apply(Action::JumpTo(self.history_selected));
            }
            _ => {}
        }
    }

    /// Dispatches an action and keeps the history selection in range.
    fn apply(&mut self, action: Action) {
        match self.game.dispatch(action) {
            Transition::Applied => {
                debug!(%action, "Action applied");
                self.last_ignored = None;
                let last = self.game.history().len().saturating_sub(1);
                match action {
                    Action::JumpTo(step) => self.history_selected = step,
                    Action::Place(_) | Action::Reset => self.history_selected = last,
                }
            }
            Transition::Ignored(reason) => {
                debug!(%action, %reason, "Action ignored");
                self.last_ignored = Some(reason.to_string());
            }
        }
    }
}
