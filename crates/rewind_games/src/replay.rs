//! Scripted play: apply a list of actions and report the result.

use derive_getters::Getters;
use rewind_tictactoe::{Action, GameState, Transition};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Result of a replay: the final state and how each action fared.
#[derive(Debug, Clone, Getters, Serialize)]
pub struct ReplayReport {
    /// Game after the last action.
    game: GameState,
    /// Number of actions that changed the state.
    applied: usize,
    /// Actions that were ignored, with the reason.
    ignored: Vec<(Action, String)>,
}

/// Parses each token and dispatches it in order against a fresh game.
///
/// # Errors
///
/// Returns an error naming the first token that is not an action. No action
/// is applied in that case.
#[instrument(skip(tokens))]
pub fn run_replay<S: AsRef<str>>(tokens: &[S]) -> anyhow::Result<ReplayReport> {
    let actions = tokens
        .iter()
        .map(|t| t.as_ref().parse::<Action>())
        .collect::<Result<Vec<_>, _>>()?;

    info!(count = actions.len(), "Replaying actions");
    let mut game = GameState::new();
    let mut applied = 0;
    let mut ignored = Vec::new();

    for action in actions {
        match game.dispatch(action) {
            Transition::Applied => {
                debug!(%action, "Applied");
                applied += 1;
            }
            Transition::Ignored(reason) => {
                warn!(%action, %reason, "Action ignored");
                ignored.push((action, reason.to_string()));
            }
        }
    }

    Ok(ReplayReport {
        game,
        applied,
        ignored,
    })
}

/// Renders a report as plain text: board, status, and history labels.
pub fn render_report(report: &ReplayReport) -> String {
    let game = report.game();
    let mut out = String::new();

    out.push_str(&game.board().display());
    out.push_str("\n\n");
    out.push_str(&game.status_text());
    out.push('\n');

    if game.can_start_new_game() {
        out.push_str("(Start New Game available)\n");
    }

    out.push_str("\nGame History\n");
    for (step, label) in game.history_labels().iter().enumerate() {
        out.push_str(&format!("{:>3}. {}\n", step + 1, label));
    }

    for (action, reason) in report.ignored() {
        out.push_str(&format!("ignored {}: {}\n", action, reason));
    }
    out
}
