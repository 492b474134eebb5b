//! End-to-end tests for scripted replays.

use rewind_games::rewind_tictactoe::{Outcome, Player};
use rewind_games::{render_report, run_replay};

#[test]
fn test_replay_draw() {
    let report = run_replay(&["0", "1", "2", "4", "3", "5", "7", "6", "8"]).expect("valid tokens");
    assert_eq!(report.game().outcome(), Some(Outcome::Draw));

    let text = render_report(&report);
    assert!(text.contains("Draw!"));
    assert!(text.contains(" 10. Go to move #9"));
}

#[test]
fn test_replay_rewind_then_branch_keeps_stale_entries() {
    let report = run_replay(&["center", "top-left", "bottom-right", "h1", "top-right"])
        .expect("valid tokens");

    let game = report.game();
    assert_eq!(game.history().len(), 5);
    assert_eq!(game.to_move(), Player::X);
    assert_eq!(game.status_text(), "Next Player: X");
    assert!(report.ignored().is_empty());
}

#[test]
fn test_replay_reset_mid_script() {
    let report = run_replay(&["0", "4", "1", "3", "2", "5", "reset", "8"]).expect("valid tokens");

    assert_eq!(*report.applied(), 7);
    assert_eq!(report.ignored().len(), 1);
    assert_eq!(report.game().history().len(), 2);
    assert_eq!(report.game().outcome(), None);
}

#[test]
fn test_report_serializes_to_json() {
    let report = run_replay(&["4", "4"]).expect("valid tokens");
    let json = serde_json::to_value(&report).expect("serializable");

    assert_eq!(json["applied"], 1);
    assert_eq!(json["game"]["to_move"], "O");
    assert_eq!(json["ignored"][0][1], "Square Center is already occupied");
}
