//! Tests for game state transitions and history recall.

use rewind_tictactoe::{
    Action, Board, GameState, IgnoreReason, Outcome, Player, Position, Square, Transition, rules,
};

fn at(index: usize) -> Position {
    Position::from_index(index).expect("index in range")
}

fn play(game: &mut GameState, cells: &[usize]) {
    for &cell in cells {
        assert_eq!(game.apply_move(at(cell)), Transition::Applied, "cell {}", cell);
    }
}

#[test]
fn test_top_row_win_then_moves_ignored() {
    let mut game = GameState::new();
    play(&mut game, &[0, 4, 1, 3, 2]);

    assert_eq!(game.outcome(), Some(Outcome::Winner(Player::X)));
    for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
        assert_eq!(game.board().get(pos), Square::Occupied(Player::X));
    }

    let before = game.clone();
    for pos in Position::valid_moves(game.board()) {
        assert_eq!(
            game.apply_move(pos),
            Transition::Ignored(IgnoreReason::GameOver(Outcome::Winner(Player::X)))
        );
    }
    assert_eq!(game, before);
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / X O O / O X X
    let mut game = GameState::new();
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(game.outcome(), Some(Outcome::Draw));
    assert_eq!(game.status_text(), "Draw!");
    assert!(game.can_start_new_game());
}

#[test]
fn test_history_grows_once_per_successful_move() {
    let mut game = GameState::new();
    let attempts = [4, 4, 0, 0, 8, 4, 2];
    let mut applied = 0;
    for cell in attempts {
        if game.apply_move(at(cell)).is_applied() {
            applied += 1;
        }
        assert_eq!(game.history().len(), applied + 1);
    }
    assert_eq!(applied, 4);
}

#[test]
fn test_turn_alternates_from_x() {
    let mut game = GameState::new();
    let mut expected = Player::X;
    for cell in [4, 0, 8, 2, 6] {
        assert_eq!(game.to_move(), expected);
        play(&mut game, &[cell]);
        expected = expected.opponent();
    }
}

#[test]
fn test_jump_after_three_moves() {
    let mut game = GameState::new();
    play(&mut game, &[4, 0, 8]);
    assert_eq!(game.history().len(), 4);

    assert_eq!(game.jump_to(1), Transition::Applied);
    assert_eq!(game.board(), &game.history()[1]);
    assert_eq!(game.to_move(), Player::O);
    assert_eq!(game.outcome(), None);
    assert_eq!(game.history().len(), 4);
}

#[test]
fn test_jump_to_even_step_gives_x() {
    let mut game = GameState::new();
    play(&mut game, &[4, 0, 8]);
    game.jump_to(2);
    assert_eq!(game.to_move(), Player::X);
    game.jump_to(0);
    assert_eq!(game.to_move(), Player::X);
    assert_eq!(game.board(), &Board::new());
}

#[test]
fn test_jump_to_winning_snapshot_reopens_play() {
    let mut game = GameState::new();
    play(&mut game, &[0, 4, 1, 3, 2]);

    game.jump_to(5);
    assert_eq!(game.outcome(), None);
    assert_eq!(rules::evaluate(game.board()), Some(Outcome::Winner(Player::X)));
    // Step 5 is odd, so O moves on the recalled winning board.
    assert_eq!(game.to_move(), Player::O);
    assert_eq!(game.status_text(), "Next Player: O");

    assert_eq!(game.apply_move(Position::BottomRight), Transition::Applied);
    assert_eq!(game.outcome(), Some(Outcome::Winner(Player::X)));
    assert_eq!(game.history().len(), 7);
}

#[test]
fn test_moves_after_jump_append_without_truncating() {
    let mut game = GameState::new();
    play(&mut game, &[4, 0, 8]);
    let stale = game.history().to_vec();

    game.jump_to(1);
    play(&mut game, &[2]);

    assert_eq!(game.history().len(), 5);
    assert_eq!(&game.history()[..4], stale.as_slice());
    assert_eq!(game.history().last(), Some(game.board()));
    assert_eq!(game.board().get(Position::Center), Square::Occupied(Player::X));
    assert_eq!(game.board().get(Position::TopRight), Square::Occupied(Player::O));
    assert!(game.board().is_empty(Position::TopLeft));
    assert_eq!(game.history_labels().last().map(String::as_str), Some("Go to move #4"));
}

#[test]
fn test_reset_from_any_state() {
    let mut finished = GameState::new();
    play(&mut finished, &[0, 4, 1, 3, 2]);

    let mut recalled = GameState::new();
    play(&mut recalled, &[4, 0, 8]);
    recalled.jump_to(2);

    for mut game in [GameState::new(), finished, recalled] {
        game.reset();
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.outcome(), None);
        assert_eq!(game.history(), &[Board::new()]);
    }
}

#[test]
fn test_new_game_control_offered_for_full_recalled_board() {
    let mut game = GameState::new();
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    game.jump_to(9);

    assert_eq!(game.outcome(), None);
    assert!(game.can_start_new_game());
    assert!(game.playable_positions().is_empty());
}

#[test]
fn test_dispatch_routes_actions() {
    let mut game = GameState::new();
    let actions: Vec<Action> = ["4", "0", "h1", "reset", "center"]
        .iter()
        .map(|t| t.parse().expect("valid action"))
        .collect();

    let transitions: Vec<Transition> = actions.into_iter().map(|a| game.dispatch(a)).collect();
    assert!(transitions.iter().all(Transition::is_applied));
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.to_move(), Player::O);
}

#[test]
fn test_snapshot_serializes_with_history() {
    let mut game = GameState::new();
    play(&mut game, &[4]);

    let json = serde_json::to_value(&game).expect("serializable");
    assert_eq!(json["to_move"], "O");
    assert_eq!(json["outcome"], serde_json::Value::Null);
    assert_eq!(json["history"].as_array().map(Vec::len), Some(2));
}
