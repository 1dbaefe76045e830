use tictacargo::{
    apply_move, go_to_move, idx_to_rc, rc_to_idx, status, GameState, GameStatus, HistoryError,
    Player, Snapshot,
};

fn played(cells: &[u8]) -> GameState {
    let mut state = GameState::new();
    for &cell in cells {
        state = apply_move(&state, cell).expect("apply_move");
    }
    state
}

#[test]
fn jump_restores_the_exact_recorded_snapshot() {
    let state = played(&[4, 0, 8, 2]);
    let recorded: Vec<Snapshot> = state.history().to_vec();

    let back = go_to_move(&state, 2).expect("go_to_move");
    assert_eq!(back.history().len(), 3);
    assert_eq!(back.current(), &recorded[2]);
    assert_eq!(back.current().last_move, Some(8));
    assert_eq!(back.history(), &recorded[..3]);
}

#[test]
fn jump_to_zero_is_the_empty_board() {
    let state = played(&[4, 0, 8, 2, 6]);
    let back = go_to_move(&state, 0).expect("go_to_move");
    assert_eq!(back, GameState::new());
    assert!(back.current().board.cells().iter().all(Option::is_none));
    assert_eq!(back.current().last_move, None);
}

#[test]
fn turn_indicator_recomputes_after_jump() {
    let state = played(&[4, 0, 8]);
    assert_eq!(state.next_player(), Player::O);

    let back = go_to_move(&state, 2).expect("go_to_move");
    assert_eq!(back.next_player(), Player::X);

    let back = go_to_move(&state, 1).expect("go_to_move");
    assert_eq!(back.next_player(), Player::O);
}

#[test]
fn new_move_after_jump_discards_the_old_future() {
    let state = played(&[4, 0, 8, 2, 6]);
    assert!(matches!(status(&state), GameStatus::Won { .. }));

    let back = go_to_move(&state, 2).expect("go_to_move");
    let branched = apply_move(&back, 1).expect("apply_move");

    assert_eq!(branched.history().len(), 4);
    assert_eq!(branched.current().last_move, Some(1));
    assert_eq!(status(&branched), GameStatus::InProgress { next: Player::X });
}

#[test]
fn jump_backward_from_a_won_game_reopens_play() {
    let state = played(&[4, 0, 8, 2, 6]);
    let back = go_to_move(&state, 4).expect("go_to_move");
    assert_eq!(status(&back), GameStatus::InProgress { next: Player::X });
    assert!(!back.is_terminal());
}

#[test]
fn out_of_range_jump_fails_loudly() {
    let state = played(&[4, 0]);
    let err = go_to_move(&state, 3).unwrap_err();
    assert_eq!(
        err,
        HistoryError::OutOfRange {
            requested: 3,
            len: 3,
        }
    );

    // Jumping to the latest move is allowed and is a no-op
    let same = go_to_move(&state, 2).expect("go_to_move");
    assert_eq!(same, state);
}

#[test]
fn move_labels_carry_coordinates() {
    let state = played(&[4, 0, 7]);
    assert_eq!(state.move_label(0).as_deref(), Some("Go to the start"));
    assert_eq!(state.move_label(1).as_deref(), Some("Go to move #1 (2, 2)"));
    assert_eq!(state.move_label(2).as_deref(), Some("Go to move #2 (1, 1)"));
    assert_eq!(state.move_label(3).as_deref(), Some("Go to move #3 (3, 2)"));
    assert_eq!(state.move_label(4), None);

    assert_eq!(
        state.move_labels(),
        vec![
            "Go to the start".to_string(),
            "Go to move #1 (2, 2)".to_string(),
            "Go to move #2 (1, 1)".to_string(),
            "Go to move #3 (3, 2)".to_string(),
        ]
    );
}

#[test]
fn index_helpers_agree_on_label_coordinates() {
    for idx in 0u8..9 {
        let (r, c) = idx_to_rc(idx);
        assert_eq!(rc_to_idx(r, c), Some(idx));
    }
    assert_eq!(rc_to_idx(3, 0), None);
    assert_eq!(rc_to_idx(0, 3), None);
}

#[test]
fn labels_shrink_with_truncation() {
    let state = played(&[4, 0, 7]);
    let back = go_to_move(&state, 1).expect("go_to_move");
    assert_eq!(
        back.move_labels(),
        vec!["Go to the start".to_string(), "Go to move #1 (2, 2)".to_string()]
    );
}
