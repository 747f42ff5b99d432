use super::*;

#[test]
fn test_startpos_black_to_move() {
    let pos = Position::startpos();
    assert_eq!(pos.side_to_move, Side::Black);
    assert_eq!(pos.legal_moves().len(), 4);
    assert!(!pos.must_pass());
    assert!(!pos.is_game_over());
    assert_eq!(pos.outcome(), None);
}

#[test]
fn test_play_hands_turn_over() {
    let mut pos = Position::startpos();
    pos.play(Move::new(2, 3)).unwrap();
    assert_eq!(pos.side_to_move, Side::White);
    assert_eq!(pos.board.count(Side::Black), 4);
    assert_eq!(pos.board.count(Side::White), 1);
}

#[test]
fn test_play_rejects_illegal_move_without_changing_state() {
    let mut pos = Position::startpos();
    assert!(pos.play(Move::new(0, 0)).is_err());
    assert_eq!(pos, Position::startpos());
}

#[test]
fn test_play_rejects_off_board_move() {
    let mut pos = Position::startpos();
    let mv = Move { row: 0, col: 9 };
    assert_eq!(pos.play(mv), Err(RulesError::OutOfBounds(mv)));
    assert_eq!(pos, Position::startpos());
}

#[test]
fn test_forced_pass() {
    // Black has nothing to flip; White can take the black discs on b1 and c1.
    let board: Board = "OXX.....
                        ........
                        ........
                        ........
                        ........
                        ........
                        ........
                        ........"
        .parse()
        .unwrap();
    let mut pos = Position::new(board, Side::Black);
    assert!(pos.legal_moves().is_empty());
    assert!(pos.must_pass());
    assert!(!pos.is_game_over());

    pos.pass();
    assert_eq!(pos.side_to_move, Side::White);
    assert_eq!(pos.legal_moves(), vec![Move::new(0, 3)]);
}

#[test]
fn test_outcome_by_disc_count() {
    let board: Board = "XXX.....
                        ........
                        ........
                        ........
                        ........
                        ........
                        ........
                        .......O"
        .parse()
        .unwrap();
    // Neither side can bracket anything: every run ends at an edge.
    let pos = Position::new(board, Side::White);
    assert!(pos.is_game_over());
    assert_eq!(pos.outcome(), Some(Outcome::Win(Side::Black)));

    let even: Board = "X.......
                       ........
                       ........
                       ........
                       ........
                       ........
                       ........
                       .......O"
        .parse()
        .unwrap();
    assert_eq!(Position::new(even, Side::Black).outcome(), Some(Outcome::Draw));
}
