use othello_core::{perft, Board, Side};

const FULL_PERFT_ENV: &str = "FULL_PERFT";

/// Leaf counts from the standard opening, Black to move.
const STARTPOS_PERFT: [(u8, u64); 8] = [
    (1, 4),
    (2, 12),
    (3, 56),
    (4, 244),
    (5, 1_396),
    (6, 8_200),
    (7, 55_092),
    (8, 390_216),
];

#[test]
fn perft_from_startpos() {
    let full = std::env::var(FULL_PERFT_ENV).is_ok();
    let board = Board::startpos();
    for (depth, expected) in STARTPOS_PERFT {
        if depth > 6 && !full {
            continue;
        }
        let nodes = perft(&board, Side::Black, depth);
        assert_eq!(nodes, expected, "perft({depth}) mismatch");
    }
}

#[test]
fn perft_depth_zero_is_one() {
    assert_eq!(perft(&Board::startpos(), Side::Black, 0), 1);
    assert_eq!(perft(&Board::empty(), Side::White, 0), 1);
}

#[test]
fn perft_finished_game_is_a_single_leaf() {
    // No side can move on an empty board.
    assert_eq!(perft(&Board::empty(), Side::Black, 5), 1);
}

#[test]
fn perft_is_colour_symmetric_from_startpos() {
    // The opening layout is symmetric under a colour swap plus reflection,
    // so both sides see the same tree size.
    for depth in 1..=4 {
        assert_eq!(
            perft(&Board::startpos(), Side::Black, depth),
            perft(&Board::startpos(), Side::White, depth)
        );
    }
}
