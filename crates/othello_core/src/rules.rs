//! Move legality, enumeration, and application.
//!
//! Every function here is pure: boards go in by reference and new boards come
//! out. Enumeration order is row-major, which the search relies on for
//! tie-breaking.

use crate::board::Board;
use crate::error::RulesError;
use crate::types::*;

/// The eight unit directions, axis first then diagonals.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Length of the opponent run starting next to `(row, col)` in direction
/// `(dr, dc)`, if that run is non-empty and closed by a `side` disc.
fn bracketed_run(board: &Board, side: Side, row: usize, col: usize, dr: i8, dc: i8) -> Option<usize> {
    let opponent = side.opponent();
    let mut r = row as i8 + dr;
    let mut c = col as i8 + dc;
    let mut run = 0;

    while in_bounds(r, c) && board.get(r as usize, c as usize).is(opponent) {
        r += dr;
        c += dc;
        run += 1;
    }

    if run > 0 && in_bounds(r, c) && board.get(r as usize, c as usize).is(side) {
        Some(run)
    } else {
        None
    }
}

/// Returns true if `side` may place a disc at `(row, col)`.
///
/// Fails closed on occupied cells and on coordinates off the board.
pub fn is_legal_move(board: &Board, side: Side, row: usize, col: usize) -> bool {
    if row >= SIZE || col >= SIZE {
        return false;
    }
    if !board.get(row, col).is_empty() {
        return false;
    }

    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| bracketed_run(board, side, row, col, dr, dc).is_some())
}

/// Generate all legal moves in row-major order, returning a freshly allocated vector.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    legal_moves_into(board, side, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(board: &Board, side: Side, out: &mut Vec<Move>) {
    out.clear();
    for row in 0..SIZE {
        for col in 0..SIZE {
            if is_legal_move(board, side, row, col) {
                out.push(Move::new(row as u8, col as u8));
            }
        }
    }
}

/// True when `side` has at least one legal move.
pub fn has_legal_move(board: &Board, side: Side) -> bool {
    (0..SIZE).any(|row| (0..SIZE).any(|col| is_legal_move(board, side, row, col)))
}

/// Places `side` at `mv` and flips every bracketed run, returning the new board.
///
/// `mv` must be legal for `side`; the search only calls this with moves it
/// has just enumerated. Use [`try_apply_move`] for unvalidated input.
pub fn apply_move(board: &Board, mv: Move, side: Side) -> Board {
    debug_assert!(
        is_legal_move(board, side, mv.row as usize, mv.col as usize),
        "apply_move called with illegal move {mv} for {side}"
    );

    let (row, col) = (mv.row as usize, mv.col as usize);
    let disc = Cell::from(side);
    let mut next = *board;
    next.set(row, col, disc);

    // Runs are measured on the input board so each direction stands alone.
    for (dr, dc) in DIRECTIONS {
        if let Some(run) = bracketed_run(board, side, row, col, dr, dc) {
            for step in 1..=run as i8 {
                let r = (row as i8 + dr * step) as usize;
                let c = (col as i8 + dc * step) as usize;
                next.set(r, c, disc);
            }
        }
    }
    next
}

/// Checked form of [`apply_move`] for callers holding unvalidated moves.
pub fn try_apply_move(board: &Board, mv: Move, side: Side) -> Result<Board, RulesError> {
    if !mv.is_on_board() {
        return Err(RulesError::OutOfBounds(mv));
    }
    if !board.at(mv).is_empty() {
        return Err(RulesError::Occupied(mv));
    }
    if !is_legal_move(board, side, mv.row as usize, mv.col as usize) {
        return Err(RulesError::NoFlips(mv));
    }
    Ok(apply_move(board, mv, side))
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
