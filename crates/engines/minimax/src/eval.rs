//! Static evaluation: positional weights, edge-ray stability, and mobility.

use othello_core::{in_bounds, legal_moves, Board, Side, SIZE};

/// Per-square weights. Corners are prized, the squares touching them are
/// poison, edges are worth a little, the centre is nearly neutral.
pub const POSITION_WEIGHTS: [[i32; SIZE]; SIZE] = [
    [100, -20, 10, 5, 5, 10, -20, 100],
    [-20, -50, 1, 1, 1, 1, -50, -20],
    [10, 1, 3, 2, 2, 3, 1, 10],
    [5, 1, 2, 1, 1, 2, 1, 5],
    [5, 1, 2, 1, 1, 2, 1, 5],
    [10, 1, 3, 2, 2, 3, 1, 10],
    [-20, -50, 1, 1, 1, 1, -50, -20],
    [100, -20, 10, 5, 5, 10, -20, 100],
];

/// Score for each stable disc.
pub const STABILITY_BONUS: i32 = 5;

/// Rays checked for stability: orthogonal only.
const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Evaluates `board` from `side`'s perspective.
///
/// Returns the sum of three terms, each already netted against the opponent:
/// - positional weight of owned squares
/// - stability bonus
/// - mobility (legal move count difference)
pub fn evaluate(board: &Board, side: Side) -> i32 {
    positional(board, side) + stability(board, side) + mobility(board, side)
}

/// Weight sum of `side`'s discs minus the opponent's.
pub fn positional(board: &Board, side: Side) -> i32 {
    board
        .cells()
        .filter_map(|(r, c, cell)| {
            let owner = cell.side()?;
            let w = POSITION_WEIGHTS[r][c];
            Some(if owner == side { w } else { -w })
        })
        .sum()
}

/// Stable-disc bonus for `side` minus the opponent's.
pub fn stability(board: &Board, side: Side) -> i32 {
    board
        .cells()
        .filter_map(|(r, c, cell)| {
            let owner = cell.side()?;
            if !is_stable(board, r, c) {
                return None;
            }
            Some(if owner == side {
                STABILITY_BONUS
            } else {
                -STABILITY_BONUS
            })
        })
        .sum()
}

/// Legal move count for `side` minus the opponent's.
pub fn mobility(board: &Board, side: Side) -> i32 {
    legal_moves(board, side).len() as i32 - legal_moves(board, side.opponent()).len() as i32
}

/// A disc is stable when at least one orthogonal ray, from the disc itself to
/// the edge, holds only discs of its owner. Empty squares are never stable.
///
/// This is a cheap proxy: diagonals are ignored and a ray broken by the
/// opponent counts as unstable even when it could never be flipped.
pub fn is_stable(board: &Board, row: usize, col: usize) -> bool {
    let Some(owner) = board.get(row, col).side() else {
        return false;
    };

    ORTHOGONAL.iter().any(|&(dr, dc)| {
        let (mut r, mut c) = (row as i8, col as i8);
        while in_bounds(r, c) {
            if !board.get(r as usize, c as usize).is(owner) {
                return false;
            }
            r += dr;
            c += dc;
        }
        true
    })
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
