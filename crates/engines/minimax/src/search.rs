//! Minimax search with alpha-beta pruning

use othello_core::{apply_move, legal_moves, Board, Move, Side};
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::eval::evaluate;

/// Depth used by [`select_move`].
pub const DEFAULT_DEPTH: u8 = 3;

/// Initial alpha. Evaluations are bounded far inside these limits.
pub const NEG_INF: i32 = i32::MIN;
/// Initial beta.
pub const POS_INF: i32 = i32::MAX;

/// Picks a move for `side` with a fixed-depth search.
///
/// Returns `None` when `side` has no legal move; the caller should treat
/// that as a pass.
pub fn select_move(board: &Board, side: Side) -> Option<Move> {
    let mut nodes = 0;
    pick_best_move(board, side, DEFAULT_DEPTH, &mut nodes).1
}

/// Searches the position and returns the best score with its move.
///
/// # Arguments
/// * `board` - The position to search
/// * `side` - The side to move; every score is from its perspective
/// * `depth` - Search depth in plies
/// * `nodes` - Counter for nodes searched (for statistics)
pub fn pick_best_move(board: &Board, side: Side, depth: u8, nodes: &mut u64) -> (i32, Option<Move>) {
    let (score, best) = minimax(board, depth, NEG_INF, POS_INF, true, side, nodes);
    debug!(%side, depth, score, best = ?best.map(|m| m.to_string()), nodes = *nodes, "search finished");
    (score, best)
}

/// Recursive minimax with alpha-beta pruning.
///
/// Scores are always from `root`'s perspective: the maximizing ply moves
/// `root`, the minimizing ply moves its opponent. A ply where the side to
/// move has no legal move is a leaf, as is depth zero.
///
/// Ties keep the earliest move in row-major order.
pub fn minimax(
    board: &Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    root: Side,
    nodes: &mut u64,
) -> (i32, Option<Move>) {
    *nodes += 1;

    let mover = if maximizing { root } else { root.opponent() };
    let moves = legal_moves(board, mover);
    if depth == 0 || moves.is_empty() {
        return (evaluate(board, root), None);
    }

    let mut best_move = None;
    if maximizing {
        let mut best = NEG_INF;
        for mv in moves {
            let child = apply_move(board, mv, mover);
            let (score, _) = minimax(&child, depth - 1, alpha, beta, false, root, nodes);
            if score > best {
                best = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
            if beta <= alpha {
                break; // Beta cutoff
            }
        }
        (best, best_move)
    } else {
        let mut best = POS_INF;
        for mv in moves {
            let child = apply_move(board, mv, mover);
            let (score, _) = minimax(&child, depth - 1, alpha, beta, true, root, nodes);
            if score < best {
                best = score;
                best_move = Some(mv);
            }
            beta = beta.min(score);
            if beta <= alpha {
                break; // Alpha cutoff
            }
        }
        (best, best_move)
    }
}

/// Root-split variant of [`pick_best_move`]: every root move is searched
/// with a full window on the rayon pool.
///
/// Returns the same score and move as the sequential search, plus the total
/// node count. Only the node count differs, since no root move inherits a
/// narrowed window from its siblings.
pub fn pick_best_move_parallel(board: &Board, side: Side, depth: u8) -> (i32, Option<Move>, u64) {
    let moves = legal_moves(board, side);
    if depth == 0 || moves.is_empty() {
        return (evaluate(board, side), None, 1);
    }

    let scored: Vec<(Move, i32, u64)> = moves
        .par_iter()
        .map(|&mv| {
            let mut nodes = 0;
            let child = apply_move(board, mv, side);
            let (score, _) = minimax(&child, depth - 1, NEG_INF, POS_INF, false, side, &mut nodes);
            trace!(%mv, score, nodes, "root move searched");
            (mv, score, nodes)
        })
        .collect();

    // Collected in enumeration order, so a strict comparison keeps the earliest.
    let mut total = 1;
    let mut best: Option<(Move, i32)> = None;
    for (mv, score, nodes) in scored {
        total += nodes;
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((mv, score));
        }
    }

    let Some((mv, score)) = best else {
        return (evaluate(board, side), None, total);
    };
    debug!(%side, depth, score, best = %mv, nodes = total, "parallel search finished");
    (score, Some(mv), total)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
