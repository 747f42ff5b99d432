use crate::{
    board::Board,
    rules::{apply_move, has_legal_move, legal_moves_into},
    types::*,
};

/// Pure perft node count.
/// Counts the leaves of the move tree from `board` down to `depth` plies. A
/// forced pass is one ply; a finished game is a leaf.
pub fn perft(board: &Board, side: Side, depth: u8) -> u64 {
    fn inner(board: &Board, side: Side, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let (buf, rest) = layers
            .split_first_mut()
            .expect("perft requires one buffer per remaining ply");

        legal_moves_into(board, side, buf);

        if buf.is_empty() {
            if has_legal_move(board, side.opponent()) {
                return inner(board, side.opponent(), depth - 1, rest);
            }
            return 1;
        }

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            let child = apply_move(board, mv, side);
            nodes += inner(&child, side.opponent(), depth - 1, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(32); depth as usize];
    inner(board, side, depth, &mut layers[..])
}
