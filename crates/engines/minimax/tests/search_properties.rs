//! Alpha-beta must return exactly what a full minimax returns.

use minimax_engine::{evaluate, pick_best_move, pick_best_move_parallel, select_move};
use othello_core::{apply_move, legal_moves, Board, Move, Position, Side};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Unpruned minimax with the same leaf rule and tie-break as the engine.
fn exhaustive(board: &Board, depth: u8, maximizing: bool, root: Side) -> (i32, Option<Move>) {
    let mover = if maximizing { root } else { root.opponent() };
    let moves = legal_moves(board, mover);
    if depth == 0 || moves.is_empty() {
        return (evaluate(board, root), None);
    }

    let mut best: Option<(i32, Move)> = None;
    for mv in moves {
        let (score, _) = exhaustive(&apply_move(board, mv, mover), depth - 1, !maximizing, root);
        let better = match best {
            None => true,
            Some((s, _)) if maximizing => score > s,
            Some((s, _)) => score < s,
        };
        if better {
            best = Some((score, mv));
        }
    }
    let (score, mv) = best.expect("moves were non-empty");
    (score, Some(mv))
}

/// A position reached by `plies` random moves from the opening.
fn random_position(seed: u64) -> Position {
    let mut rng = StdRng::seed_from_u64(seed);
    let plies = rng.gen_range(0..50);
    let mut pos = Position::startpos();
    for _ in 0..plies {
        if pos.is_game_over() {
            break;
        }
        match pos.legal_moves().choose(&mut rng) {
            Some(&mv) => pos.play(mv).unwrap(),
            None => pos.pass(),
        }
    }
    pos
}

#[test]
fn pruned_search_equals_exhaustive_minimax() {
    (0..96u64).into_par_iter().for_each(|seed| {
        let pos = random_position(seed);
        for depth in 0..=3 {
            for side in Side::ALL {
                let mut nodes = 0;
                let pruned = pick_best_move(&pos.board, side, depth, &mut nodes);
                let full = exhaustive(&pos.board, depth, true, side);
                assert_eq!(pruned, full, "seed {seed} depth {depth} side {side}\n{}", pos.board);
            }
        }
    });
}

#[test]
fn pruned_search_equals_exhaustive_minimax_depth_four() {
    (1000..1012u64).into_par_iter().for_each(|seed| {
        let pos = random_position(seed);
        let side = pos.side_to_move;
        let mut nodes = 0;
        assert_eq!(
            pick_best_move(&pos.board, side, 4, &mut nodes),
            exhaustive(&pos.board, 4, true, side),
            "seed {seed}\n{}",
            pos.board
        );
    });
}

#[test]
fn parallel_root_split_equals_sequential() {
    (0..32u64).into_par_iter().for_each(|seed| {
        let pos = random_position(seed);
        let side = pos.side_to_move;
        let mut nodes = 0;
        let (score, mv) = pick_best_move(&pos.board, side, 3, &mut nodes);
        let (p_score, p_mv, _) = pick_best_move_parallel(&pos.board, side, 3);
        assert_eq!((score, mv), (p_score, p_mv), "seed {seed}");
    });
}

#[test]
fn selected_move_is_legal_or_none_exactly_when_stuck() {
    for seed in 0..48u64 {
        let pos = random_position(seed);
        for side in Side::ALL {
            let moves = legal_moves(&pos.board, side);
            match select_move(&pos.board, side) {
                Some(mv) => assert!(moves.contains(&mv)),
                None => assert!(moves.is_empty()),
            }
        }
    }
}

#[test]
fn select_move_is_deterministic() {
    for seed in 0..16u64 {
        let pos = random_position(seed);
        let first = select_move(&pos.board, pos.side_to_move);
        for _ in 0..3 {
            assert_eq!(select_move(&pos.board, pos.side_to_move), first);
        }
    }
}

#[test]
fn pruning_visits_no_more_nodes_than_full_tree() {
    fn count(board: &Board, depth: u8, mover: Side) -> u64 {
        let moves = legal_moves(board, mover);
        if depth == 0 || moves.is_empty() {
            return 1;
        }
        1 + moves
            .iter()
            .map(|&mv| count(&apply_move(board, mv, mover), depth - 1, mover.opponent()))
            .sum::<u64>()
    }

    let pos = random_position(7);
    let mut nodes = 0;
    pick_best_move(&pos.board, pos.side_to_move, 3, &mut nodes);
    assert!(nodes <= count(&pos.board, 3, pos.side_to_move));
}
