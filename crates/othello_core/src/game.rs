//! Game driver: a board plus the side to move, with pass and game-over handling.
//!
//! The search never uses this; it is what match runners and front ends hold
//! between calls to an engine.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::RulesError;
use crate::rules::{has_legal_move, legal_moves, try_apply_move};
use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win(Side),
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub board: Board,
    pub side_to_move: Side,
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    /// Standard opening layout with Black to move.
    pub fn startpos() -> Self {
        Position {
            board: Board::startpos(),
            side_to_move: Side::Black,
        }
    }

    pub fn new(board: Board, side_to_move: Side) -> Self {
        Position {
            board,
            side_to_move,
        }
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.board, self.side_to_move)
    }

    /// The side to move has nothing to play but the opponent does.
    pub fn must_pass(&self) -> bool {
        !has_legal_move(&self.board, self.side_to_move)
            && has_legal_move(&self.board, self.side_to_move.opponent())
    }

    /// Neither side can move (this includes a full board).
    pub fn is_game_over(&self) -> bool {
        !has_legal_move(&self.board, self.side_to_move)
            && !has_legal_move(&self.board, self.side_to_move.opponent())
    }

    /// Plays `mv` for the side to move and hands the turn over.
    pub fn play(&mut self, mv: Move) -> Result<(), RulesError> {
        self.board = try_apply_move(&self.board, mv, self.side_to_move)?;
        self.side_to_move = self.side_to_move.opponent();
        Ok(())
    }

    /// Hands the turn over without placing a disc.
    pub fn pass(&mut self) {
        self.side_to_move = self.side_to_move.opponent();
    }

    /// Disc-count result, or `None` while either side can still move.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_game_over() {
            return None;
        }
        let black = self.board.count(Side::Black);
        let white = self.board.count(Side::White);
        Some(match black.cmp(&white) {
            std::cmp::Ordering::Greater => Outcome::Win(Side::Black),
            std::cmp::Ordering::Less => Outcome::Win(Side::White),
            std::cmp::Ordering::Equal => Outcome::Draw,
        })
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
