//! Match runner for playing games between engines

use othello_core::{Engine, Outcome, Position, SearchLimits, Side};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::MatchError;

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth for engines
    pub depth: u8,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 3,
            alternate_colors: true,
        }
    }
}

impl MatchConfig {
    /// Create search limits based on this config
    fn search_limits(&self) -> SearchLimits {
        SearchLimits::depth(self.depth)
    }
}

/// Result of a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// The same game seen from the other seat.
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }

    /// 1 for a win, 0.5 for a draw, 0 for a loss.
    pub fn points(self) -> f64 {
        match self {
            GameResult::Win => 1.0,
            GameResult::Draw => 0.5,
            GameResult::Loss => 0.0,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            GameResult::Win => "1-0",
            GameResult::Loss => "0-1",
            GameResult::Draw => "1/2",
        }
    }
}

/// A finished game as seen from Black's side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub result: GameResult,
    pub black_discs: u32,
    pub white_discs: u32,
    /// Moves played, passes excluded
    pub moves: u32,
    pub black_passes: u32,
    pub white_passes: u32,
}

impl GameRecord {
    /// Black's discs minus White's discs at the end of the game.
    pub fn margin(&self) -> i32 {
        self.black_discs as i32 - self.white_discs as i32
    }
}

/// One game of a match, with the seat engine1 played in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedGame {
    pub engine1_black: bool,
    pub record: GameRecord,
}

impl PlayedGame {
    /// Result from engine1's perspective.
    pub fn result(&self) -> GameResult {
        if self.engine1_black {
            self.record.result
        } else {
            self.record.result.flipped()
        }
    }

    /// engine1's discs minus engine2's discs.
    pub fn margin(&self) -> i32 {
        if self.engine1_black {
            self.record.margin()
        } else {
            -self.record.margin()
        }
    }
}

/// Tally of a match from engine1's perspective, with every game in play order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    #[serde(default)]
    pub games: Vec<PlayedGame>,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a game and counts it in the tally.
    pub fn push(&mut self, game: PlayedGame) {
        match game.result() {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
        self.games.push(game);
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Fraction of points won by engine1; 0.5 before any game.
    pub fn score(&self) -> f64 {
        let total = self.total_games();
        if total == 0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total as f64
    }

    /// Net disc margin for engine1 over all games.
    pub fn disc_margin(&self) -> i32 {
        self.games.iter().map(PlayedGame::margin).sum()
    }

    /// The same match from engine2's perspective.
    pub fn reversed(&self) -> Self {
        Self {
            wins: self.losses,
            losses: self.wins,
            draws: self.draws,
            games: self
                .games
                .iter()
                .map(|g| PlayedGame {
                    engine1_black: !g.engine1_black,
                    record: g.record.clone(),
                })
                .collect(),
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(
        &self,
        engine1: &mut dyn Engine,
        engine2: &mut dyn Engine,
    ) -> Result<MatchResult, MatchError> {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            // Black moves first; alternate who gets it if configured
            let engine1_black = !self.config.alternate_colors || game_num % 2 == 0;

            let record = if engine1_black {
                self.play_game(engine1, engine2)?
            } else {
                self.play_game(engine2, engine1)?
            };
            let game = PlayedGame {
                engine1_black,
                record,
            };
            let game_result = game.result();
            let margin = game.margin();
            result.push(game);

            info!(
                game = game_num + 1,
                of = self.config.num_games,
                engine1_color = if engine1_black { "black" } else { "white" },
                outcome = game_result.symbol(),
                margin,
                wins = result.wins,
                losses = result.losses,
                draws = result.draws,
                "game finished"
            );
        }

        Ok(result)
    }

    /// Play a single game from the opening, returns result from Black's perspective
    pub fn play_game(
        &self,
        black: &mut dyn Engine,
        white: &mut dyn Engine,
    ) -> Result<GameRecord, MatchError> {
        let mut pos = Position::startpos();
        black.new_game();
        white.new_game();

        let mut moves = 0;
        let mut black_passes = 0;
        let mut white_passes = 0;

        while !pos.is_game_over() {
            if pos.must_pass() {
                debug!(side = %pos.side_to_move, "pass");
                match pos.side_to_move {
                    Side::Black => black_passes += 1,
                    Side::White => white_passes += 1,
                }
                pos.pass();
                continue;
            }

            let engine: &mut dyn Engine = match pos.side_to_move {
                Side::Black => &mut *black,
                Side::White => &mut *white,
            };

            let result = engine.search(&pos, self.config.search_limits());
            let mv = result.best_move.ok_or_else(|| MatchError::MissedMove {
                engine: engine.name().to_string(),
            })?;

            debug!(side = %pos.side_to_move, %mv, score = result.score, nodes = result.nodes, "move");
            pos.play(mv).map_err(|source| MatchError::IllegalMove {
                engine: engine.name().to_string(),
                mv,
                source,
            })?;
            moves += 1;
        }

        let result = match pos.outcome() {
            Some(Outcome::Win(Side::Black)) => GameResult::Win,
            Some(Outcome::Win(Side::White)) => GameResult::Loss,
            _ => GameResult::Draw,
        };

        Ok(GameRecord {
            result,
            black_discs: pos.board.count(Side::Black),
            white_discs: pos.board.count(Side::White),
            moves,
            black_passes,
            white_passes,
        })
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    depth: u8,
) -> Result<MatchResult, MatchError> {
    let config = MatchConfig {
        num_games,
        depth,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
