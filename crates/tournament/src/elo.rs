//! Per-game Elo ratings for a tournament run.
//!
//! Every finished game moves both ratings. A 33-31 win and a 64-0 wipe-out
//! both count as a win, but the update grows with the final disc margin, up
//! to twice `K_FACTOR` for a wipe-out. Ratings live only as long as the
//! tracker.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::match_runner::{GameRecord, MatchResult};

/// Rating an engine starts from
pub const INITIAL_RATING: f64 = 1500.0;

/// Update size for a game decided by a single disc
pub const K_FACTOR: f64 = 32.0;

/// Margin of a wipe-out on a full board
const FULL_MARGIN: f64 = 64.0;

/// Expected points for a player rated `rating` against `opponent`.
pub fn expected_score(rating: f64, opponent: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((opponent - rating) / 400.0))
}

/// K for one game, scaled by the final disc margin.
pub fn game_k(game: &GameRecord) -> f64 {
    K_FACTOR * (1.0 + game.margin().unsigned_abs() as f64 / FULL_MARGIN)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub elo: f64,
    pub games: u32,
    /// Own discs minus opponent discs, summed over rated games
    pub disc_balance: i64,
    /// Turns this engine had to pass
    pub passes: u32,
}

impl Default for Rating {
    fn default() -> Self {
        Self {
            elo: INITIAL_RATING,
            games: 0,
            disc_balance: 0,
            passes: 0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EloTracker {
    ratings: BTreeMap<String, Rating>,
}

impl EloTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current rating; unseen engines sit at [`INITIAL_RATING`].
    pub fn rating(&self, engine: &str) -> Rating {
        self.ratings.get(engine).cloned().unwrap_or_default()
    }

    /// Rates one finished game and returns the change applied to Black.
    pub fn record_game(&mut self, black: &str, white: &str, game: &GameRecord) -> f64 {
        let expected = expected_score(self.rating(black).elo, self.rating(white).elo);
        let change = game_k(game) * (game.result.points() - expected);
        let margin = game.margin() as i64;

        let b = self.ratings.entry(black.to_string()).or_default();
        b.elo += change;
        b.games += 1;
        b.disc_balance += margin;
        b.passes += game.black_passes;

        let w = self.ratings.entry(white.to_string()).or_default();
        w.elo -= change;
        w.games += 1;
        w.disc_balance -= margin;
        w.passes += game.white_passes;

        change
    }

    /// Rates every game of a match in the order it was played.
    pub fn record_match(&mut self, engine1: &str, engine2: &str, result: &MatchResult) {
        for game in &result.games {
            if game.engine1_black {
                self.record_game(engine1, engine2, &game.record);
            } else {
                self.record_game(engine2, engine1, &game.record);
            }
        }
    }

    /// Engines by rating, highest first; ties by name.
    pub fn leaderboard(&self) -> Vec<(&str, &Rating)> {
        let mut entries: Vec<_> = self
            .ratings
            .iter()
            .map(|(name, rating)| (name.as_str(), rating))
            .collect();
        entries.sort_by(|a, b| b.1.elo.total_cmp(&a.1.elo).then_with(|| a.0.cmp(b.0)));
        entries
    }

    pub fn format_leaderboard(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Leaderboard ===\n");
        out.push_str(&format!(
            "{:<24} {:>8} {:>6} {:>8} {:>7}\n",
            "Engine", "Elo", "Games", "Discs", "Passes"
        ));
        out.push_str(&"-".repeat(57));
        out.push('\n');
        for (name, rating) in self.leaderboard() {
            out.push_str(&format!(
                "{:<24} {:>8.1} {:>6} {:>+8} {:>7}\n",
                name, rating.elo, rating.games, rating.disc_balance, rating.passes
            ));
        }
        out
    }
}

#[cfg(test)]
#[path = "elo_tests.rs"]
mod elo_tests;
