//! Tournament results and reporting

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::TournamentConfig;
use crate::elo::EloTracker;
use crate::engines::create_engine;
use crate::error::TournamentError;
use crate::match_runner::{MatchConfig, MatchResult, MatchRunner};

/// Complete tournament results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentResults {
    /// Name/description of the tournament
    pub name: String,
    /// Participating engines
    pub participants: Vec<String>,
    /// All match results (indexed by participant pairs)
    pub matches: Vec<MatchEntry>,
    /// Configuration used
    pub config: TournamentConfig,
}

/// A single match entry in the tournament
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
}

impl TournamentResults {
    pub fn new(name: &str, participants: Vec<String>, config: TournamentConfig) -> Self {
        Self {
            name: name.to_string(),
            participants,
            matches: Vec::new(),
            config,
        }
    }

    /// Add a match result
    pub fn add_match(&mut self, engine1: &str, engine2: &str, result: MatchResult) {
        self.matches.push(MatchEntry {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            result,
        });
    }

    /// Total score (wins + half draws) per participant, in participant order
    pub fn standings(&self) -> Vec<(String, f64)> {
        self.participants
            .iter()
            .map(|p| {
                let points = self
                    .matches
                    .iter()
                    .map(|m| {
                        let r = if &m.engine1 == p {
                            m.result.clone()
                        } else if &m.engine2 == p {
                            m.result.reversed()
                        } else {
                            return 0.0;
                        };
                        r.wins as f64 + 0.5 * r.draws as f64
                    })
                    .sum::<f64>();
                (p.clone(), points)
            })
            .collect()
    }

    /// Render as pretty JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ===\n\n", self.name));
        report.push_str(&format!("Participants: {}\n", self.participants.join(", ")));
        report.push_str(&format!(
            "Config: {} games/match, depth {}\n\n",
            self.config.games_per_match, self.config.search_depth
        ));

        report.push_str("Results:\n");
        report.push_str(&format!(
            "{:<20} vs {:<20} {:>5}-{:<5}-{:<5} {:>6}\n",
            "Engine 1", "Engine 2", "W", "L", "D", "Discs"
        ));
        report.push_str(&"-".repeat(67));
        report.push('\n');

        for entry in &self.matches {
            report.push_str(&format!(
                "{:<20} vs {:<20} {:>5}-{:<5}-{:<5} {:>+6}\n",
                entry.engine1,
                entry.engine2,
                entry.result.wins,
                entry.result.losses,
                entry.result.draws,
                entry.result.disc_margin()
            ));
        }

        report.push_str("\nStandings:\n");
        for (name, points) in self.standings() {
            report.push_str(&format!("{:<20} {:>6.1}\n", name, points));
        }

        report
    }
}

/// Plays every pair of participants once and rates them.
pub fn run_round_robin(
    config: &TournamentConfig,
) -> Result<(TournamentResults, EloTracker), TournamentError> {
    config.validate()?;

    let mut tracker = EloTracker::new();
    let mut results =
        TournamentResults::new(&config.name, config.participants.clone(), config.clone());
    let runner = MatchRunner::new(MatchConfig {
        num_games: config.games_per_match,
        depth: config.search_depth,
        alternate_colors: config.alternate_colors,
    });

    for (i, first) in config.participants.iter().enumerate() {
        for second in &config.participants[i + 1..] {
            info!(engine1 = %first, engine2 = %second, "match started");
            let mut engine1 = create_engine(first)?;
            let mut engine2 = create_engine(second)?;

            let result = runner.run_match(engine1.as_mut(), engine2.as_mut())?;
            info!(
                engine1 = %first,
                engine2 = %second,
                wins = result.wins,
                losses = result.losses,
                draws = result.draws,
                "match finished"
            );

            tracker.record_match(first, second, &result);
            results.add_match(first, second, result);
        }
    }

    Ok((results, tracker))
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
