//! Error types for the tournament runner.

use othello_core::{Move, RulesError};
use thiserror::Error;

/// A game could not be completed because an engine broke the rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Engine answered with a move the rules reject
    #[error("{engine} played illegal move {mv}: {source}")]
    IllegalMove {
        engine: String,
        mv: Move,
        source: RulesError,
    },

    /// Engine returned no move although it had legal moves
    #[error("{engine} returned no move with legal moves available")]
    MissedMove { engine: String },
}

/// Unknown or malformed engine specification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineSpecError {
    #[error("unknown engine {0:?} (expected minimax, minimax:parallel, random or random:<seed>)")]
    Unknown(String),

    #[error("invalid random seed {0:?}")]
    Seed(String),
}

/// Tournament configuration could not be loaded.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Anything that can stop a tournament run.
#[derive(Error, Debug)]
pub enum TournamentError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Spec(#[from] EngineSpecError),

    #[error(transparent)]
    Match(#[from] MatchError),
}
