//! Engine specifications: `minimax`, `minimax:parallel`, `random`, `random:<seed>`.

use minimax_engine::MinimaxEngine;
use othello_core::Engine;
use random_engine::RandomEngine;

use crate::error::EngineSpecError;

/// Builds an engine from its command-line specification.
pub fn create_engine(spec: &str) -> Result<Box<dyn Engine>, EngineSpecError> {
    let (kind, arg) = match spec.split_once(':') {
        Some((kind, arg)) => (kind, Some(arg)),
        None => (spec, None),
    };

    match (kind.to_lowercase().as_str(), arg) {
        ("minimax" | "mm", None) => Ok(Box::new(MinimaxEngine::new())),
        ("minimax" | "mm", Some("parallel" | "par")) => Ok(Box::new(MinimaxEngine::parallel())),
        ("random" | "rand", None) => Ok(Box::new(RandomEngine::new())),
        ("random" | "rand", Some(seed)) => seed
            .parse()
            .map(|s| Box::new(RandomEngine::with_seed(s)) as Box<dyn Engine>)
            .map_err(|_| EngineSpecError::Seed(seed.to_string())),
        _ => Err(EngineSpecError::Unknown(spec.to_string())),
    }
}

#[cfg(test)]
#[path = "engines_tests.rs"]
mod engines_tests;
