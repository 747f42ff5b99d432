//! Tournament configuration, loaded from TOML.
//!
//! ```toml
//! name = "nightly"
//! participants = ["minimax", "minimax:parallel", "random:7"]
//! games_per_match = 10
//! search_depth = 3
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Tournament configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    pub name: String,
    /// Engine specifications, see [`crate::create_engine`]
    pub participants: Vec<String>,
    pub games_per_match: u32,
    pub search_depth: u8,
    pub alternate_colors: bool,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            name: "Round robin".to_string(),
            participants: vec!["minimax".to_string(), "random".to_string()],
            games_per_match: 10,
            search_depth: 3,
            alternate_colors: true,
        }
    }
}

impl TournamentConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: TournamentConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.participants.len() < 2 {
            return Err(ConfigError::Invalid(format!(
                "need at least two participants, found {}",
                self.participants.len()
            )));
        }
        for (i, name) in self.participants.iter().enumerate() {
            if self.participants[..i].contains(name) {
                return Err(ConfigError::Invalid(format!(
                    "participant {name:?} is listed more than once"
                )));
            }
        }
        if self.search_depth == 0 {
            return Err(ConfigError::Invalid("search_depth must be at least 1".into()));
        }
        if self.games_per_match == 0 {
            return Err(ConfigError::Invalid("games_per_match must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
