//! Tournament Runner for ML-othello
//!
//! This crate provides infrastructure for:
//! - Running matches between different engines
//! - Round-robin tournaments driven by a TOML config
//! - Tracking Elo ratings within a run
//!
//! # Usage
//!
//! ```bash
//! # Run a match between the minimax and random engines
//! cargo run -p tournament -- match minimax random:7 --games 20 --depth 3
//!
//! # Run a round robin from a config file
//! cargo run -p tournament -- round-robin tournament.toml --json
//! ```

mod config;
mod elo;
mod engines;
mod error;
mod match_runner;
mod results;

pub use config::*;
pub use elo::*;
pub use engines::*;
pub use error::*;
pub use match_runner::*;
pub use results::*;
