//! Tournament CLI
//!
//! Run matches between engines, track Elo ratings, and query a single
//! position.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use othello_core::{perft, Board, Position, SearchLimits, Side};
use tournament::{
    create_engine, run_round_robin, EloTracker, MatchConfig, MatchRunner, TournamentConfig,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tournament", about = "ML-othello tournament runner", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a match between two engines
    Match {
        /// First engine (minimax, minimax:parallel, random, random:<seed>)
        engine1: String,
        /// Second engine
        engine2: String,
        #[arg(short, long, default_value_t = 10)]
        games: u32,
        #[arg(short, long, default_value_t = 3)]
        depth: u8,
    },
    /// Play every pair of engines listed in a TOML config
    RoundRobin {
        config: PathBuf,
        /// Print results as JSON instead of a text report
        #[arg(long)]
        json: bool,
    },
    /// Pick a move for a board read from FILE (or stdin)
    Bestmove {
        file: Option<PathBuf>,
        #[arg(short, long, default_value = "black")]
        side: Side,
        #[arg(short, long, default_value_t = 3)]
        depth: u8,
        #[arg(short, long, default_value = "minimax")]
        engine: String,
    },
    /// Count move-tree leaves from the opening
    Perft {
        #[arg(short, long, default_value_t = 6)]
        depth: u8,
    },
}

fn run_match(engine1_spec: &str, engine2_spec: &str, games: u32, depth: u8) -> Result<()> {
    println!("=== Match: {} vs {} ===", engine1_spec, engine2_spec);
    println!("Games: {}, Depth: {}", games, depth);
    println!();

    let mut engine1 = create_engine(engine1_spec)?;
    let mut engine2 = create_engine(engine2_spec)?;

    let config = MatchConfig {
        num_games: games,
        depth,
        ..Default::default()
    };

    let runner = MatchRunner::new(config);
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut())?;

    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        engine1_spec, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);
    println!("Disc margin: {:+}", result.disc_margin());

    let mut tracker = EloTracker::new();
    tracker.record_match(engine1_spec, engine2_spec, &result);
    println!();
    println!("{}", tracker.format_leaderboard());
    Ok(())
}

fn run_tournament(path: &Path, json: bool) -> Result<()> {
    let config = TournamentConfig::load(path)
        .with_context(|| format!("loading {}", path.display()))?;
    let (results, tracker) = run_round_robin(&config)?;

    if json {
        println!("{}", results.to_json()?);
    } else {
        println!("{}", results.generate_report());
        println!("{}", tracker.format_leaderboard());
    }
    Ok(())
}

fn best_move(file: Option<&Path>, side: Side, depth: u8, engine_spec: &str) -> Result<()> {
    if depth == 0 {
        bail!("depth must be at least 1");
    }

    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading board from stdin")?;
            buf
        }
    };
    let board: Board = text.parse().context("parsing board")?;

    let mut engine = create_engine(engine_spec)?;
    let result = engine.search(&Position::new(board, side), SearchLimits::depth(depth));

    match result.best_move {
        Some(mv) => println!("bestmove {}", mv),
        None => println!("bestmove pass"),
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Match {
            engine1,
            engine2,
            games,
            depth,
        } => run_match(&engine1, &engine2, games, depth),
        Command::RoundRobin { config, json } => run_tournament(&config, json),
        Command::Bestmove {
            file,
            side,
            depth,
            engine,
        } => best_move(file.as_deref(), side, depth, &engine),
        Command::Perft { depth } => {
            let nodes = perft(&Board::startpos(), Side::Black, depth);
            println!("perft({}) = {}", depth, nodes);
            Ok(())
        }
    }
}
