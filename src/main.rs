use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use chess_puzzle_trainer::config::TrainerConfig;
use chess_puzzle_trainer::errors::Errors;
use chess_puzzle_trainer::puzzles::puzzle_list::PuzzleList;
use chess_puzzle_trainer::puzzles::puzzle_session::PuzzleSession;
use chess_puzzle_trainer::trainer::trainer_top::run_stdio_loop;

/// Step through chess puzzles in the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Puzzle list (JSON). Defaults to `puzzles/puzzles.json` or the built-in set.
    #[arg(long)]
    puzzles: Option<PathBuf>,
    /// Wait for the user instead of auto-playing the opponent's reply.
    #[arg(long)]
    no_auto_reply: bool,
    /// Shuffle puzzles with this seed.
    #[arg(long)]
    seed: Option<u64>,
    /// Print the expected move when each puzzle loads.
    #[arg(long)]
    hints: bool,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "trainer stopped");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Errors> {
    let mut config = TrainerConfig::from_env()?;
    if args.puzzles.is_some() {
        config.puzzle_path = args.puzzles;
    }
    if args.no_auto_reply {
        config.auto_reply = false;
    }
    if args.seed.is_some() {
        config.shuffle_seed = args.seed;
    }
    config.show_hints |= args.hints;

    let list = match &config.puzzle_path {
        Some(path) => PuzzleList::from_json_path(path)?,
        None => PuzzleList::load_default(),
    };
    let session = PuzzleSession::new(list, config)?;

    run_stdio_loop(session).map_err(|source| Errors::Io {
        path: "<stdio>".to_owned(),
        source,
    })
}
