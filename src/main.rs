// Command line tools around the push-puzzle engine.
// Levels are plain text files, one row per line, one code character per cell.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use push_engine::console_interface::render_game_to_string;
use push_engine::core::{
    decode, deserialize_directions, replay, serialize_directions, GameState, GameVariant, Level,
    SolveRule, DEFAULT_MAX_SOLVER_NODES,
};
use push_engine::state_graph::{solve, SolverConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Variant {
    ReachExit,
    CoverExits,
}

impl From<Variant> for GameVariant {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::ReachExit => GameVariant::ReachExit,
            Variant::CoverExits => GameVariant::CoverExits,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Solve, replay and validate grid push-puzzle levels")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search for a least-moves solution
    Solve {
        level: PathBuf,
        #[arg(long, value_enum, default_value_t = Variant::ReachExit)]
        variant: Variant,
        #[arg(long, default_value_t = DEFAULT_MAX_SOLVER_NODES)]
        max_nodes: usize,
    },
    /// Replay a direction code string (e.g. 3432) and print the resulting state
    Replay {
        level: PathBuf,
        directions: String,
        #[arg(long, value_enum, default_value_t = Variant::ReachExit)]
        variant: Variant,
    },
    /// Check that a JSON file holds a well-formed game state payload
    Validate { state: PathBuf },
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    run(Cli::parse()).inspect_err(|err| error!(error = %err, "command failed"))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Command::Solve {
            level,
            variant,
            max_nodes,
        } => run_solve(&level, variant.into(), max_nodes),
        Command::Replay {
            level,
            directions,
            variant,
        } => run_replay(&level, &directions, variant.into()),
        Command::Validate { state } => run_validate(&state),
    }
}

fn load_level(path: &Path) -> Result<Level, Box<dyn Error>> {
    let source = fs::read_to_string(path)?;
    let level = decode(&source)?;
    info!(path = %path.display(), width = level.width, height = level.height, blocks = level.initial_blocks.len(), "level loaded");
    Ok(level)
}

fn run_solve(path: &Path, variant: GameVariant, max_nodes: usize) -> Result<(), Box<dyn Error>> {
    let level = load_level(path)?;
    let start_time = std::time::Instant::now();
    let solution = solve(&level, variant, &SolverConfig { max_nodes })?;
    info!(
        least_moves = solution.least_moves(),
        explored = solution.explored,
        elapsed = ?start_time.elapsed(),
        "solved"
    );
    println!("{}", serialize_directions(&solution.directions));
    Ok(())
}

fn run_replay(path: &Path, directions: &str, variant: GameVariant) -> Result<(), Box<dyn Error>> {
    let level = load_level(path)?;
    let directions = deserialize_directions(directions)?;
    let rules = variant.rules();
    let game = replay(&level, &directions, &rules)?;

    print!("{}", render_game_to_string(&game, &rules));
    println!(
        "moves: {}, actions: {}, solved: {}",
        game.move_count,
        game.action_count,
        variant.solve_rule().is_solved(&game)
    );
    Ok(())
}

fn run_validate(path: &Path) -> Result<(), Box<dyn Error>> {
    let payload: serde_json::Value = serde_json::from_str(&fs::read_to_string(path)?)?;
    let game = GameState::from_payload(payload)?;
    info!(moves = game.move_count, blocks = game.blocks.len(), "payload accepted");
    Ok(())
}
