//! Slidr - command-line entry point.

#![warn(missing_docs)]

mod cli;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use slidr::{ScreenMachine, SlidrConfig, run_autoplay};
use slidr_puzzle::{BoardEngine, BreadthFirstSolver, LayoutGenerator, ShuffledLayout, Solver};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

/// Config file picked up from the working directory when `--config` is absent.
const DEFAULT_CONFIG_FILE: &str = "slidr.toml";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config)?;

    match cli.command {
        Command::Solve { seed } => run_solve(config.with_seed(seed)),
        Command::Autoplay { seed, max_frames } => run_tour(config.with_seed(seed), max_frames),
        Command::CheckConfig => run_check_config(&config),
    }
}

/// Loads the explicit config, else `slidr.toml` if present, else defaults.
#[instrument]
fn load_config(path: Option<PathBuf>) -> Result<SlidrConfig> {
    let path = path.or_else(|| {
        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        fallback.exists().then(|| fallback.to_path_buf())
    });
    match path {
        Some(path) => Ok(SlidrConfig::from_file(&path)?),
        None => {
            info!("No config file; using defaults");
            Ok(SlidrConfig::default())
        }
    }
}

fn layout_generator(config: &SlidrConfig) -> ShuffledLayout {
    match config.board().seed() {
        Some(seed) => ShuffledLayout::seeded(*seed),
        None => ShuffledLayout::from_entropy(),
    }
}

fn new_board(config: &SlidrConfig) -> BoardEngine<BreadthFirstSolver, ShuffledLayout> {
    BoardEngine::new(
        BreadthFirstSolver,
        layout_generator(config),
        *config.board().size(),
        config.replay_timing(),
    )
}

/// Prints a layout and the slides that solve it.
#[instrument(skip(config))]
fn run_solve(config: SlidrConfig) -> Result<()> {
    let mut generator = layout_generator(&config);
    let root = generator.generate(*config.board().size());
    let solution = BreadthFirstSolver.solve(&root);

    println!("{root}");
    println!();
    println!("Optimal moves: {}", solution.optimal_moves());
    let slides: Vec<String> = solution.slides().map(|d| d.to_string()).collect();
    if !slides.is_empty() {
        println!("Slides: {}", slides.join(" "));
    }
    Ok(())
}

/// Runs the scripted tour and prints each phase change.
#[instrument(skip(config))]
fn run_tour(config: SlidrConfig, max_frames: u64) -> Result<()> {
    let mut machine = ScreenMachine::from_config(new_board(&config), &config);
    let report = run_autoplay(&mut machine, config.frame_duration(), max_frames)?;

    for change in report.transitions() {
        println!("{} -> {} ({})", change.from, change.to, change.effect);
    }
    if let Some(outcome) = report.hand_solve() {
        println!(
            "Solved by hand in {} moves (optimal {})",
            outcome.moves_taken, outcome.optimal_moves
        );
    }
    if let Some(moves) = report.replayed_moves() {
        println!("Replay applied {moves} moves");
    }
    println!(
        "{} frames, {:.1}s simulated",
        report.frames(),
        report.simulated().as_secs_f64()
    );
    Ok(())
}

/// Prints the effective configuration as TOML.
fn run_check_config(config: &SlidrConfig) -> Result<()> {
    config.validate()?;
    print!("{}", config.to_toml_string()?);
    Ok(())
}
