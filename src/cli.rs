//! Command-line interface for slidr.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Slidr - sliding-tile puzzle core
#[derive(Parser, Debug)]
#[command(name = "slidr")]
#[command(about = "Sliding-tile puzzle engine and screen flow", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file (defaults to ./slidr.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a layout and print its optimal solution
    Solve {
        /// Layout seed (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play the whole screen flow headlessly with scripted input
    Autoplay {
        /// Layout seed (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,

        /// Give up after this many frames
        #[arg(long, default_value_t = slidr::DEFAULT_MAX_FRAMES)]
        max_frames: u64,
    },

    /// Load, validate and print the effective configuration
    CheckConfig,
}
