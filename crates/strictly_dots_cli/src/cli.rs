//! Command-line interface for strictly_dots.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Dots - dots-and-boxes edge claiming from the command line
#[derive(Parser, Debug)]
#[command(name = "strictly_dots")]
#[command(about = "Replay dots-and-boxes moves and pointer gestures", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults are used if omitted)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the grid size from the config
    #[arg(short, long, global = true)]
    pub size: Option<u32>,

    /// Print the result as JSON instead of a drawing
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print an empty grid
    Show,

    /// Apply a JSON array of moves
    Moves {
        /// Path to the moves file
        file: PathBuf,
    },

    /// Run a JSON array of pointer events through the gesture mapper
    Gestures {
        /// Path to the events file
        file: PathBuf,
    },
}
