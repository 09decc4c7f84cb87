//! Strictly Dots CLI library
//!
//! Configuration loading, script formats and the command runners behind the
//! `strictly_dots` binary.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod script;

pub use cli::{Cli, Command};
pub use config::{ConfigError, DotsConfig, GridSection, LayoutSection};
pub use script::{PointerEvent, RunReport, read_script, run_gestures, run_moves};

use strictly_dots::{GridSession, GridState, Move};
use tracing::instrument;

/// Runs one parsed command and returns what should be printed.
#[instrument(skip(cli))]
pub fn execute(cli: &Cli) -> anyhow::Result<String> {
    let mut config = DotsConfig::load(cli.config.as_deref())?;
    if let Some(size) = cli.size {
        config = config.with_size(size);
    }

    let report = match &cli.command {
        Command::Show => run_moves(GridState::new(*config.grid().size())?, &[]),
        Command::Moves { file } => {
            let moves: Vec<Move> = read_script(file)?;
            run_moves(GridState::new(*config.grid().size())?, &moves)
        }
        Command::Gestures { file } => {
            let events: Vec<PointerEvent> = read_script(file)?;
            run_gestures(GridSession::new(config.grid_layout()?), &events)
        }
    };

    if cli.json {
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(format!(
            "{}\naccepted: {}, ignored: {}, gestures without move: {}",
            report.grid(),
            report.accepted().len(),
            report.ignored(),
            report.gestures_without_move()
        ))
    }
}
