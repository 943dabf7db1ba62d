//! fol_tictactoe - terminal front end
//!
//! Plays knowledge-base tic-tac-toe interactively, or replays a fixed
//! sequence of moves and prints the inference log.

#![warn(missing_docs)]

mod cli;
mod config;
mod logging;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::TuiConfig;
use fol_tictactoe::{Cell, GameSession, MoveOutcome};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load_or_default(&cli.config)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => tui::run_tui(&config),
        Command::Replay { x, o, json, cells } => {
            logging::init_stderr_logging(&config);
            run_replay(&config, x, o, json, &cells)
        }
    }
}

/// Plays the given cells headlessly and prints the result.
#[instrument(skip(config))]
fn run_replay(
    config: &TuiConfig,
    x: Option<String>,
    o: Option<String>,
    json: bool,
    cells: &[u8],
) -> Result<()> {
    let name_x = x.unwrap_or_else(|| config.player_x().clone());
    let name_o = o.unwrap_or_else(|| config.player_o().clone());
    let cells: Vec<Cell> = cells.iter().copied().filter_map(Cell::new).collect();
    info!(moves = cells.len(), "Replaying moves");

    let (session, reports) = GameSession::replay(&name_x, &name_o, &cells)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&session.view())?);
        return Ok(());
    }

    for line in session.current_log() {
        println!("{line}");
    }
    println!();
    for (cell, report) in cells.iter().zip(&reports) {
        if let MoveOutcome::Rejected(reason) = report.outcome() {
            println!("{cell} rejected: {reason}");
        }
    }
    println!("{}", session.view().status_line());
    Ok(())
}
