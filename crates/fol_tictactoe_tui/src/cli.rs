//! Command-line interface for fol_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Knowledge-base tic-tac-toe - every move runs a forward-chaining pass
#[derive(Parser, Debug)]
#[command(name = "fol_tictactoe")]
#[command(about = "Tic-tac-toe over a first-order fact base", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(long, global = true, default_value = "fol_tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Play a fixed sequence of cells and print the inference log
    Replay {
        /// Name of the X player (overrides config)
        #[arg(long)]
        x: Option<String>,

        /// Name of the O player (overrides config)
        #[arg(long)]
        o: Option<String>,

        /// Print the final game view as JSON instead of the log
        #[arg(long)]
        json: bool,

        /// Cells to play, 1-9, alternating X and O
        #[arg(required = true, value_parser = clap::value_parser!(u8).range(1..=9))]
        cells: Vec<u8>,
    },
}
