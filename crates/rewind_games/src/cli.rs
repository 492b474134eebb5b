//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with move history navigation
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with move history navigation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file (defaults are used if it does not exist)
    #[arg(short, long, global = true, default_value = "rewind.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Tui,

    /// Apply a sequence of actions and print the resulting game
    Replay {
        /// Print the final game state as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Actions in order: a cell (0-8 or label like "center"), h<N> to jump to history step N, or "reset"
        #[arg(required = true)]
        actions: Vec<String>,
    },
}
