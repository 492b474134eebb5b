//! Rewind: terminal tic-tac-toe with move history navigation.
//!
//! # Architecture
//!
//! - **Game**: [`rewind_tictactoe::GameState`] holds all game logic
//! - **TUI**: ratatui front end that binds keys to game actions
//! - **Replay**: applies a scripted list of actions and prints the result
//! - **Config**: optional TOML file for logging and display preferences

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
mod replay;
mod tui;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError};
pub use logging::{init_file_logging, init_stderr_logging};
pub use replay::{ReplayReport, render_report, run_replay};
pub use tui::{App, AppCommand, Focus, run_tui};

// Re-export the game crate so binaries need a single dependency.
pub use rewind_tictactoe;
