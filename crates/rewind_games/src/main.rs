//! Rewind - tic-tac-toe with move history navigation.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use rewind_games::{
    AppConfig, Cli, Command, init_file_logging, init_stderr_logging, render_report, run_replay,
    run_tui,
};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Tui => {
            init_file_logging(&config)?;
            run_tui(&config)
        }
        Command::Replay { json, actions } => {
            init_stderr_logging(&config);
            replay(&actions, json)
        }
    }
}

/// Apply scripted actions and print the outcome to stdout.
#[instrument(skip(actions))]
fn replay(actions: &[String], json: bool) -> Result<()> {
    let report = run_replay(actions)?;
    info!(
        applied = report.applied(),
        ignored = report.ignored().len(),
        "Replay finished"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report));
    }
    Ok(())
}
