//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins when set; otherwise the configured filter applies.

use crate::AppConfig;
use anyhow::{Context, Result};
use std::fs::File;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Logs to the configured file so output does not corrupt the terminal UI.
pub fn init_file_logging(config: &AppConfig) -> Result<()> {
    let log_file = File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    // Don't fail if a subscriber is already installed (tests, embedding).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(log_file = %config.log_file().display(), "File logging initialized");
    Ok(())
}

/// Logs to stderr, leaving stdout for command output.
pub fn init_stderr_logging(config: &AppConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();
}
