//! Logging setup for the server binary
//!
//! stdout carries the MCP transport, so log output always goes to stderr.
//! `RUST_LOG` takes precedence over the filter given on the command line.

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber
///
/// # Arguments
/// * `default_filter` - Filter directive used when `RUST_LOG` is unset (e.g. "warn", "qms_mcp=debug")
pub fn init_logging(default_filter: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .with_context(|| format!("Invalid log filter '{}'", default_filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))
}
