//! QMS MCP Server - Main Entry Point
//!
//! This is the main entry point for the QMS MCP server application.
//! The actual implementation is in the `qms_mcp` library.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use mcp_attr::server::serve_stdio;
use qms_mcp::QmsServerHandler;
use qms_mcp::logging::init_logging;

/// QMS MCP Server - food-safety quality records with status normalization via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the QMS records file (TOML)
    file: String,

    /// Load the records file but never write changes back
    #[arg(long)]
    read_only: bool,

    /// Log filter used when RUST_LOG is not set (e.g. "info", "qms_mcp=debug")
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    let args = Args::parse();
    init_logging(&args.log_level)?;

    let handler = QmsServerHandler::new(&args.file, args.read_only)?;
    tracing::info!(
        file = %handler.storage().file_path().display(),
        read_only = args.read_only,
        "starting QMS MCP server"
    );
    serve_stdio(handler).await?;
    Ok(())
}
