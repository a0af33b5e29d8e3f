//! Dev-Notes MCP Server - Main Entry Point
//!
//! This is the main entry point for the dev-notes MCP server application.
//! The actual implementation is in the `devnotes_mcp` library.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use devnotes_mcp::DevNotesHandler;
use mcp_attr::server::serve_stdio;

/// Dev-Notes MCP Server - categorized TODO / dev-notes board via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the notes data file
    file: String,

    /// Enable git synchronization on save
    #[arg(long)]
    sync_git: bool,
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
    let handler = DevNotesHandler::new(&args.file, args.sync_git)?;
    serve_stdio(handler).await?;
    Ok(())
}
