//! Bail CLI Application
//!
//! Command-line interface and MCP server for secret, all-or-nothing plan
//! cancellation.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use bailout_core::CoordinatorBuilder;
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, BailoutMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        json,
        base_url,
        command,
    } = Args::parse();

    let coordinator = CoordinatorBuilder::new()
        .with_database_path(database_file)
        .with_base_url(base_url)
        .build()
        .await
        .context("Failed to initialize coordinator")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Bailout started");

    match command {
        Create(args) => Cli::new(coordinator, renderer, json).create_plan(args).await,
        Status(args) => Cli::new(coordinator, renderer, json).show_status(args).await,
        Submit(args) => Cli::new(coordinator, renderer, json).submit_bail(args).await,
        Serve => {
            info!("Starting Bailout MCP server");
            run_stdio_server(BailoutMcpServer::new(coordinator))
                .await
                .context("MCP server failed")
        }
    }
}
