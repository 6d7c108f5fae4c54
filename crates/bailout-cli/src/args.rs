use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{AccessArgs, CreatePlanArgs};

/// Secretly bail on a shared plan
///
/// Every participant of a plan gets a private link (a secret token). Each
/// participant can vote to bail; nobody sees anyone else's vote until they
/// have voted themselves, and the plan is cancelled only once everyone has
/// voted. Also runs as an MCP (Model Context Protocol) server.
#[derive(Parser)]
#[command(version, about, name = "bail")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/bailout/bailout.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results as JSON instead of markdown
    #[arg(long, global = true)]
    pub json: bool,

    /// Base URL for participants' share links
    #[arg(long, global = true, env = "BAILOUT_BASE_URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the bail CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Create a plan and print one private link per participant
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// Show a plan as the given participant sees it
    #[command(alias = "s")]
    Status(AccessArgs),
    /// Vote to bail on a plan as the given participant
    #[command(alias = "bail")]
    Submit(AccessArgs),
    /// Start the MCP server
    Serve,
}
