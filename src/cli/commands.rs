//! CLI commands and argument parsing

use crate::types::Direction;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Fetch pages of items from a cursor-paginated endpoint
#[derive(Parser, Debug)]
#[command(name = "item-fetcher")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL for relative endpoints (overrides the config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds (overrides the config file)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a single page
    Fetch(PageArgs),

    /// Follow cursors and print every page
    Walk(WalkArgs),

    /// Follow cursors and print all items as one list
    Items(WalkArgs),
}

/// Which page to request
#[derive(Args, Debug, Clone)]
pub struct PageArgs {
    /// Endpoint to query (overrides the config file)
    #[arg(short, long)]
    pub api_url: Option<String>,

    /// Page size (overrides the config file)
    #[arg(short, long)]
    pub limit: Option<u32>,

    /// Cursor of the page to start at
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub cursor: i64,
}

/// Options for multi-page commands
#[derive(Args, Debug, Clone)]
pub struct WalkArgs {
    #[command(flatten)]
    pub page: PageArgs,

    /// Stop after this many pages
    #[arg(long)]
    pub max_pages: Option<usize>,

    /// Cursor to follow
    #[arg(long, default_value = "next")]
    pub direction: DirectionArg,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one document per line)
    Json,
    /// Indented JSON
    Pretty,
}

/// Walk direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DirectionArg {
    Next,
    Previous,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Next => Direction::Next,
            DirectionArg::Previous => Direction::Previous,
        }
    }
}
