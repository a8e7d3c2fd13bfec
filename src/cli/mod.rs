//! CLI module
//!
//! Command-line interface for fetching items.
//!
//! # Commands
//!
//! - `fetch` - Fetch one page
//! - `walk` - Follow cursors, printing each page
//! - `items` - Follow cursors, printing all items as one list

mod commands;
mod runner;

pub use commands::{Cli, Commands, DirectionArg, OutputFormat, PageArgs, WalkArgs};
pub use runner::Runner;
