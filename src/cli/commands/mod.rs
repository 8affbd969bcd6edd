//! Command implementations for the roster processor CLI
//!
//! This module contains the command execution logic and shared rendering
//! helpers. Each command is implemented in its own module:
//! - `browse`: filtered, paginated roster pages
//! - `filters`: filter vocabulary listings
//! - `stats`: per-cohort statistics summaries

pub mod browse;
pub mod filters;
pub mod shared;
pub mod stats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the roster processor
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
pub async fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Browse(browse_args) => browse::run_browse(browse_args).await,
        Commands::Filters(filters_args) => filters::run_filters(filters_args).await,
        Commands::Stats(stats_args) => stats::run_stats(stats_args).await,
    }
}
