//! Command implementations for the recap processor CLI
//!
//! Each command lives in its own module; shared run statistics, logging
//! setup, and discovery helpers live in [`shared`].

pub mod process;
pub mod rankings;
pub mod shared;

pub use shared::ProcessingStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the recap processor
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `process`: full pipeline with JSON artifact output
/// - `rankings`: read-only season ranking report
pub async fn run(args: Args) -> Result<ProcessingStats> {
    match args.get_command() {
        Commands::Process(process_args) => process::run_process(process_args).await,
        Commands::Rankings(rankings_args) => rankings::run_rankings(rankings_args).await,
    }
}
