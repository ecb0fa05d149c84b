//! Command-line argument definitions for the recap processor
//!
//! This module defines the complete CLI interface using the clap derive API.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::constants::{DEFAULT_DELIMITER, MAX_PARALLEL_WORKERS, default_worker_count};
use crate::{Error, Result};

/// CLI arguments for the recap processor
///
/// Converts drum corps season recap files into the ranking and caption
/// archive artifacts consumed by the fantasy game.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "recap-processor",
    version,
    about = "Convert drum corps recap files into fantasy ranking and caption archive artifacts",
    long_about = "Ingests a directory of delimited recap files (one per competition occasion, \
                  season year in the file name), reconstructs normalized events and scores, and \
                  writes season-ending rankings and per-corps caption archives as JSON artifacts."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the recap processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Process recap files into JSON artifacts (main command)
    Process(ProcessArgs),
    /// Print one season's final ranking without writing artifacts
    Rankings(RankingsArgs),
}

/// Arguments for the process command (main pipeline)
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Input directory of recap files
    ///
    /// One file conventionally per competition occasion; each file name must
    /// contain the 4-digit season year. A missing directory aborts the run.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "DIR",
        help = "Input directory of recap files"
    )]
    pub input_path: PathBuf,

    /// Output directory for JSON artifacts
    ///
    /// Created if it doesn't exist. Receives historical_scores.json,
    /// final_rankings.json, and caption_archives.json.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = "output",
        help = "Output directory for JSON artifacts"
    )]
    pub output_path: PathBuf,

    /// Cell delimiter used by the recap files
    #[arg(
        long = "delimiter",
        value_name = "CHAR",
        default_value_t = DEFAULT_DELIMITER,
        help = "Cell delimiter used by the recap files"
    )]
    pub delimiter: char,

    /// Number of files parsed concurrently
    #[arg(
        short = 'j',
        long = "workers",
        value_name = "COUNT",
        default_value_t = default_worker_count(),
        help = "Number of parallel workers for file parsing"
    )]
    pub workers: usize,

    /// Perform a dry run without writing artifacts
    ///
    /// Shows which files would be processed per season without creating any
    /// output. Useful for previewing a run.
    #[arg(
        long = "dry-run",
        help = "Show what would be processed without writing artifacts"
    )]
    pub dry_run: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for the run summary
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the run summary"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the rankings command (season report)
#[derive(Debug, Clone, Parser)]
pub struct RankingsArgs {
    /// Input directory of recap files
    #[arg(
        short = 'i',
        long = "input",
        value_name = "DIR",
        help = "Input directory of recap files"
    )]
    pub input_path: PathBuf,

    /// Season year to report
    #[arg(short = 'y', long = "year", value_name = "YEAR", help = "Season year to report")]
    pub year: i32,

    /// Cell delimiter used by the recap files
    #[arg(
        long = "delimiter",
        value_name = "CHAR",
        default_value_t = DEFAULT_DELIMITER,
        help = "Cell delimiter used by the recap files"
    )]
    pub delimiter: char,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Output format for the ranking table
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the ranking table"
    )]
    pub output_format: OutputFormat,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ProcessArgs {
    /// Validate the process command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.exists() {
            return Err(Error::configuration(format!(
                "Input directory does not exist: {}",
                self.input_path.display()
            )));
        }
        if !self.input_path.is_dir() {
            return Err(Error::configuration(format!(
                "Input path is not a directory: {}",
                self.input_path.display()
            )));
        }
        if self.workers == 0 || self.workers > MAX_PARALLEL_WORKERS {
            return Err(Error::configuration(format!(
                "Worker count must be between 1 and {}",
                MAX_PARALLEL_WORKERS
            )));
        }
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl RankingsArgs {
    /// Validate the rankings command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.exists() {
            return Err(Error::configuration(format!(
                "Input directory does not exist: {}",
                self.input_path.display()
            )));
        }
        if !(1900..2100).contains(&self.year) {
            return Err(Error::configuration(format!(
                "Season year {} is outside the supported range",
                self.year
            )));
        }
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn process_args(input: PathBuf) -> ProcessArgs {
        ProcessArgs {
            input_path: input,
            output_path: PathBuf::from("output"),
            delimiter: DEFAULT_DELIMITER,
            workers: default_worker_count(),
            dry_run: false,
            verbose: 0,
            quiet: false,
            output_format: OutputFormat::Human,
        }
    }

    #[test]
    fn test_process_args_validation() {
        let temp_dir = TempDir::new().unwrap();
        let args = process_args(temp_dir.path().to_path_buf());
        assert!(args.validate().is_ok());

        let mut invalid_args = args.clone();
        invalid_args.workers = 0;
        assert!(invalid_args.validate().is_err());

        invalid_args.workers = MAX_PARALLEL_WORKERS + 1;
        assert!(invalid_args.validate().is_err());

        let mut invalid_args = args.clone();
        invalid_args.input_path = PathBuf::from("/nonexistent/path");
        assert!(invalid_args.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let temp_dir = TempDir::new().unwrap();
        let mut args = process_args(temp_dir.path().to_path_buf());

        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.quiet = true;
        args.verbose = 0;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_rankings_args_year_range() {
        let temp_dir = TempDir::new().unwrap();
        let args = RankingsArgs {
            input_path: temp_dir.path().to_path_buf(),
            year: 2023,
            delimiter: DEFAULT_DELIMITER,
            verbose: 0,
            output_format: OutputFormat::Human,
        };
        assert!(args.validate().is_ok());

        let mut invalid_args = args.clone();
        invalid_args.year = 1234;
        assert!(invalid_args.validate().is_err());
    }
}
