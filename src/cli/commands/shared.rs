//! Shared components for CLI commands
//!
//! Common types and utilities used across command implementations: run
//! statistics, logging setup, recap file discovery, and progress reporting.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};
use regex::Regex;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::constants::{RECAP_FILE_EXTENSIONS, SEASON_YEAR_PATTERN};
use crate::{Error, Result};

static SEASON_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SEASON_YEAR_PATTERN).expect("season year pattern must compile"));

/// Processing statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct ProcessingStats {
    /// Number of seasons (distinct years) processed
    pub seasons_processed: usize,
    /// Number of recap files processed
    pub files_processed: usize,
    /// Number of events parsed across all files
    pub events_parsed: usize,
    /// Number of score rows recorded across all events
    pub scores_recorded: usize,
    /// Number of seasons that produced a non-empty ranking
    pub seasons_ranked: usize,
    /// Number of caption archive records built
    pub archive_records: usize,
    /// Number of errors encountered
    pub errors_encountered: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
    /// Output file sizes in bytes
    pub output_sizes: Vec<(String, u64)>,
}

impl ProcessingStats {
    /// Calculate total output size in bytes
    pub fn total_output_size(&self) -> u64 {
        self.output_sizes.iter().map(|(_, size)| size).sum()
    }

    /// Format output size in human-readable format
    pub fn format_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

/// Set up structured logging for a command
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("recap_processor={}", log_level)));

    // try_init: a second command in the same process keeps the first
    // subscriber instead of panicking
    if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .ok();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Discover recap files in the input directory, keyed by season year.
///
/// Every file with a recap extension whose name carries a 4-digit year is
/// returned; files without a year are skipped with a warning. Results are
/// path-sorted so a season's events merge in a deterministic order. A
/// missing input directory is a fatal configuration error.
pub fn discover_recap_files(input_dir: &Path) -> Result<Vec<(i32, PathBuf)>> {
    if !input_dir.is_dir() {
        return Err(Error::configuration(format!(
            "Input directory does not exist: {}",
            input_dir.display()
        )));
    }

    let mut recap_files = Vec::new();

    for entry in WalkDir::new(input_dir).follow_links(false) {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || !has_recap_extension(path) {
            continue;
        }

        let file_name = path.file_name().and_then(|name| name.to_str()).unwrap_or("");
        match extract_season_year(file_name) {
            Some(year) => recap_files.push((year, path.to_path_buf())),
            None => warn!(
                "Skipping recap file with no season year in its name: {}",
                path.display()
            ),
        }
    }

    recap_files.sort_by(|a, b| a.1.cmp(&b.1));

    debug!(
        "Discovered {} recap files in {}",
        recap_files.len(),
        input_dir.display()
    );
    Ok(recap_files)
}

/// Whether a path carries one of the recognized recap extensions
fn has_recap_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| RECAP_FILE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

/// Extract the 4-digit season year from a recap file name
pub fn extract_season_year(file_name: &str) -> Option<i32> {
    SEASON_YEAR
        .find(file_name)
        .and_then(|m| m.as_str().parse().ok())
}

/// Check if an error is critical enough to stop processing
pub fn is_critical_error(error: &Error) -> bool {
    matches!(
        error,
        Error::Configuration { .. } | Error::ProcessingInterrupted { .. }
    )
}

/// Create a progress bar with appropriate styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}
