//! Configuration management and validation
//!
//! Provides the runtime configuration assembled from CLI arguments and
//! defaults, with validation of the input-directory precondition.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DELIMITER, MAX_PARALLEL_WORKERS, default_worker_count};
use crate::{Error, Result};

/// Runtime configuration for a pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the recap files, one conventionally per
    /// competition occasion, with the season year in each file name
    pub input_path: PathBuf,

    /// Directory receiving the JSON artifacts
    pub output_path: PathBuf,

    /// Cell delimiter used by the recap files
    pub delimiter: char,

    /// Number of files parsed concurrently
    pub workers: usize,

    /// When set, discover and report without writing artifacts
    pub dry_run: bool,
}

impl Config {
    /// Create a configuration with default delimiter and worker count
    pub fn new(input_path: PathBuf, output_path: PathBuf) -> Self {
        Self {
            input_path,
            output_path,
            delimiter: DEFAULT_DELIMITER,
            workers: default_worker_count(),
            dry_run: false,
        }
    }

    /// Validate the configuration.
    ///
    /// A missing input directory is a fatal precondition failure: the
    /// pipeline aborts before producing any artifacts.
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

    /// Create the output directory when it does not yet exist
    pub fn ensure_output_directory(&self) -> Result<()> {
        if !self.output_path.exists() {
            std::fs::create_dir_all(&self.output_path).map_err(|e| {
                Error::configuration(format!(
                    "Failed to create output directory '{}': {}",
                    self.output_path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}
