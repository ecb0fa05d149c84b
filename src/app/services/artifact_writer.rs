//! JSON artifact output for the downstream store
//!
//! The pipeline hands three documents to the external persistent store:
//! historical scores (year -> events), final rankings (year -> ranking
//! entries), and caption archives (record key -> archive record). The store
//! owns upsert/delete semantics; this writer only materializes the full
//! document set for a run.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::app::models::{CaptionArchiveRecord, Event, RankingEntry};
use crate::constants::{
    CAPTION_ARCHIVES_FILENAME, FINAL_RANKINGS_FILENAME, HISTORICAL_SCORES_FILENAME,
};
use crate::{Error, Result};

/// Writes pipeline artifacts as pretty-printed JSON documents
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    output_dir: PathBuf,
}

impl ArtifactWriter {
    /// Create a writer targeting an existing output directory
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Write all three artifacts and return (filename, size) pairs
    pub fn write_all(
        &self,
        seasons: &BTreeMap<i32, Vec<Event>>,
        rankings: &BTreeMap<i32, Vec<RankingEntry>>,
        archives: &BTreeMap<String, CaptionArchiveRecord>,
    ) -> Result<Vec<(String, u64)>> {
        let sizes = vec![
            (
                HISTORICAL_SCORES_FILENAME.to_string(),
                self.write_json(HISTORICAL_SCORES_FILENAME, seasons)?,
            ),
            (
                FINAL_RANKINGS_FILENAME.to_string(),
                self.write_json(FINAL_RANKINGS_FILENAME, rankings)?,
            ),
            (
                CAPTION_ARCHIVES_FILENAME.to_string(),
                self.write_json(CAPTION_ARCHIVES_FILENAME, archives)?,
            ),
        ];

        info!(
            "Wrote {} artifacts to {}",
            sizes.len(),
            self.output_dir.display()
        );
        Ok(sizes)
    }

    /// Serialize one artifact to a file and return its size in bytes
    fn write_json<T: Serialize>(&self, filename: &str, value: &T) -> Result<u64> {
        let path = self.output_dir.join(filename);
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| Error::serialization(format!("Failed to serialize {}", filename), e))?;

        std::fs::write(&path, &json)
            .map_err(|e| Error::io(format!("Failed to write artifact {}", path.display()), e))?;

        Ok(json.len() as u64)
    }

    /// Path of a named artifact under the output directory
    pub fn artifact_path(&self, filename: &str) -> PathBuf {
        self.output_dir.join(filename)
    }

    /// The output directory this writer targets
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
