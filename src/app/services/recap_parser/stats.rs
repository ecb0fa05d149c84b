//! Parsing statistics and result structures for recap processing

use crate::app::models::Event;

/// Parsing result with events and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Finalized events in file order
    pub events: Vec<Event>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Non-empty rows fed to the state machine
    pub rows_seen: usize,

    /// Events finalized with at least one score record
    pub events_parsed: usize,

    /// Score rows accepted across all events
    pub scores_recorded: usize,

    /// Rows skipped as noise (separators, footnotes, header repeats)
    pub rows_skipped: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            rows_seen: 0,
            events_parsed: 0,
            scores_recorded: 0,
            rows_skipped: 0,
        }
    }

    /// Fraction of rows consumed as data rather than skipped, as a percentage
    pub fn acceptance_rate(&self) -> f64 {
        if self.rows_seen == 0 {
            0.0
        } else {
            let consumed = self.rows_seen - self.rows_skipped;
            (consumed as f64 / self.rows_seen as f64) * 100.0
        }
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
