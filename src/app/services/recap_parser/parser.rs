//! Event reconstruction state machine for recap files
//!
//! A single forward pass over tokenized, non-empty rows recognizes
//! event-start markers, builds a column map per event from the header row,
//! and accumulates per-corps score records. The state is an explicit value
//! threaded through a fold over the row sequence, so each transition is
//! independently testable.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info, warn};

use super::captions::normalize_caption;
use super::stats::{ParseResult, ParseStats};
use super::tokenizer::tokenize_row;
use crate::app::models::{Caption, Event, ScoreEntry};
use crate::constants::{DEFAULT_LOCATION, EVENT_DATE_PATTERN};
use crate::{Error, Result};

static DATE_CELL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EVENT_DATE_PATTERN).expect("event date pattern must compile"));

/// Whether a cell is an event-date marker (`MM/DD/YYYY`, 1- or 2-digit
/// month and day)
pub fn is_date_cell(cell: &str) -> bool {
    DATE_CELL.is_match(cell)
}

/// An event under construction, together with its parse-scoped column
/// context. The column map and total-column index never leave the parser.
#[derive(Debug, Clone)]
pub struct OpenEvent {
    pub event: Event,
    /// Column index -> caption, in ascending column order
    pub header_map: BTreeMap<usize, Caption>,
    /// Column carrying the event total, when the header row names one
    pub total_column: Option<usize>,
}

impl OpenEvent {
    /// Open a new event from a date row.
    ///
    /// Location comes from cell 1 (default "N/A"), the event name from
    /// cell 4 when present, and the off-season day from the last cell of
    /// the same row when it parses as an integer.
    fn from_date_row(cells: &[String]) -> Self {
        let date = cells[0].clone();
        let location = cells
            .get(1)
            .filter(|cell| !cell.is_empty())
            .cloned()
            .unwrap_or_else(|| DEFAULT_LOCATION.to_string());
        let event_name = cells.get(4).filter(|cell| !cell.is_empty()).cloned();
        let off_season_day = cells.last().and_then(|cell| cell.parse::<i32>().ok());

        Self {
            event: Event {
                event_name,
                date,
                location,
                off_season_day,
                scores: Vec::new(),
            },
            header_map: BTreeMap::new(),
            total_column: None,
        }
    }

    /// Build the column map from the header row.
    ///
    /// Every cell runs through the caption normalizer; unrecognized labels
    /// are ignored but still consume a column index. When more than one
    /// column maps to `Total` the last one wins, which favors the rightmost
    /// (grand total) column over earlier subtotals.
    fn map_header_row(&mut self, cells: &[String]) {
        for (index, cell) in cells.iter().enumerate() {
            if let Some(caption) = normalize_caption(cell) {
                if caption == Caption::Total {
                    self.total_column = Some(index);
                }
                self.header_map.insert(index, caption);
            }
        }
    }

    /// Try to accept a row as a score record.
    ///
    /// The corps is cell 0 and must be non-empty and not date-shaped; the
    /// score cell must parse as a finite float greater than zero. Rejected
    /// rows are noise (blank separators, footnotes, stray header repeats)
    /// and the caller skips them silently.
    fn try_accept_score_row(&mut self, cells: &[String]) -> bool {
        let Some(corps) = cells.first() else {
            return false;
        };
        if corps.is_empty() || is_date_cell(corps) {
            return false;
        }

        let Some(score_index) = score_column(self.total_column, cells) else {
            return false;
        };
        let Some(score) = cells
            .get(score_index)
            .and_then(|cell| cell.parse::<f64>().ok())
        else {
            return false;
        };
        if !score.is_finite() || score <= 0.0 {
            return false;
        }

        let mut entry = ScoreEntry::new(corps.clone(), score);
        for (&index, &caption) in &self.header_map {
            if !caption.is_scored() {
                continue;
            }
            if let Some(value) = cells.get(index).and_then(|cell| cell.parse::<f64>().ok()) {
                entry.record_caption(caption, value);
            }
        }

        self.event.scores.push(entry);
        true
    }

    /// Finalize this event, discarding it when no score rows were accepted
    fn finalize(self) -> Option<Event> {
        if self.event.scores.is_empty() {
            None
        } else {
            Some(self.event)
        }
    }
}

/// Column whose value is treated as the event total for a score row.
///
/// Uses the header-mapped total column when one exists, otherwise falls
/// back to the row's last cell. The fallback is a heuristic with no check
/// that the last column is actually total-shaped; it lives in its own
/// function so it can be exercised or swapped in isolation.
pub fn score_column(total_column: Option<usize>, cells: &[String]) -> Option<usize> {
    total_column.or_else(|| cells.len().checked_sub(1))
}

/// Parser state threaded through the row fold
#[derive(Debug, Clone)]
pub enum ParserState {
    /// No event open; waiting for a date row
    Seeking,
    /// A date row just opened an event; the next row is its header row
    AwaitingHeader(OpenEvent),
    /// Accepting score rows for the open event
    InEvent(OpenEvent),
}

/// How a row was consumed by one transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    EventStarted,
    HeaderMapped,
    ScoreAccepted,
    RowSkipped,
}

/// Result of feeding one row to the state machine
#[derive(Debug)]
pub struct Transition {
    pub state: ParserState,
    /// Event finalized by this row, if the row closed one
    pub finalized: Option<Event>,
    pub outcome: RowOutcome,
}

impl ParserState {
    /// Feed one tokenized, non-empty row to the state machine.
    ///
    /// A date row opens a new event from any state, finalizing a previously
    /// open event that holds at least one score record. The row immediately
    /// after a date row becomes the header row. Any other row is a score
    /// candidate when an event is open, and noise otherwise.
    pub fn step(self, cells: &[String]) -> Transition {
        if cells.first().is_some_and(|cell| is_date_cell(cell)) {
            let finalized = self.finish();
            return Transition {
                state: ParserState::AwaitingHeader(OpenEvent::from_date_row(cells)),
                finalized,
                outcome: RowOutcome::EventStarted,
            };
        }

        match self {
            ParserState::Seeking => Transition {
                state: ParserState::Seeking,
                finalized: None,
                outcome: RowOutcome::RowSkipped,
            },
            ParserState::AwaitingHeader(mut open) => {
                open.map_header_row(cells);
                if open.header_map.is_empty() {
                    // Totals-only event: score rows still land on the
                    // last-column fallback, but no captions get recorded.
                    debug!("Header row produced no caption mappings");
                }
                Transition {
                    state: ParserState::InEvent(open),
                    finalized: None,
                    outcome: RowOutcome::HeaderMapped,
                }
            }
            ParserState::InEvent(mut open) => {
                let outcome = if open.try_accept_score_row(cells) {
                    RowOutcome::ScoreAccepted
                } else {
                    RowOutcome::RowSkipped
                };
                Transition {
                    state: ParserState::InEvent(open),
                    finalized: None,
                    outcome,
                }
            }
        }
    }

    /// Close the state machine at end of input, finalizing any open event
    /// with at least one score record
    pub fn finish(self) -> Option<Event> {
        match self {
            ParserState::Seeking => None,
            ParserState::AwaitingHeader(open) | ParserState::InEvent(open) => open.finalize(),
        }
    }
}

/// Recap file parser.
///
/// One parser instance carries only the cell delimiter; each parse produces
/// a self-contained event list, so files may be parsed independently and in
/// parallel.
#[derive(Debug, Clone, Copy)]
pub struct RecapParser {
    delimiter: char,
}

impl RecapParser {
    /// Create a parser for the given cell delimiter
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    /// Parse a recap file and return its events with statistics
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing recap file: {}", file_path.display());

        let content = std::fs::read_to_string(file_path).map_err(|e| {
            Error::io(
                format!("Failed to read recap file {}", file_path.display()),
                e,
            )
        })?;

        Ok(self.parse_str(&content, &file_path.display().to_string()))
    }

    /// Parse recap content line by line.
    ///
    /// Never fails: malformed rows are skipped as noise, and content with no
    /// recognizable date rows simply yields zero events (logged, non-fatal).
    pub fn parse_str(&self, content: &str, source: &str) -> ParseResult {
        let mut stats = ParseStats::new();
        let mut events = Vec::new();
        let mut state = ParserState::Seeking;

        for line in content.lines() {
            if line.trim().is_empty() {
                continue;
            }

            let cells = tokenize_row(line, self.delimiter);
            stats.rows_seen += 1;

            let transition = state.step(&cells);
            state = transition.state;

            if let Some(event) = transition.finalized {
                stats.events_parsed += 1;
                stats.scores_recorded += event.scores.len();
                events.push(event);
            }
            if transition.outcome == RowOutcome::RowSkipped {
                stats.rows_skipped += 1;
                debug!("Skipped row {} in {}", stats.rows_seen, source);
            }
        }

        if let Some(event) = state.finish() {
            stats.events_parsed += 1;
            stats.scores_recorded += event.scores.len();
            events.push(event);
        }

        if events.is_empty() {
            warn!("No events recognized in {}", source);
        } else {
            debug!(
                "Parsed {} events ({} score rows, {} rows skipped) from {}",
                stats.events_parsed, stats.scores_recorded, stats.rows_skipped, source
            );
        }

        ParseResult { events, stats }
    }
}
