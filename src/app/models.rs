//! Data models for recap processing
//!
//! This module contains the core data structures for representing scored
//! competition events, season-ending rankings, and per-corps caption
//! archives consumed by the fantasy game.

use crate::constants::{self, MAX_RANKED_CORPS};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// Caption Vocabulary
// =============================================================================

/// One of the fixed scoring captions, plus the synthetic `Total` code.
///
/// The caption set is closed: recap headers either normalize to one of these
/// codes or are ignored. `Total` is used only to locate the season-total
/// column and is never stored in downstream artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Caption {
    #[serde(rename = "GE1")]
    GeneralEffect1,
    #[serde(rename = "GE2")]
    GeneralEffect2,
    #[serde(rename = "VP")]
    VisualProficiency,
    #[serde(rename = "VA")]
    VisualAnalysis,
    #[serde(rename = "CG")]
    ColorGuard,
    #[serde(rename = "B")]
    Brass,
    #[serde(rename = "MA")]
    MusicAnalysis,
    #[serde(rename = "P")]
    Percussion,
    #[serde(rename = "Total")]
    Total,
}

impl Caption {
    /// All captions that carry scores into downstream artifacts
    pub const SCORED: [Caption; 8] = [
        Caption::GeneralEffect1,
        Caption::GeneralEffect2,
        Caption::VisualProficiency,
        Caption::VisualAnalysis,
        Caption::ColorGuard,
        Caption::Brass,
        Caption::MusicAnalysis,
        Caption::Percussion,
    ];

    /// Short code used in serialized artifacts
    pub fn code(&self) -> &'static str {
        match self {
            Caption::GeneralEffect1 => "GE1",
            Caption::GeneralEffect2 => "GE2",
            Caption::VisualProficiency => "VP",
            Caption::VisualAnalysis => "VA",
            Caption::ColorGuard => "CG",
            Caption::Brass => "B",
            Caption::MusicAnalysis => "MA",
            Caption::Percussion => "P",
            Caption::Total => "Total",
        }
    }

    /// Whether this caption carries scores into downstream artifacts
    pub fn is_scored(&self) -> bool {
        !matches!(self, Caption::Total)
    }
}

impl fmt::Display for Caption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// =============================================================================
// Event and Score Structures
// =============================================================================

/// One scored competition occasion, identified by a date row in a recap file.
///
/// Created when the parser recognizes a date-pattern row and mutated only
/// while that event is open; immutable once finalized. The parse-scoped
/// header map and total-column index live in the parser state, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Event name, when the date row carried one
    pub event_name: Option<String>,

    /// Event date in MM/DD/YYYY form, exactly as it appeared in the recap
    pub date: String,

    /// Host location ("N/A" when the recap omits it)
    pub location: String,

    /// Off-season sequence index, independent of the calendar date, used by
    /// the fantasy game to schedule non-live-season content
    pub off_season_day: Option<i32>,

    /// Per-corps score records in recap row order
    pub scores: Vec<ScoreEntry>,
}

impl Event {
    /// Check whether this event's name contains a marker, case-insensitively
    pub fn name_contains(&self, marker: &str) -> bool {
        self.event_name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(marker))
    }
}

/// One corps' scores at one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Competitor identity, free text with significant whitespace
    pub corps: String,

    /// Event total score, always finite and > 0
    pub score: f64,

    /// Caption code -> recorded values. A list because the header map may
    /// legitimately map more than one column to the same caption; the list
    /// shape is preserved rather than collapsed.
    pub captions: BTreeMap<Caption, Vec<f64>>,
}

impl ScoreEntry {
    /// Create a score entry with an empty caption map
    pub fn new(corps: impl Into<String>, score: f64) -> Self {
        Self {
            corps: corps.into(),
            score,
            captions: BTreeMap::new(),
        }
    }

    /// Append a caption value, creating the list on first use
    pub fn record_caption(&mut self, caption: Caption, value: f64) {
        self.captions.entry(caption).or_default().push(value);
    }
}

// =============================================================================
// Final Rankings
// =============================================================================

/// One slot in a season-ending ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    /// 1-based rank, contiguous and unique within a season
    pub rank: u32,

    /// Competitor identity
    pub corps: String,

    /// Fantasy points awarded: 25 - (rank - 1)
    pub points: u32,

    /// Score carried from the source event entry
    pub original_score: f64,
}

impl RankingEntry {
    /// Build an entry from a 0-based position in the ranked list
    pub fn from_position(index: usize, corps: String, original_score: f64) -> Self {
        let rank = index as u32 + 1;
        Self {
            rank,
            corps,
            points: constants::points_for_rank(rank),
            original_score,
        }
    }
}

/// Validate the ranking invariants: length cap, contiguous ranks, unique corps.
pub fn validate_ranking(entries: &[RankingEntry]) -> Result<()> {
    if entries.len() > MAX_RANKED_CORPS {
        return Err(Error::data_validation(format!(
            "Ranking holds {} entries; maximum is {}",
            entries.len(),
            MAX_RANKED_CORPS
        )));
    }

    let mut seen = std::collections::HashSet::new();
    for (index, entry) in entries.iter().enumerate() {
        if entry.rank != index as u32 + 1 {
            return Err(Error::data_validation(format!(
                "Rank {} at position {} breaks the contiguous run",
                entry.rank, index
            )));
        }
        if !seen.insert(entry.corps.as_str()) {
            return Err(Error::data_validation(format!(
                "Corps '{}' appears more than once in the ranking",
                entry.corps
            )));
        }
    }

    Ok(())
}

// =============================================================================
// Caption Archive Structures
// =============================================================================

/// One caption's recorded values for one corps at one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionMoment {
    pub date: String,
    pub location: String,
    pub event_name: Option<String>,
    pub off_season_day: Option<i32>,
    pub scores: Vec<f64>,
}

/// Per-corps, per-caption season history, keyed externally by year + corps
/// (corps spaces replaced with hyphens).
///
/// Built once per season by folding over all events; never mutated after
/// construction for a given run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionArchiveRecord {
    pub year: i32,
    pub corps: String,
    #[serde(rename = "GE1")]
    pub ge1: Vec<CaptionMoment>,
    #[serde(rename = "GE2")]
    pub ge2: Vec<CaptionMoment>,
    #[serde(rename = "VP")]
    pub vp: Vec<CaptionMoment>,
    #[serde(rename = "VA")]
    pub va: Vec<CaptionMoment>,
    #[serde(rename = "CG")]
    pub cg: Vec<CaptionMoment>,
    #[serde(rename = "B")]
    pub b: Vec<CaptionMoment>,
    #[serde(rename = "MA")]
    pub ma: Vec<CaptionMoment>,
    #[serde(rename = "P")]
    pub p: Vec<CaptionMoment>,
}

impl CaptionArchiveRecord {
    /// Create a record with all eight caption lists empty
    pub fn new(year: i32, corps: impl Into<String>) -> Self {
        Self {
            year,
            corps: corps.into(),
            ge1: Vec::new(),
            ge2: Vec::new(),
            vp: Vec::new(),
            va: Vec::new(),
            cg: Vec::new(),
            b: Vec::new(),
            ma: Vec::new(),
            p: Vec::new(),
        }
    }

    /// External document key for this record
    pub fn record_key(&self) -> String {
        constants::archive_record_key(self.year, &self.corps)
    }

    /// The caption list for a scored caption; `None` for `Total`
    pub fn caption_list_mut(&mut self, caption: Caption) -> Option<&mut Vec<CaptionMoment>> {
        match caption {
            Caption::GeneralEffect1 => Some(&mut self.ge1),
            Caption::GeneralEffect2 => Some(&mut self.ge2),
            Caption::VisualProficiency => Some(&mut self.vp),
            Caption::VisualAnalysis => Some(&mut self.va),
            Caption::ColorGuard => Some(&mut self.cg),
            Caption::Brass => Some(&mut self.b),
            Caption::MusicAnalysis => Some(&mut self.ma),
            Caption::Percussion => Some(&mut self.p),
            Caption::Total => None,
        }
    }

    /// The caption list for a scored caption; `None` for `Total`
    pub fn caption_list(&self, caption: Caption) -> Option<&Vec<CaptionMoment>> {
        match caption {
            Caption::GeneralEffect1 => Some(&self.ge1),
            Caption::GeneralEffect2 => Some(&self.ge2),
            Caption::VisualProficiency => Some(&self.vp),
            Caption::VisualAnalysis => Some(&self.va),
            Caption::ColorGuard => Some(&self.cg),
            Caption::Brass => Some(&self.b),
            Caption::MusicAnalysis => Some(&self.ma),
            Caption::Percussion => Some(&self.p),
            Caption::Total => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption_codes_round_trip() {
        for caption in Caption::SCORED {
            let json = serde_json::to_string(&caption).unwrap();
            assert_eq!(json, format!("\"{}\"", caption.code()));
            let back: Caption = serde_json::from_str(&json).unwrap();
            assert_eq!(back, caption);
        }
    }

    #[test]
    fn test_total_is_not_scored() {
        assert!(!Caption::Total.is_scored());
        assert!(Caption::SCORED.iter().all(Caption::is_scored));
    }

    #[test]
    fn test_event_serialization_uses_camel_case() {
        let event = Event {
            event_name: Some("DCI Finals".to_string()),
            date: "8/12/2023".to_string(),
            location: "Indianapolis, IN".to_string(),
            off_season_day: Some(42),
            scores: vec![],
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["eventName"], "DCI Finals");
        assert_eq!(json["offSeasonDay"], 42);
        assert!(json.get("headerMap").is_none());
    }

    #[test]
    fn test_score_entry_caption_lists_accumulate() {
        let mut entry = ScoreEntry::new("Blue Devils", 98.5);
        entry.record_caption(Caption::Brass, 19.8);
        entry.record_caption(Caption::Brass, 19.6);
        entry.record_caption(Caption::Percussion, 19.2);

        assert_eq!(entry.captions[&Caption::Brass], vec![19.8, 19.6]);
        assert_eq!(entry.captions[&Caption::Percussion], vec![19.2]);
    }

    #[test]
    fn test_ranking_entry_points_derivation() {
        let first = RankingEntry::from_position(0, "Blue Devils".to_string(), 98.5);
        assert_eq!(first.rank, 1);
        assert_eq!(first.points, 25);

        let last = RankingEntry::from_position(24, "Pioneer".to_string(), 70.0);
        assert_eq!(last.rank, 25);
        assert_eq!(last.points, 1);
    }

    #[test]
    fn test_validate_ranking_rejects_duplicate_corps() {
        let entries = vec![
            RankingEntry::from_position(0, "Blue Devils".to_string(), 98.5),
            RankingEntry::from_position(1, "Blue Devils".to_string(), 97.0),
        ];
        assert!(validate_ranking(&entries).is_err());
    }

    #[test]
    fn test_validate_ranking_rejects_gap_in_ranks() {
        let mut entries = vec![
            RankingEntry::from_position(0, "Blue Devils".to_string(), 98.5),
            RankingEntry::from_position(1, "Bluecoats".to_string(), 97.0),
        ];
        entries[1].rank = 3;
        assert!(validate_ranking(&entries).is_err());
    }

    #[test]
    fn test_archive_record_key() {
        let record = CaptionArchiveRecord::new(2023, "Santa Clara Vanguard");
        assert_eq!(record.record_key(), "2023Santa-Clara-Vanguard");
    }

    #[test]
    fn test_archive_record_has_no_total_list() {
        let mut record = CaptionArchiveRecord::new(2023, "Bluecoats");
        assert!(record.caption_list_mut(Caption::Total).is_none());
        assert!(record.caption_list_mut(Caption::Brass).is_some());
    }
}
