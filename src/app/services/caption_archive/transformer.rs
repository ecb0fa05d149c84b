//! Caption archive construction
//!
//! Folds every season's events into per-corps, per-caption time series.
//! Entries are appended in caller order; no sorting or deduplication is
//! performed across events.

use std::collections::BTreeMap;

use tracing::debug;

use crate::app::models::{CaptionArchiveRecord, CaptionMoment, Event};
use crate::constants::archive_record_key;

/// Build one archive record per distinct (year, corps) pair across all
/// processed seasons.
///
/// For each event, each score entry, and each caption present on that
/// entry, the caption's values are appended to the matching list on the
/// record together with the event context. Records are created on first
/// encounter with all eight caption lists empty. Callers are expected to
/// supply events in chronological order per season; that order is preserved
/// but not enforced here.
pub fn build_caption_archives(
    seasons: &BTreeMap<i32, Vec<Event>>,
) -> BTreeMap<String, CaptionArchiveRecord> {
    let mut records: BTreeMap<String, CaptionArchiveRecord> = BTreeMap::new();

    for (&year, events) in seasons {
        for event in events {
            for entry in &event.scores {
                for (&caption, values) in &entry.captions {
                    let key = archive_record_key(year, &entry.corps);
                    let record = records
                        .entry(key)
                        .or_insert_with(|| CaptionArchiveRecord::new(year, entry.corps.clone()));

                    // Total never reaches the captions map, but guard the
                    // lookup rather than assume it.
                    if let Some(list) = record.caption_list_mut(caption) {
                        list.push(CaptionMoment {
                            date: event.date.clone(),
                            location: event.location.clone(),
                            event_name: event.event_name.clone(),
                            off_season_day: event.off_season_day,
                            scores: values.clone(),
                        });
                    }
                }
            }
        }
        debug!("Archived caption history for season {}", year);
    }

    records
}
