//! Test utilities and fixtures for caption archive testing

use std::collections::BTreeMap;

use crate::app::models::{Caption, Event, ScoreEntry};


/// Build an event where each corps carries values for the given captions
pub fn create_scored_event(
    name: &str,
    date: &str,
    results: &[(&str, f64, &[(Caption, f64)])],
) -> Event {
    Event {
        event_name: Some(name.to_string()),
        date: date.to_string(),
        location: "Allentown, PA".to_string(),
        off_season_day: Some(50),
        scores: results
            .iter()
            .map(|(corps, score, captions)| {
                let mut entry = ScoreEntry::new(corps.to_string(), *score);
                for (caption, value) in captions.iter() {
                    entry.record_caption(*caption, *value);
                }
                entry
            })
            .collect(),
    }
}

/// Wrap events into the season map the transformer consumes
pub fn create_season(year: i32, events: Vec<Event>) -> BTreeMap<i32, Vec<Event>> {
    BTreeMap::from([(year, events)])
}
