//! Test utilities and fixtures for ranking generation testing

use crate::app::models::{Event, ScoreEntry};


/// Build an event with the given name and (corps, score) results
pub fn create_event(name: &str, results: &[(&str, f64)]) -> Event {
    Event {
        event_name: Some(name.to_string()),
        date: "8/12/2023".to_string(),
        location: "Indianapolis, IN".to_string(),
        off_season_day: None,
        scores: results
            .iter()
            .map(|(corps, score)| ScoreEntry::new(corps.to_string(), *score))
            .collect(),
    }
}

/// A finals event with `count` corps scored in descending order from 98.0
pub fn create_finals(count: usize) -> Event {
    let results: Vec<(String, f64)> = (0..count)
        .map(|i| (format!("Finals Corps {:02}", i + 1), 98.0 - i as f64 * 0.5))
        .collect();
    Event {
        event_name: Some("DCI World Championship Finals".to_string()),
        date: "8/12/2023".to_string(),
        location: "Indianapolis, IN".to_string(),
        off_season_day: None,
        scores: results
            .iter()
            .map(|(corps, score)| ScoreEntry::new(corps.clone(), *score))
            .collect(),
    }
}
