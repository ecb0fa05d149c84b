//! Tiered backfill algorithm for season-ending rankings
//!
//! Finals results take strict precedence; semifinal and quarterfinal
//! results only backfill missing slots, and a corps is never counted twice
//! even when it appears in multiple tiers.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::app::models::{Event, RankingEntry, ScoreEntry};
use crate::constants::{
    FINALS_MARKER, FINALS_SEED_COUNT, MAX_RANKED_CORPS, QUARTERFINALS_MARKERS, SEMIFINALS_MARKERS,
};

/// Generate the season-ending ranking for one season's events.
///
/// Returns at most 25 entries, or an empty list when the season has no
/// finals event (non-fatal; the season is simply unranked). Finals scores
/// seed the top 12 slots; semifinal then quarterfinal results backfill the
/// remainder, skipping corps already ranked. The accumulated list is
/// re-sorted by score descending (stable, so ties keep tier insertion
/// order), truncated to 25, and awarded `25 - (rank - 1)` points.
pub fn generate_final_rankings(events: &[Event]) -> Vec<RankingEntry> {
    let Some(finals) = find_finals(events) else {
        warn!("No finals event found; season is unranked");
        return Vec::new();
    };
    debug!("Finals event: {:?}", finals.event_name);

    let semifinals = find_tier(events, SEMIFINALS_MARKERS);
    let quarterfinals = find_tier(events, QUARTERFINALS_MARKERS);

    let mut ranked: Vec<(String, f64)> = Vec::new();
    let mut already_ranked: HashSet<String> = HashSet::new();

    for entry in sorted_by_score(&finals.scores).into_iter().take(FINALS_SEED_COUNT) {
        already_ranked.insert(entry.corps.clone());
        ranked.push((entry.corps, entry.score));
    }

    for tier in [semifinals, quarterfinals].into_iter().flatten() {
        backfill_from_tier(tier, &mut ranked, &mut already_ranked);
    }

    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(MAX_RANKED_CORPS);

    ranked
        .into_iter()
        .enumerate()
        .map(|(index, (corps, score))| RankingEntry::from_position(index, corps, score))
        .collect()
}

/// Append a tier's entries, best first, skipping already-ranked corps,
/// until the ranking reaches its cap or the tier is exhausted
fn backfill_from_tier(
    tier: &Event,
    ranked: &mut Vec<(String, f64)>,
    already_ranked: &mut HashSet<String>,
) {
    for entry in sorted_by_score(&tier.scores) {
        if ranked.len() >= MAX_RANKED_CORPS {
            break;
        }
        if already_ranked.contains(&entry.corps) {
            continue;
        }
        already_ranked.insert(entry.corps.clone());
        ranked.push((entry.corps, entry.score));
    }
}

/// Locate the finals event.
///
/// Any semifinal or quarterfinal name also contains "finals" as a
/// substring, so candidates matching a lower-tier marker are passed over.
fn find_finals(events: &[Event]) -> Option<&Event> {
    events.iter().find(|event| {
        event.name_contains(FINALS_MARKER)
            && !event.name_contains("semi")
            && !event.name_contains("quarter")
    })
}

/// Locate a lower-tier event by its name markers, first match wins
fn find_tier<'a>(events: &'a [Event], markers: &[&str]) -> Option<&'a Event> {
    markers
        .iter()
        .find_map(|marker| events.iter().find(|event| event.name_contains(marker)))
}

/// Clone and sort score entries by score descending (stable)
fn sorted_by_score(scores: &[ScoreEntry]) -> Vec<ScoreEntry> {
    let mut sorted = scores.to_vec();
    sorted.sort_by(|a, b| b.score.total_cmp(&a.score));
    sorted
}
