//! Caption normalization for recap header labels
//!
//! Maps free-text column headers to the fixed set of caption codes. The
//! header row of each event block is run through this table to build the
//! event's column map.

use crate::app::models::Caption;
use crate::constants::caption_labels;

/// Normalize a free-text header label to a caption code.
///
/// Matching is case-insensitive; internal whitespace runs collapse to single
/// spaces and leading/trailing whitespace is trimmed before the exact-match
/// lookup. Unrecognized labels return `None` and the caller must tolerate
/// that: unmapped columns are ignored for scoring but still consume a column
/// index.
pub fn normalize_caption(label: &str) -> Option<Caption> {
    let normalized = label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    match normalized.as_str() {
        caption_labels::GENERAL_EFFECT_1 => Some(Caption::GeneralEffect1),
        caption_labels::GENERAL_EFFECT_2 => Some(Caption::GeneralEffect2),
        caption_labels::VISUAL_PROFICIENCY => Some(Caption::VisualProficiency),
        caption_labels::VISUAL_ANALYSIS => Some(Caption::VisualAnalysis),
        caption_labels::COLOR_GUARD => Some(Caption::ColorGuard),
        caption_labels::BRASS => Some(Caption::Brass),
        caption_labels::MUSIC_ANALYSIS => Some(Caption::MusicAnalysis),
        caption_labels::PERCUSSION => Some(Caption::Percussion),
        caption_labels::SUBTOTAL | caption_labels::TOTAL => Some(Caption::Total),
        _ => None,
    }
}
