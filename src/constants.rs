//! Application constants for the recap processor
//!
//! This module contains the fixed caption vocabulary, ranking parameters,
//! file patterns, and default values used throughout the pipeline.

// =============================================================================
// Recap File Patterns
// =============================================================================

/// File extensions considered recap files during discovery
pub const RECAP_FILE_EXTENSIONS: &[&str] = &["txt", "csv", "tsv"];

/// Pattern matching the 4-digit season year embedded in recap file names
pub const SEASON_YEAR_PATTERN: &str = r"(19|20)\d{2}";

/// Pattern matching the date cell that opens a new event block
pub const EVENT_DATE_PATTERN: &str = r"^\d{1,2}/\d{1,2}/\d{4}$";

/// Default cell delimiter in recap files
pub const DEFAULT_DELIMITER: char = ',';

/// Location recorded when an event row carries no location cell
pub const DEFAULT_LOCATION: &str = "N/A";

// =============================================================================
// Caption Vocabulary
// =============================================================================

/// Recognized header labels, in normalized (lowercase, single-spaced) form
pub mod caption_labels {
    pub const GENERAL_EFFECT_1: &str = "general effect 1";
    pub const GENERAL_EFFECT_2: &str = "general effect 2";
    pub const VISUAL_PROFICIENCY: &str = "visual proficiency";
    pub const VISUAL_ANALYSIS: &str = "visual analysis";
    pub const COLOR_GUARD: &str = "color guard";
    pub const BRASS: &str = "brass";
    pub const MUSIC_ANALYSIS: &str = "music analysis";
    pub const PERCUSSION: &str = "percussion";
    pub const SUBTOTAL: &str = "sub";
    pub const TOTAL: &str = "total";
}

// =============================================================================
// Ranking Parameters
// =============================================================================

/// Number of finals entries that seed the season ranking
pub const FINALS_SEED_COUNT: usize = 12;

/// Maximum number of corps in a season-ending ranking
pub const MAX_RANKED_CORPS: usize = 25;

/// Points awarded to the top-ranked corps
pub const MAX_POINTS: u32 = 25;

/// Event-name markers for the ranking tiers, checked in order (first match wins)
pub const FINALS_MARKER: &str = "finals";
pub const SEMIFINALS_MARKERS: &[&str] = &["semi-finals", "semi-final"];
pub const QUARTERFINALS_MARKERS: &[&str] = &["quarterfinals", "quarterfinal"];

// =============================================================================
// Processing Configuration Defaults
// =============================================================================

/// Upper bound on parallel workers accepted from the CLI
pub const MAX_PARALLEL_WORKERS: usize = 64;

/// Default number of parallel file-parsing workers: one per CPU, capped
pub fn default_worker_count() -> usize {
    num_cpus::get().clamp(1, MAX_PARALLEL_WORKERS)
}

// =============================================================================
// Output Artifact Constants
// =============================================================================

/// Historical scores artifact filename (year -> events)
pub const HISTORICAL_SCORES_FILENAME: &str = "historical_scores.json";

/// Final rankings artifact filename (year -> ranking entries)
pub const FINAL_RANKINGS_FILENAME: &str = "final_rankings.json";

/// Caption archives artifact filename (record key -> archive record)
pub const CAPTION_ARCHIVES_FILENAME: &str = "caption_archives.json";

// =============================================================================
// Helper Functions
// =============================================================================

/// Points awarded for a 1-based rank position
pub fn points_for_rank(rank: u32) -> u32 {
    MAX_POINTS.saturating_sub(rank.saturating_sub(1))
}

/// Build the external document key for a caption archive record
pub fn archive_record_key(year: i32, corps: &str) -> String {
    format!("{}{}", year, corps.replace(' ', "-"))
}
