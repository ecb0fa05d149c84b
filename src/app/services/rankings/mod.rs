//! Season-ending ranking generation
//!
//! Given a season's parsed events, selects a deduplicated top-25 ranking
//! with a tiered backfill algorithm and assigns fantasy point awards.

pub mod generator;

#[cfg(test)]
pub mod tests;

pub use generator::generate_final_rankings;
