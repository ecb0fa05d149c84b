//! Per-corps caption archive transformation
//!
//! Reshapes all parsed events for a competitor across a season into
//! per-caption time series used to project future fantasy values.

pub mod transformer;

#[cfg(test)]
pub mod tests;

pub use transformer::build_caption_archives;
