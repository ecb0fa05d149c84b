//! Rankings command implementation for the recap processor CLI
//!
//! Read-only season report: parses one season's recap files and prints its
//! final ranking without writing any artifacts.

use std::time::Instant;

use colored::Colorize;
use tracing::{error, info};

use super::shared::{ProcessingStats, discover_recap_files, setup_logging};
use crate::app::models::{Event, RankingEntry, validate_ranking};
use crate::app::services::rankings::generate_final_rankings;
use crate::app::services::recap_parser::RecapParser;
use crate::cli::args::{OutputFormat, RankingsArgs};
use crate::{Error, Result};

/// Rankings command runner
pub async fn run_rankings(args: RankingsArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), false)?;
    args.validate()?;

    let recap_files = discover_recap_files(&args.input_path)?;
    let season_files: Vec<_> = recap_files
        .into_iter()
        .filter(|(year, _)| *year == args.year)
        .collect();

    if season_files.is_empty() {
        return Err(Error::configuration(format!(
            "No recap files found for season {} in {}",
            args.year,
            args.input_path.display()
        )));
    }

    info!(
        "Ranking season {} from {} recap files",
        args.year,
        season_files.len()
    );

    let parser = RecapParser::new(args.delimiter);
    let mut stats = ProcessingStats {
        seasons_processed: 1,
        ..Default::default()
    };
    let mut events: Vec<Event> = Vec::new();

    for (_, path) in &season_files {
        match parser.parse_file(path) {
            Ok(result) => {
                stats.files_processed += 1;
                stats.events_parsed += result.stats.events_parsed;
                stats.scores_recorded += result.stats.scores_recorded;
                events.extend(result.events);
            }
            Err(e) => {
                error!("Failed to parse {}: {}", path.display(), e);
                stats.errors_encountered += 1;
            }
        }
    }

    let ranking = generate_final_rankings(&events);
    validate_ranking(&ranking)?;
    if !ranking.is_empty() {
        stats.seasons_ranked = 1;
    }

    match args.output_format {
        OutputFormat::Human => print_ranking_table(args.year, &ranking),
        OutputFormat::Json => print_ranking_json(&ranking)?,
    }

    stats.processing_time = start_time.elapsed();
    Ok(stats)
}

/// Print a human-readable ranking table
fn print_ranking_table(year: i32, ranking: &[RankingEntry]) {
    if ranking.is_empty() {
        println!(
            "{}",
            format!("Season {} has no finals event; nothing to rank", year).yellow()
        );
        return;
    }

    println!("\n{}", format!("Season {} final ranking", year).bold());
    println!("{:<6}{:<32}{:>8}{:>10}", "Rank", "Corps", "Points", "Score");
    println!("{}", "─".repeat(56));
    for entry in ranking {
        println!(
            "{:<6}{:<32}{:>8}{:>10.3}",
            entry.rank, entry.corps, entry.points, entry.original_score
        );
    }
    println!();
}

/// Print the ranking as JSON for scripting
fn print_ranking_json(ranking: &[RankingEntry]) -> Result<()> {
    let rendered = serde_json::to_string_pretty(ranking)
        .map_err(|e| Error::serialization("Failed to render ranking", e))?;
    println!("{}", rendered);
    Ok(())
}
