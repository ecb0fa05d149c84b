//! Process command implementation for the recap processor CLI
//!
//! Orchestrates the full pipeline: recap file discovery, parallel parsing,
//! ranking generation, caption archive construction, and artifact output.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Instant;

use colored::Colorize;
use futures::{StreamExt, stream};
use indicatif::HumanDuration;
use tracing::{debug, error, info, warn};

use super::shared::{ProcessingStats, create_progress_bar, discover_recap_files, setup_logging};
use crate::app::models::{Event, RankingEntry, validate_ranking};
use crate::app::services::artifact_writer::ArtifactWriter;
use crate::app::services::caption_archive::build_caption_archives;
use crate::app::services::rankings::generate_final_rankings;
use crate::app::services::recap_parser::{ParseResult, RecapParser};
use crate::cli::args::{OutputFormat, ProcessArgs};
use crate::config::Config;
use crate::{Error, Result};

/// Process command runner.
///
/// Workflow:
/// 1. Set up logging and validate the input-directory precondition
/// 2. Discover recap files keyed by season year
/// 3. Parse files concurrently and merge events per season
/// 4. Generate rankings and caption archives
/// 5. Write JSON artifacts and report statistics
pub async fn run_process(args: ProcessArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting recap processor");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = Config {
        input_path: args.input_path.clone(),
        output_path: args.output_path.clone(),
        delimiter: args.delimiter,
        workers: args.workers,
        dry_run: args.dry_run,
    };
    config.validate()?;

    let recap_files = discover_recap_files(&config.input_path)?;
    if recap_files.is_empty() {
        warn!(
            "No recap files found in input directory: {}",
            config.input_path.display()
        );
    }
    info!("Discovered {} recap files", recap_files.len());

    if config.dry_run {
        return run_dry_run(&recap_files, start_time);
    }

    config.ensure_output_directory()?;

    let mut stats = ProcessingStats::default();
    let seasons = parse_files(&config, recap_files, args.show_progress(), &mut stats).await;
    stats.seasons_processed = seasons.len();

    // Ranking and archiving are pure transforms over the fully-merged
    // season map; all of a season's events must be present before either
    // runs.
    let mut rankings: BTreeMap<i32, Vec<RankingEntry>> = BTreeMap::new();
    for (&year, events) in &seasons {
        let entries = generate_final_rankings(events);
        validate_ranking(&entries)?;
        if entries.is_empty() {
            warn!("Season {} has no finals event; ranking is empty", year);
        } else {
            stats.seasons_ranked += 1;
        }
        rankings.insert(year, entries);
    }

    let archives = build_caption_archives(&seasons);
    stats.archive_records = archives.len();

    let writer = ArtifactWriter::new(&config.output_path);
    stats.output_sizes = writer.write_all(&seasons, &rankings, &archives)?;

    stats.processing_time = start_time.elapsed();
    generate_final_report(&args, &stats)?;

    Ok(stats)
}

/// Parse all recap files concurrently, merging events per season year.
///
/// Files are independent (each parse yields a self-contained event list),
/// so they run on blocking worker tasks bounded by the configured worker
/// count. The buffered stream preserves discovery order, keeping each
/// season's event list deterministic.
async fn parse_files(
    config: &Config,
    recap_files: Vec<(i32, PathBuf)>,
    show_progress: bool,
    stats: &mut ProcessingStats,
) -> BTreeMap<i32, Vec<Event>> {
    let parser = RecapParser::new(config.delimiter);

    let progress_bar = if show_progress && !recap_files.is_empty() {
        Some(create_progress_bar(
            recap_files.len() as u64,
            "Parsing recap files...",
        ))
    } else {
        None
    };

    let jobs = recap_files.into_iter().map(|(year, path)| async move {
        tokio::task::spawn_blocking(move || {
            let result = parser.parse_file(&path);
            (year, path, result)
        })
        .await
    });

    let mut seasons: BTreeMap<i32, Vec<Event>> = BTreeMap::new();
    let mut results = stream::iter(jobs).buffered(config.workers);

    while let Some(joined) = results.next().await {
        if let Some(pb) = &progress_bar {
            pb.inc(1);
        }

        match joined {
            Ok((year, path, Ok(ParseResult { events, stats: file_stats }))) => {
                debug!(
                    "Parsed {}: {} events, {} rows skipped",
                    path.display(),
                    file_stats.events_parsed,
                    file_stats.rows_skipped
                );
                stats.files_processed += 1;
                stats.events_parsed += file_stats.events_parsed;
                stats.scores_recorded += file_stats.scores_recorded;
                seasons.entry(year).or_default().extend(events);
            }
            Ok((_, path, Err(e))) => {
                error!("Failed to parse {}: {}", path.display(), e);
                stats.errors_encountered += 1;
            }
            Err(join_error) => {
                error!("Parser task failed: {}", join_error);
                stats.errors_encountered += 1;
            }
        }
    }

    if let Some(pb) = &progress_bar {
        pb.finish_with_message(format!("Parsed {} files", stats.files_processed));
    }

    info!(
        "Parsing complete: {} events across {} seasons",
        stats.events_parsed,
        seasons.len()
    );
    seasons
}

/// Perform a dry run showing what would be processed
fn run_dry_run(recap_files: &[(i32, PathBuf)], start_time: Instant) -> Result<ProcessingStats> {
    info!("Performing dry run - no artifacts will be written");

    let mut seasons: BTreeMap<i32, usize> = BTreeMap::new();
    for (year, path) in recap_files {
        info!("Would process {} (season {})", path.display(), year);
        *seasons.entry(*year).or_default() += 1;
    }

    for (year, count) in &seasons {
        println!("Season {}: {} recap files", year, count);
    }

    Ok(ProcessingStats {
        seasons_processed: seasons.len(),
        files_processed: recap_files.len(),
        processing_time: start_time.elapsed(),
        ..Default::default()
    })
}

/// Generate final processing report
fn generate_final_report(args: &ProcessArgs, stats: &ProcessingStats) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => generate_human_report(stats),
        OutputFormat::Json => generate_json_report(stats),
    }
}

/// Generate human-readable report
fn generate_human_report(stats: &ProcessingStats) -> Result<()> {
    let duration = HumanDuration(stats.processing_time);

    println!("\n{}", "Recap processing complete".green().bold());
    println!("{}", "─".repeat(40));
    println!("   Seasons processed:  {}", stats.seasons_processed);
    println!("   Files processed:    {}", stats.files_processed);
    println!("   Events parsed:      {}", stats.events_parsed);
    println!("   Score rows:         {}", stats.scores_recorded);
    println!("   Seasons ranked:     {}", stats.seasons_ranked);
    println!("   Archive records:    {}", stats.archive_records);
    println!("   Processing time:    {}", duration);

    if stats.errors_encountered > 0 {
        println!(
            "   {}",
            format!("Errors encountered: {}", stats.errors_encountered).yellow()
        );
    }

    if !stats.output_sizes.is_empty() {
        println!("\n{}", "Output artifacts:".bold());
        for (filename, size) in &stats.output_sizes {
            println!("   {}: {}", filename, ProcessingStats::format_size(*size));
        }
    }

    println!();
    Ok(())
}

/// Generate JSON report for machine consumption
fn generate_json_report(stats: &ProcessingStats) -> Result<()> {
    let json_stats = serde_json::json!({
        "seasons_processed": stats.seasons_processed,
        "files_processed": stats.files_processed,
        "events_parsed": stats.events_parsed,
        "scores_recorded": stats.scores_recorded,
        "seasons_ranked": stats.seasons_ranked,
        "archive_records": stats.archive_records,
        "errors_encountered": stats.errors_encountered,
        "processing_time_seconds": stats.processing_time.as_secs_f64(),
        "output_files": stats.output_sizes.iter().map(|(name, size)| {
            serde_json::json!({
                "filename": name,
                "size_bytes": size
            })
        }).collect::<Vec<_>>()
    });

    let rendered = serde_json::to_string_pretty(&json_stats)
        .map_err(|e| Error::serialization("Failed to render run summary", e))?;
    println!("{}", rendered);
    Ok(())
}
