//! Tests for the event reconstruction state machine

use super::{create_single_event_recap, create_temp_file, create_two_event_recap};
use crate::app::models::Caption;
use crate::app::services::recap_parser::parser::{is_date_cell, score_column};
use crate::app::services::recap_parser::{ParserState, RecapParser, RowOutcome};

fn cells(row: &str) -> Vec<String> {
    crate::app::services::recap_parser::tokenize_row(row, ',')
}

#[test]
fn test_is_date_cell() {
    assert!(is_date_cell("8/1/2023"));
    assert!(is_date_cell("12/31/1999"));
    assert!(is_date_cell("7/04/2023"));
    assert!(!is_date_cell("Blue Devils"));
    assert!(!is_date_cell("8/1/23"));
    assert!(!is_date_cell("2023-08-01"));
    assert!(!is_date_cell(""));
}

#[test]
fn test_score_column_prefers_mapped_total() {
    let row = cells("Blue Devils,19.2,19.3,98.2,extra");
    assert_eq!(score_column(Some(3), &row), Some(3));
}

#[test]
fn test_score_column_falls_back_to_last_cell() {
    let row = cells("Blue Devils,19.2,19.3,98.2");
    assert_eq!(score_column(None, &row), Some(3));
    assert_eq!(score_column(None, &[]), None);
}

#[test]
fn test_parse_single_event() {
    let parser = RecapParser::new(',');
    let result = parser.parse_str(&create_single_event_recap(), "test");

    assert_eq!(result.events.len(), 1);
    let event = &result.events[0];
    assert_eq!(event.date, "8/1/2023");
    assert_eq!(event.location, "Allentown PA");
    assert_eq!(event.event_name.as_deref(), Some("DCI Eastern Classic"));
    assert_eq!(event.off_season_day, Some(50));
    assert_eq!(event.scores.len(), 3);

    let top = &event.scores[0];
    assert_eq!(top.corps, "Blue Devils");
    assert_eq!(top.score, 98.2);
    assert_eq!(top.captions.get(&Caption::GeneralEffect1), Some(&vec![19.2]));
    assert_eq!(top.captions.get(&Caption::Brass), Some(&vec![19.3]));
    assert_eq!(top.captions.get(&Caption::Percussion), Some(&vec![19.1]));
    assert!(!top.captions.contains_key(&Caption::Total));
}

#[test]
fn test_parse_two_events_with_noise() {
    let parser = RecapParser::new(',');
    let result = parser.parse_str(&create_two_event_recap(), "test");

    assert_eq!(result.events.len(), 2);
    assert_eq!(result.events[0].event_name.as_deref(), Some("Drums Along the Rockies"));
    // Score rows on both sides of the blank separator belong to the event
    assert_eq!(result.events[0].scores.len(), 2);
    assert_eq!(result.events[0].scores[1].corps, "Phantom Regiment");
    assert_eq!(result.events[1].scores.len(), 1);
    assert_eq!(result.events[1].scores[0].corps, "Boston Crusaders");

    // Preamble and footnote rows are counted but skipped
    assert!(result.stats.rows_skipped >= 2);
    assert_eq!(result.stats.events_parsed, 2);
    assert_eq!(result.stats.scores_recorded, 3);
}

#[test]
fn test_content_without_date_rows_yields_no_events() {
    let parser = RecapParser::new(',');
    let content = "Corps,Brass,Total\nBlue Devils,19.2,98.2\n";
    let result = parser.parse_str(content, "test");

    assert!(result.events.is_empty());
    assert_eq!(result.stats.events_parsed, 0);
    assert_eq!(result.stats.rows_skipped, 2);
}

#[test]
fn test_event_without_scores_is_discarded() {
    let parser = RecapParser::new(',');
    let content = "\
8/1/2023,Allentown PA,,,DCI Eastern Classic,50\n\
Corps,Brass,Total\n\
8/2/2023,Reading PA,,,Night Rehearsal Showcase,51\n\
Corps,Brass,Total\n\
Bluecoats,19.1,97.8\n";
    let result = parser.parse_str(content, "test");

    assert_eq!(result.events.len(), 1);
    assert_eq!(result.events[0].date, "8/2/2023");
}

#[test]
fn test_date_row_in_event_finalizes_previous() {
    let state = ParserState::Seeking;
    let t1 = state.step(&cells("8/1/2023,Allentown PA,,,Show One,50"));
    assert_eq!(t1.outcome, RowOutcome::EventStarted);
    assert!(t1.finalized.is_none());

    let t2 = t1.state.step(&cells("Corps,Brass,Total"));
    assert_eq!(t2.outcome, RowOutcome::HeaderMapped);

    let t3 = t2.state.step(&cells("Blue Devils,19.2,98.2"));
    assert_eq!(t3.outcome, RowOutcome::ScoreAccepted);

    let t4 = t3.state.step(&cells("8/2/2023,Reading PA,,,Show Two,51"));
    assert_eq!(t4.outcome, RowOutcome::EventStarted);
    let finalized = t4.finalized.expect("previous event should finalize");
    assert_eq!(finalized.date, "8/1/2023");
    assert_eq!(finalized.scores.len(), 1);
}

#[test]
fn test_finish_finalizes_open_event_at_eof() {
    let state = ParserState::Seeking
        .step(&cells("8/1/2023,Allentown PA,,,Show,50"))
        .state
        .step(&cells("Corps,Brass,Total"))
        .state
        .step(&cells("Blue Devils,19.2,98.2"))
        .state;

    let event = state.finish().expect("open event should finalize");
    assert_eq!(event.scores.len(), 1);
}

#[test]
fn test_finish_discards_scoreless_event() {
    let state = ParserState::Seeking
        .step(&cells("8/1/2023,Allentown PA,,,Show,50"))
        .state
        .step(&cells("Corps,Brass,Total"))
        .state;

    assert!(state.finish().is_none());
}

#[test]
fn test_noise_rows_skipped_while_seeking_and_in_event() {
    let seeking = ParserState::Seeking;
    let t = seeking.step(&cells("Scores courtesy of the recap archive"));
    assert_eq!(t.outcome, RowOutcome::RowSkipped);

    let in_event = t
        .state
        .step(&cells("8/1/2023,Allentown PA,,,Show,50"))
        .state
        .step(&cells("Corps,Brass,Total"))
        .state;
    let t = in_event.step(&cells("* tie broken by percussion"));
    assert_eq!(t.outcome, RowOutcome::RowSkipped);
}

#[test]
fn test_header_columns_map_by_position() {
    // Captions at scattered columns, unmapped columns in between
    let content = "\
8/1/2023,Allentown PA,,,DCI Eastern Classic,50\n\
Corps,Rank,General Effect 1,Judge,Notes,Brass,Judge,Notes,Total\n\
Blue Devils,1,19.2,Smith,solid,19.3,Jones,clean,98.2\n";
    let parser = RecapParser::new(',');
    let result = parser.parse_str(content, "test");

    assert_eq!(result.events.len(), 1);
    let entry = &result.events[0].scores[0];
    assert_eq!(entry.score, 98.2);
    assert_eq!(
        entry.captions.get(&Caption::GeneralEffect1),
        Some(&vec![19.2])
    );
    assert_eq!(entry.captions.get(&Caption::Brass), Some(&vec![19.3]));
    // Unmapped cells never become caption values
    assert_eq!(entry.captions.len(), 2);
}

#[test]
fn test_repeated_caption_columns_append_in_order() {
    // Two judges per caption: both columns share the caption and their
    // values accumulate left to right
    let content = "\
8/1/2023,Allentown PA,,,DCI Eastern Classic,50\n\
Corps,Brass,Brass,Total\n\
Blue Devils,19.2,19.4,98.2\n";
    let parser = RecapParser::new(',');
    let result = parser.parse_str(content, "test");

    let entry = &result.events[0].scores[0];
    assert_eq!(entry.captions.get(&Caption::Brass), Some(&vec![19.2, 19.4]));
}

#[test]
fn test_rightmost_total_column_wins() {
    // Sub(total) at column 3, grand total at column 5: the score must come
    // from the rightmost mapping
    let content = "\
8/1/2023,Allentown PA,,,DCI Eastern Classic,50\n\
Corps,Brass,Percussion,Sub,Color Guard,Total\n\
Blue Devils,19.2,19.1,38.3,19.0,98.2\n";
    let parser = RecapParser::new(',');
    let result = parser.parse_str(content, "test");

    assert_eq!(result.events[0].scores[0].score, 98.2);
}

#[test]
fn test_totals_only_event_uses_last_column_fallback() {
    // Header maps no captions at all; score rows still parse off the last cell
    let content = "\
8/1/2023,Allentown PA,,,DCI Eastern Classic,50\n\
Corps,Score\n\
Blue Devils,98.2\n\
Bluecoats,97.8\n";
    let parser = RecapParser::new(',');
    let result = parser.parse_str(content, "test");

    assert_eq!(result.events.len(), 1);
    let event = &result.events[0];
    assert_eq!(event.scores.len(), 2);
    assert_eq!(event.scores[0].score, 98.2);
    assert!(event.scores[0].captions.is_empty());
}

#[test]
fn test_score_rows_rejected_for_bad_values() {
    let content = "\
8/1/2023,Allentown PA,,,DCI Eastern Classic,50\n\
Corps,Brass,Total\n\
Blue Devils,19.2,98.2\n\
Bluecoats,19.1,DNS\n\
Carolina Crown,18.8,0.0\n\
Boston Crusaders,18.9,-5.0\n";
    let parser = RecapParser::new(',');
    let result = parser.parse_str(content, "test");

    let event = &result.events[0];
    assert_eq!(event.scores.len(), 1);
    assert_eq!(event.scores[0].corps, "Blue Devils");
    assert_eq!(result.stats.rows_skipped, 3);
}

#[test]
fn test_missing_location_defaults() {
    let content = "\
8/1/2023,,,,Evening Standstill,50\n\
Corps,Brass,Total\n\
Blue Devils,19.2,98.2\n";
    let parser = RecapParser::new(',');
    let result = parser.parse_str(content, "test");

    assert_eq!(result.events[0].location, "N/A");
}

#[test]
fn test_date_row_without_trailing_day_number() {
    let content = "\
8/1/2023,Allentown PA,,,DCI Eastern Classic\n\
Corps,Brass,Total\n\
Blue Devils,19.2,98.2\n";
    let parser = RecapParser::new(',');
    let result = parser.parse_str(content, "test");

    let event = &result.events[0];
    assert_eq!(event.off_season_day, None);
    assert_eq!(event.event_name.as_deref(), Some("DCI Eastern Classic"));
}

#[test]
fn test_parse_file_round_trip() {
    let temp_file = create_temp_file(&create_single_event_recap());
    let parser = RecapParser::new(',');
    let result = parser.parse_file(temp_file.path()).unwrap();

    assert_eq!(result.events.len(), 1);
    assert_eq!(result.stats.scores_recorded, 3);
}

#[test]
fn test_parse_file_missing_path_is_io_error() {
    let parser = RecapParser::new(',');
    let result = parser.parse_file(std::path::Path::new("/nonexistent/recap_2023.txt"));
    assert!(result.is_err());
}

#[test]
fn test_stats_acceptance_rate() {
    let parser = RecapParser::new(',');
    let result = parser.parse_str(&create_single_event_recap(), "test");

    // 5 rows: date, header, 3 score rows; nothing skipped
    assert_eq!(result.stats.rows_seen, 5);
    assert_eq!(result.stats.rows_skipped, 0);
    assert!((result.stats.acceptance_rate() - 100.0).abs() < f64::EPSILON);
}
