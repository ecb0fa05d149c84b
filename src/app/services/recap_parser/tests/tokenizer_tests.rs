//! Tests for delimited row tokenization

use crate::app::services::recap_parser::tokenizer::tokenize_row;

#[test]
fn test_basic_split() {
    let cells = tokenize_row("Blue Devils,19.2,19.3,98.2", ',');
    assert_eq!(cells, vec!["Blue Devils", "19.2", "19.3", "98.2"]);
}

#[test]
fn test_delimiter_inside_quotes_is_not_a_split_point() {
    let cells = tokenize_row("\"Concord, CA\",Blue Devils,98.2", ',');
    assert_eq!(cells, vec!["Concord, CA", "Blue Devils", "98.2"]);
}

#[test]
fn test_enclosing_quotes_stripped_only_when_both_present() {
    assert_eq!(tokenize_row("\"Bluecoats\"", ','), vec!["Bluecoats"]);
    // A quote pair that does not span the whole cell is kept verbatim
    assert_eq!(
        tokenize_row("say \"hi\" there,92.1", ','),
        vec!["say \"hi\" there", "92.1"]
    );
}

#[test]
fn test_unmatched_quote_absorbs_rest_of_line() {
    // An unclosed quote suppresses splitting through end of line
    assert_eq!(
        tokenize_row("Bluecoats\",92.1", ','),
        vec!["Bluecoats\",92.1"]
    );
}

#[test]
fn test_cells_are_whitespace_trimmed() {
    let cells = tokenize_row("  Blue Stars , 88.5 ,\" Madison WI \"", ',');
    assert_eq!(cells, vec!["Blue Stars", "88.5", "Madison WI"]);
}

#[test]
fn test_empty_cells_preserved() {
    let cells = tokenize_row("7/4/2023,Denver CO,,,Drums Along the Rockies,12", ',');
    assert_eq!(cells.len(), 6);
    assert_eq!(cells[2], "");
    assert_eq!(cells[3], "");
}

#[test]
fn test_single_cell_row() {
    assert_eq!(tokenize_row("Total", ','), vec!["Total"]);
}

#[test]
fn test_alternate_delimiter() {
    let cells = tokenize_row("Blue Devils\t19.2\t98.2", '\t');
    assert_eq!(cells, vec!["Blue Devils", "19.2", "98.2"]);
}

#[test]
fn test_lone_quote_cell_is_not_stripped() {
    // A single quote character both starts and ends the cell but cannot
    // delimit it
    assert_eq!(tokenize_row("\"", ','), vec!["\""]);
}

#[test]
fn test_retokenizing_requoted_cells_is_idempotent() {
    let original = "\"Concord, CA\",Blue Devils,\"98.2\"";
    let first_pass = tokenize_row(original, ',');

    // Requote every cell and tokenize again; cell values must survive
    let requoted = first_pass
        .iter()
        .map(|cell| format!("\"{}\"", cell))
        .collect::<Vec<_>>()
        .join(",");
    let second_pass = tokenize_row(&requoted, ',');

    assert_eq!(first_pass, second_pass);
}
