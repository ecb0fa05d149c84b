//! Row tokenization for delimited recap lines
//!
//! Splits one line of text into cells, respecting quoted fields that may
//! contain the delimiter, and strips enclosing quotes.

/// Split a line into cells on the delimiter.
///
/// A delimiter inside a matched pair of double quotes is not a split point.
/// Each cell has one leading and one trailing double quote stripped when both
/// are present and delimit the entire raw cell, then is whitespace-trimmed.
/// Doubled internal quotes are not unescaped; malformed nested quoting is
/// outside the tokenizer's guarantees.
pub fn tokenize_row(line: &str, delimiter: char) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        if ch == '"' {
            in_quotes = !in_quotes;
            current.push(ch);
        } else if ch == delimiter && !in_quotes {
            cells.push(finish_cell(&current));
            current.clear();
        } else {
            current.push(ch);
        }
    }
    cells.push(finish_cell(&current));

    cells
}

/// Strip enclosing quotes from a raw cell, then trim whitespace
fn finish_cell(raw: &str) -> String {
    let unquoted = if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        &raw[1..raw.len() - 1]
    } else {
        raw
    };
    unquoted.trim().to_string()
}
