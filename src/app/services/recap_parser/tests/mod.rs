//! Test utilities and fixtures for recap parser testing

use std::io::Write;
use tempfile::NamedTempFile;

mod parser_tests;
mod tokenizer_tests;

/// Recap content with one complete event block
pub fn create_single_event_recap() -> String {
    "\
8/1/2023,Allentown PA,,,DCI Eastern Classic,50\n\
Corps,General Effect 1,Brass,Percussion,Total\n\
Blue Devils,19.2,19.3,19.1,98.2\n\
Bluecoats,19.0,19.1,19.4,97.8\n\
Carolina Crown,18.8,19.5,18.7,97.1\n"
        .to_string()
}

/// Recap content with two event blocks and interleaved noise rows
pub fn create_two_event_recap() -> String {
    "\
Scores courtesy of the recap archive\n\
7/15/2023,Denver CO,,,Drums Along the Rockies,34\n\
Corps,General Effect 1,Brass,Total\n\
Blue Knights,17.5,18.2,88.45\n\
\n\
Phantom Regiment,17.8,17.9,89.10\n\
* tie broken by percussion\n\
8/1/2023,Allentown PA,,,DCI Eastern Classic,50\n\
Corps,General Effect 1,Brass,Total\n\
Boston Crusaders,18.9,18.8,95.30\n"
        .to_string()
}

/// Helper to create a temporary recap file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
