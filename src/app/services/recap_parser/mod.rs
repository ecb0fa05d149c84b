//! Recap parser for drum corps score files
//!
//! Recap files are semi-structured delimited text: each event block begins
//! with a date row, the next row names the scoring columns, and the
//! following rows carry one corps' scores each until the next date row or
//! end of file. This module reconstructs normalized events from that
//! layout.
//!
//! ## Architecture
//!
//! - [`tokenizer`] - Quoted-field row splitting
//! - [`captions`] - Header label -> caption code normalization
//! - [`parser`] - Row-oriented state machine and file orchestration
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use recap_processor::app::services::recap_parser::RecapParser;
//!
//! let parser = RecapParser::new(',');
//! let result = parser.parse_str(
//!     "7/4/2023,Denver CO,,,Drums Along the Rockies,12\n\
//!      Corps,General Effect 1,Brass,Total\n\
//!      Blue Knights,17.5,18.2,88.45\n",
//!     "example",
//! );
//!
//! assert_eq!(result.events.len(), 1);
//! assert_eq!(result.events[0].scores[0].corps, "Blue Knights");
//! ```

pub mod captions;
pub mod parser;
pub mod stats;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use captions::normalize_caption;
pub use parser::{ParserState, RecapParser, RowOutcome, Transition};
pub use stats::{ParseResult, ParseStats};
pub use tokenizer::tokenize_row;
