//! Parser for comma or whitespace delimited wind text files
//!
//! Each data line carries altitude, direction and speed as its first three
//! fields. Lines are handled independently, so a file may mix separators,
//! and a bad line only produces a warning.
//!
//! ## Usage
//!
//! ```rust
//! use wind_profile_processor::app::models::ImportFormat;
//! use wind_profile_processor::app::services::text_parser::TextWindParser;
//!
//! let result = TextWindParser::new().parse("alt,dir,spd\n600,180,20\n1500,270,35");
//! assert_eq!(result.format, ImportFormat::Csv);
//! assert_eq!(result.rows.len(), 2);
//! ```

pub mod parser;

#[cfg(test)]
mod tests;

pub use parser::{LineOutcome, TextWindParser, parse_line};
