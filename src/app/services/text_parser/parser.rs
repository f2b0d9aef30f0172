//! Line-oriented delimited text parser

use tracing::{debug, info};

use crate::app::models::{ImportFormat, ImportResult, ParsedRow};
use crate::app::services::field_parsers::{data_lines, parse_all_numbers};
use crate::constants::{MIN_ROW_FIELDS, messages};

/// Result of parsing a single data line
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    Row(ParsedRow),
    Unparsable,
}

/// Parser for CSV and whitespace separated wind files
#[derive(Debug, Clone, Copy, Default)]
pub struct TextWindParser;

impl TextWindParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse delimited text into rows, recording skipped lines as warnings
    pub fn parse(&self, text: &str) -> ImportResult {
        let mut rows = Vec::new();
        let mut warnings = Vec::new();
        let mut errors = Vec::new();
        let mut uses_comma = false;
        let mut first_line = true;

        for (line_number, line) in data_lines(text) {
            uses_comma |= line.contains(',');

            match parse_line(line) {
                LineOutcome::Row(row) => rows.push(row),
                LineOutcome::Unparsable if first_line || rows.is_empty() => {
                    debug!("Skipping header line {}: {}", line_number, line);
                    warnings.push(format!("line {}: skipped header \"{}\"", line_number, line));
                }
                LineOutcome::Unparsable => {
                    debug!("Unparsable line {}: {}", line_number, line);
                    warnings.push(format!(
                        "line {}: could not parse \"{}\"",
                        line_number, line
                    ));
                }
            }
            first_line = false;
        }

        if rows.is_empty() {
            errors.push(messages::NO_TEXT_ROWS.to_string());
        }

        let format = if uses_comma {
            ImportFormat::Csv
        } else {
            ImportFormat::Sounding
        };

        info!(
            "Parsed {} {} rows with {} warnings",
            rows.len(),
            format,
            warnings.len()
        );

        ImportResult {
            success: !rows.is_empty(),
            format,
            rows,
            detected_settings: None,
            errors,
            warnings,
        }
    }
}

/// Parse one trimmed data line, splitting on commas when present
pub fn parse_line(line: &str) -> LineOutcome {
    let tokens: Vec<&str> = if line.contains(',') {
        line.split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect()
    } else {
        line.split_whitespace().collect()
    };

    if tokens.len() < MIN_ROW_FIELDS {
        return LineOutcome::Unparsable;
    }

    parse_all_numbers(&tokens[..MIN_ROW_FIELDS])
        .and_then(|values| ParsedRow::from_values(&values))
        .map_or(LineOutcome::Unparsable, LineOutcome::Row)
}
