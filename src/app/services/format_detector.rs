//! Format detection for imported wind files
//!
//! Classifies raw file text as the XML measurement format, comma or
//! whitespace delimited text, or unknown. CSV needs a majority of data
//! lines, while a single numeric whitespace line is enough for the
//! sounding variant: short sounding files often carry only a few data
//! lines among their headers.

use tracing::debug;

use super::field_parsers::{data_lines, parse_all_numbers, strip_byte_order_mark};
use crate::app::models::ImportFormat;
use crate::constants::{MIN_ROW_FIELDS, XML_TARGET_MARKERS};

/// Classify file text into one of the supported import formats
pub fn detect_format(text: &str) -> ImportFormat {
    let trimmed = strip_byte_order_mark(text).trim();
    if XML_TARGET_MARKERS
        .iter()
        .any(|marker| trimmed.contains(*marker))
    {
        return ImportFormat::XmlTarget;
    }

    let lines: Vec<&str> = data_lines(trimmed).map(|(_, line)| line).collect();
    if lines.is_empty() {
        debug!("No data lines found, format unknown");
        return ImportFormat::Unknown;
    }

    let csv_lines = lines
        .iter()
        .filter(|line| line.split(',').count() >= MIN_ROW_FIELDS)
        .count();
    if csv_lines * 2 > lines.len() {
        debug!("{} of {} lines are comma separated", csv_lines, lines.len());
        return ImportFormat::Csv;
    }

    if lines.iter().any(|line| is_numeric_whitespace_line(line)) {
        return ImportFormat::Sounding;
    }

    ImportFormat::Unknown
}

fn is_numeric_whitespace_line(line: &str) -> bool {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    tokens.len() >= MIN_ROW_FIELDS && parse_all_numbers(&tokens[..MIN_ROW_FIELDS]).is_some()
}
