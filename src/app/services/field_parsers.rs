//! Field parsing utilities shared by the format detector and both parsers
//!
//! Provides line classification and numeric token conversion with the same
//! rules everywhere, so the detector never accepts a line the parsers reject.

use crate::constants::{BYTE_ORDER_MARK, COMMENT_PREFIXES};

/// Drop a single leading byte-order mark
pub fn strip_byte_order_mark(text: &str) -> &str {
    text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text)
}

/// Check whether a line is a comment (`#` or `//` after trimming)
pub fn is_comment_line(line: &str) -> bool {
    let trimmed = line.trim();
    COMMENT_PREFIXES
        .iter()
        .any(|prefix| trimmed.starts_with(*prefix))
}

/// Iterate over lines that are neither blank nor comments
///
/// Yields the 1-based line number alongside the trimmed line.
pub fn data_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !is_comment_line(line))
}

/// Parse a token as a finite number
pub fn parse_number(token: &str) -> Option<f64> {
    token
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Parse all of the given tokens as numbers, failing if any is not numeric
pub fn parse_all_numbers(tokens: &[&str]) -> Option<Vec<f64>> {
    tokens.iter().map(|token| parse_number(token)).collect()
}

/// Split text on whitespace and/or commas, dropping empty tokens
pub fn split_measurement_tokens(text: &str) -> Vec<&str> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_byte_order_mark() {
        assert_eq!(strip_byte_order_mark("\u{feff}600,180,20"), "600,180,20");
        assert_eq!(strip_byte_order_mark("600,180,20"), "600,180,20");
        assert_eq!(strip_byte_order_mark("\u{feff}\u{feff}x"), "\u{feff}x");
    }

    #[test]
    fn test_comment_lines() {
        assert!(is_comment_line("# header"));
        assert!(is_comment_line("   // note"));
        assert!(!is_comment_line("600,180,20"));
        assert!(!is_comment_line(""));
    }

    #[test]
    fn test_data_lines_skip_blank_and_comments() {
        let text = "# title\n\n600 180 20\n// note\n  900 200 25  ";
        let lines: Vec<(usize, &str)> = data_lines(text).collect();
        assert_eq!(lines, vec![(3, "600 180 20"), (5, "900 200 25")]);
    }

    #[test]
    fn test_parse_number_rejects_non_finite() {
        assert_eq!(parse_number(" 12.5 "), Some(12.5));
        assert_eq!(parse_number("-3"), Some(-3.0));
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("abc"), None);
    }

    #[test]
    fn test_parse_all_numbers() {
        assert_eq!(parse_all_numbers(&["1", "2", "3"]), Some(vec![1.0, 2.0, 3.0]));
        assert_eq!(parse_all_numbers(&["1", "x", "3"]), None);
    }

    #[test]
    fn test_split_measurement_tokens_mixed_separators() {
        assert_eq!(
            split_measurement_tokens(" 600, 180\t20 ,,5 "),
            vec!["600", "180", "20", "5"]
        );
        assert!(split_measurement_tokens("  ,, ").is_empty());
    }
}
