//! Tests for the XML measurement parser

use super::*;
use crate::app::models::{AltitudeUnit, ImportFormat, ParsedRow, SpeedUnit};
use crate::app::services::xml_parser::XmlWindParser;
use crate::app::services::xml_parser::parser::{looks_like_document, parse_row_text, wrap_in_root};
use crate::app::services::xml_parser::tree::{XmlElement, XmlTreeError, XmlTreeParser};
use std::cell::Cell;

#[test]
fn test_header_and_malformed_element() {
    let content = r#"<Header><SpdUnits>Kts</SpdUnits><AltUnits>Feet</AltUnits></Header>
<wR>600 180 20</wR>
<wR>bad</wR>"#;
    let result = XmlWindParser::new().parse(content);

    assert!(result.success);
    assert_eq!(result.format, ImportFormat::XmlTarget);
    assert_eq!(result.rows, vec![ParsedRow::new(600.0, 180.0, 20.0)]);
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("element 2"));
    assert!(result.warnings[0].contains("bad"));

    let detected = result.detected_settings.unwrap();
    assert_eq!(detected.speed_unit, Some(SpeedUnit::Knots));
    assert_eq!(detected.altitude_unit, Some(AltitudeUnit::Feet));
}

#[test]
fn test_comma_separated_element_text() {
    let result = XmlWindParser::new().parse(&create_test_document());
    assert_eq!(result.rows.len(), 2);
    assert_eq!(result.rows[1], ParsedRow::new(2000.0, 90.0, 10.0));
    assert!(result.warnings[0].contains("element 2"));
}

#[test]
fn test_full_document_with_prolog() {
    let result = XmlWindParser::new().parse(&create_full_document());
    assert!(result.success);
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
    assert_eq!(result.rows[1], ParsedRow::new(300.0, 280.0, 7.5));
}

#[test]
fn test_row_text_skips_non_numeric_tokens() {
    assert_eq!(
        parse_row_text("alt 600 dir 180 spd 20 extra 9"),
        Some(ParsedRow::new(600.0, 180.0, 20.0))
    );
    assert_eq!(parse_row_text("600 180"), None);
    assert_eq!(parse_row_text(""), None);
}

#[test]
fn test_no_measurement_elements() {
    let result = XmlWindParser::new().parse("<wRs><Header SpdUnits=\"kts\"/></wRs>");
    assert!(!result.success);
    assert_eq!(result.errors, vec!["no measurement elements found".to_string()]);
}

#[test]
fn test_all_elements_malformed() {
    let result = XmlWindParser::new().parse("<wR>x</wR><wR>1 2</wR>");
    assert!(!result.success);
    assert_eq!(result.warnings.len(), 2);
    assert_eq!(result.errors, vec!["no measurement elements found".to_string()]);
}

#[test]
fn test_malformed_xml_is_fatal() {
    let result = XmlWindParser::new().parse("<wR>600 180 20</wR><wR>1 2 3");
    assert!(!result.success);
    assert!(result.rows.is_empty());
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].starts_with("invalid XML"));
}

#[test]
fn test_document_shape_detection() {
    assert!(looks_like_document("<?xml version=\"1.0\"?><a/>"));
    assert!(looks_like_document("<wRs></wRs>"));
    assert!(!looks_like_document("<!-- note --><wR>1 2 3</wR>"));
    assert!(!looks_like_document("text <wR>1 2 3</wR>"));
}

#[test]
fn test_wrap_drops_declaration() {
    assert_eq!(
        wrap_in_root("<?xml version=\"1.0\"?><wR>1 2 3</wR>"),
        "<windImportRoot><wR>1 2 3</wR></windImportRoot>"
    );
}

#[test]
fn test_leading_comment_is_wrapped() {
    let result = XmlWindParser::new().parse("<!-- exported --><wR>600 180 20</wR>");
    assert!(result.success);
    assert_eq!(result.rows.len(), 1);
}

/// Tree parser that always fails, counting attempts
struct FailingTreeParser {
    attempts: Cell<usize>,
}

impl XmlTreeParser for FailingTreeParser {
    fn parse_tree(&self, _text: &str) -> Result<XmlElement, XmlTreeError> {
        self.attempts.set(self.attempts.get() + 1);
        Err(XmlTreeError::NoRootElement)
    }
}

#[test]
fn test_retry_once_with_injected_parser() {
    let tree_parser = FailingTreeParser {
        attempts: Cell::new(0),
    };
    let parser = XmlWindParser::with_tree_parser(tree_parser);
    let result = parser.parse("<wR>1 2 3</wR>");

    assert!(!result.success);
    assert_eq!(parser_attempts(&parser), 2);
    assert_eq!(
        result.errors,
        vec!["invalid XML: document has no root element".to_string()]
    );
}

fn parser_attempts(parser: &XmlWindParser<FailingTreeParser>) -> usize {
    parser.tree_parser().attempts.get()
}
