//! Core XML measurement parser
//!
//! Turns `xml-target` content into header settings and measurement rows.
//! Parsing never fails outward: malformed documents and unusable elements are
//! reported through the `errors` and `warnings` of the [`ImportResult`].

use tracing::{debug, info, warn};

use super::header::{find_header, parse_header};
use super::tree::{QuickXmlTreeParser, XmlElement, XmlTreeParser};
use crate::app::models::{ImportFormat, ImportResult, ParsedRow};
use crate::app::services::field_parsers::{parse_number, split_measurement_tokens};
use crate::constants::{MIN_ROW_FIELDS, XML_ROW_ELEMENT, XML_SYNTHETIC_ROOT, messages};

/// Parser for the XML wind measurement format
#[derive(Debug, Clone, Default)]
pub struct XmlWindParser<P = QuickXmlTreeParser> {
    tree_parser: P,
}

impl XmlWindParser<QuickXmlTreeParser> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: XmlTreeParser> XmlWindParser<P> {
    /// Create a parser using a specific XML tree implementation
    pub fn with_tree_parser(tree_parser: P) -> Self {
        Self { tree_parser }
    }

    pub(crate) fn tree_parser(&self) -> &P {
        &self.tree_parser
    }

    /// Parse XML content into rows and detected header settings
    pub fn parse(&self, content: &str) -> ImportResult {
        let root = match self.parse_document(content) {
            Ok(root) => root,
            Err(message) => {
                warn!("XML import aborted: {}", message);
                return ImportResult::failed(ImportFormat::XmlTarget, message);
            }
        };

        let detected = find_header(&root)
            .map(parse_header)
            .filter(|detected| !detected.is_empty());

        let mut rows = Vec::new();
        let mut warnings = Vec::new();
        let mut errors = Vec::new();

        let elements = root
            .descendants()
            .into_iter()
            .filter(|element| element.name == XML_ROW_ELEMENT);

        for (index, element) in elements.enumerate() {
            let raw = element.text_content();
            match parse_row_text(&raw) {
                Some(row) => rows.push(row),
                None => {
                    debug!("Skipped measurement element {}: {:?}", index + 1, raw);
                    warnings.push(format!(
                        "measurement element {} skipped, expected 3 numbers: \"{}\"",
                        index + 1,
                        raw.trim()
                    ));
                }
            }
        }

        if rows.is_empty() {
            errors.push(messages::NO_XML_ROWS.to_string());
        }

        info!(
            "Parsed {} XML measurement rows with {} warnings",
            rows.len(),
            warnings.len()
        );

        ImportResult {
            success: !rows.is_empty(),
            format: ImportFormat::XmlTarget,
            rows,
            detected_settings: detected,
            errors,
            warnings,
        }
    }

    /// Parse the document, wrapping bare element sequences in a synthetic root
    fn parse_document(&self, content: &str) -> Result<XmlElement, String> {
        let trimmed = content.trim();
        let first_attempt = if looks_like_document(trimmed) {
            trimmed.to_string()
        } else {
            wrap_in_root(trimmed)
        };

        match self.tree_parser.parse_tree(&first_attempt) {
            Ok(root) => Ok(root),
            Err(first_error) => {
                debug!("XML parse failed ({}), retrying wrapped", first_error);
                self.tree_parser
                    .parse_tree(&wrap_in_root(trimmed))
                    .map_err(|error| format!("invalid XML: {}", error))
            }
        }
    }
}

/// Take the first three numeric tokens of an element's text
pub fn parse_row_text(text: &str) -> Option<ParsedRow> {
    let values: Vec<f64> = split_measurement_tokens(text)
        .into_iter()
        .filter_map(parse_number)
        .take(MIN_ROW_FIELDS)
        .collect();
    ParsedRow::from_values(&values)
}

/// A prolog or a leading start tag means the content is a complete document
pub(crate) fn looks_like_document(trimmed: &str) -> bool {
    if trimmed.starts_with("<?xml") {
        return true;
    }
    let mut chars = trimmed.chars();
    chars.next() == Some('<') && chars.next().is_some_and(|c| c.is_alphabetic() || c == '_')
}

/// Wrap content in the synthetic root, dropping any XML declaration
pub(crate) fn wrap_in_root(trimmed: &str) -> String {
    let body = match trimmed.strip_prefix("<?xml") {
        Some(rest) => rest
            .find("?>")
            .map(|end| &rest[end + 2..])
            .unwrap_or(rest),
        None => trimmed,
    };
    format!("<{0}>{1}</{0}>", XML_SYNTHETIC_ROOT, body)
}
