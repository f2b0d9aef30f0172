//! Tests for the quick-xml element tree

use crate::app::services::xml_parser::tree::{QuickXmlTreeParser, XmlTreeError, XmlTreeParser};

#[test]
fn test_parse_nested_elements() {
    let root = QuickXmlTreeParser
        .parse_tree("<a x=\"1\"><b>one</b><c/><b>two</b></a>")
        .unwrap();

    assert_eq!(root.name, "a");
    assert_eq!(root.attribute("X"), Some("1"));
    assert_eq!(root.children.len(), 3);
    assert_eq!(root.text_content(), "onetwo");

    let names: Vec<&str> = root.descendants().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c", "b"]);
}

#[test]
fn test_unescapes_text_and_attributes() {
    let root = QuickXmlTreeParser
        .parse_tree("<a note=\"x &amp; y\">1 &lt; 2</a>")
        .unwrap();
    assert_eq!(root.attribute("note"), Some("x & y"));
    assert_eq!(root.text, "1 < 2");
}

#[test]
fn test_descendant_text_is_case_insensitive() {
    let root = QuickXmlTreeParser
        .parse_tree("<h><SpdUnits> Kts </SpdUnits></h>")
        .unwrap();
    assert_eq!(root.descendant_text("spdunits"), Some("Kts".to_string()));
    assert_eq!(root.descendant_text("AltUnits"), None);
}

#[test]
fn test_multiple_roots_rejected() {
    let result = QuickXmlTreeParser.parse_tree("<a/><b/>");
    assert!(matches!(result, Err(XmlTreeError::MultipleRoots { .. })));
}

#[test]
fn test_unclosed_element_rejected() {
    assert!(QuickXmlTreeParser.parse_tree("<a><b>text</b>").is_err());
}

#[test]
fn test_mismatched_end_rejected() {
    assert!(QuickXmlTreeParser.parse_tree("<a><b></a></b>").is_err());
}

#[test]
fn test_text_outside_root_rejected() {
    let result = QuickXmlTreeParser.parse_tree("stray <a/>");
    assert!(matches!(result, Err(XmlTreeError::TextOutsideRoot)));
}

#[test]
fn test_empty_document_rejected() {
    let result = QuickXmlTreeParser.parse_tree("   ");
    assert!(matches!(result, Err(XmlTreeError::NoRootElement)));
}
