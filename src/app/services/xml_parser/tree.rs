//! Element tree construction for the XML measurement format
//!
//! The XML parser only needs "parse text into a queryable element tree and
//! report well-formedness". That capability is the [`XmlTreeParser`] trait;
//! [`QuickXmlTreeParser`] implements it on top of `quick-xml`.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use thiserror::Error;

/// Well-formedness failures reported by an [`XmlTreeParser`]
#[derive(Error, Debug)]
pub enum XmlTreeError {
    #[error("{0}")]
    Syntax(#[from] quick_xml::Error),

    #[error("element <{name}> is not closed")]
    Unclosed { name: String },

    #[error("unexpected closing tag </{name}>")]
    UnexpectedEnd { name: String },

    #[error("content after root element <{root}>")]
    MultipleRoots { root: String },

    #[error("text outside of root element")]
    TextOutsideRoot,

    #[error("XML declaration allowed only at document start")]
    MisplacedDeclaration,

    #[error("document has no root element")]
    NoRootElement,
}

/// Parse XML text into a single-rooted element tree
pub trait XmlTreeParser {
    fn parse_tree(&self, text: &str) -> Result<XmlElement, XmlTreeError>;
}

/// An XML element with its attributes, text and child elements
#[derive(Debug, Clone, PartialEq, Default)]
pub struct XmlElement {
    /// Local name, without namespace prefix
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlElement>,
    /// Text directly inside this element
    pub text: String,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Attribute value by case-insensitive name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// All text inside this element and its descendants, in document order
    pub fn text_content(&self) -> String {
        let mut content = self.text.clone();
        for child in &self.children {
            content.push_str(&child.text_content());
        }
        content
    }

    /// This element and all descendants in document (pre-)order
    pub fn descendants(&self) -> Vec<&XmlElement> {
        let mut found = Vec::new();
        let mut stack = vec![self];
        while let Some(element) = stack.pop() {
            found.push(element);
            stack.extend(element.children.iter().rev());
        }
        found
    }

    /// First element in document order satisfying the predicate
    pub fn find(&self, predicate: impl Fn(&XmlElement) -> bool) -> Option<&XmlElement> {
        self.descendants()
            .into_iter()
            .find(|element| predicate(element))
    }

    /// Trimmed text of the first descendant with the given case-insensitive name
    pub fn descendant_text(&self, name: &str) -> Option<String> {
        self.descendants()
            .into_iter()
            .skip(1)
            .find(|element| element.name.eq_ignore_ascii_case(name))
            .map(|element| element.text_content().trim().to_string())
    }
}

/// [`XmlTreeParser`] backed by `quick-xml`
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickXmlTreeParser;

impl XmlTreeParser for QuickXmlTreeParser {
    fn parse_tree(&self, text: &str) -> Result<XmlElement, XmlTreeError> {
        let mut reader = Reader::from_str(text);
        reader.check_end_names(true);

        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;
        let mut seen_content = false;

        loop {
            match reader.read_event()? {
                Event::Start(ref e) => {
                    ensure_single_root(&root)?;
                    stack.push(start_element(e)?);
                    seen_content = true;
                }
                Event::Empty(ref e) => {
                    ensure_single_root(&root)?;
                    let element = start_element(e)?;
                    attach(element, &mut stack, &mut root);
                    seen_content = true;
                }
                Event::End(ref e) => {
                    let element = stack.pop().ok_or_else(|| XmlTreeError::UnexpectedEnd {
                        name: String::from_utf8_lossy(e.local_name().as_ref()).into_owned(),
                    })?;
                    attach(element, &mut stack, &mut root);
                }
                Event::Text(e) => {
                    let text = e.unescape()?;
                    match stack.last_mut() {
                        Some(current) => current.text.push_str(&text),
                        None if text.trim().is_empty() => {}
                        None => return Err(XmlTreeError::TextOutsideRoot),
                    }
                    seen_content |= !text.trim().is_empty();
                }
                Event::CData(e) => {
                    let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                    match stack.last_mut() {
                        Some(current) => current.text.push_str(&text),
                        None => return Err(XmlTreeError::TextOutsideRoot),
                    }
                }
                Event::Decl(_) => {
                    if seen_content || !stack.is_empty() || root.is_some() {
                        return Err(XmlTreeError::MisplacedDeclaration);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.pop() {
            return Err(XmlTreeError::Unclosed { name: open.name });
        }

        root.ok_or(XmlTreeError::NoRootElement)
    }
}

fn start_element(e: &BytesStart<'_>) -> Result<XmlElement, XmlTreeError> {
    let mut element = XmlElement::new(String::from_utf8_lossy(e.local_name().as_ref()));
    for attribute in e.attributes() {
        let attribute = attribute.map_err(quick_xml::Error::from)?;
        let key = String::from_utf8_lossy(attribute.key.local_name().as_ref()).into_owned();
        let value = attribute.unescape_value()?.into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn attach(element: XmlElement, stack: &mut [XmlElement], root: &mut Option<XmlElement>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => *root = Some(element),
    }
}

fn ensure_single_root(root: &Option<XmlElement>) -> Result<(), XmlTreeError> {
    match root {
        Some(existing) => Err(XmlTreeError::MultipleRoots {
            root: existing.name.clone(),
        }),
        None => Ok(()),
    }
}
