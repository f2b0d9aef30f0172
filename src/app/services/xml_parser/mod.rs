//! Parser for the XML wind measurement format
//!
//! ## Architecture
//!
//! - [`tree`] - XML tree capability and its `quick-xml` implementation
//! - [`header`] - Unit and reference metadata from the header element
//! - [`parser`] - Document wrapping, retry and measurement row extraction
//!
//! ## Usage
//!
//! ```rust
//! use wind_profile_processor::app::services::xml_parser::XmlWindParser;
//!
//! let result = XmlWindParser::new().parse("<wR>600 180 20</wR><wR>900 200 25</wR>");
//! assert!(result.success);
//! assert_eq!(result.rows.len(), 2);
//! ```

pub mod header;
pub mod parser;
pub mod tree;

#[cfg(test)]
mod tests;

pub use parser::XmlWindParser;
pub use tree::{QuickXmlTreeParser, XmlElement, XmlTreeError, XmlTreeParser};
