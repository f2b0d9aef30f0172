//! Header metadata extraction for the XML measurement format
//!
//! The optional header element declares units and reference frames for the
//! rows that follow. Each field may be written as an attribute of the header
//! or as a child element; unrecognized values are left undetected so caller
//! settings apply.

use std::str::FromStr;
use tracing::{debug, warn};

use super::tree::XmlElement;
use crate::app::models::{AltitudeUnit, DetectedSettings};
use crate::app::services::field_parsers::parse_number;
use crate::constants::{METERS_PER_FOOT, XML_HEADER_ELEMENTS, xml_fields};

/// Locate the header element of a parsed document
pub fn find_header(root: &XmlElement) -> Option<&XmlElement> {
    root.find(|element| {
        XML_HEADER_ELEMENTS
            .iter()
            .any(|name| element.name.eq_ignore_ascii_case(name))
    })
}

/// Read unit and reference declarations from a header element
pub fn parse_header(header: &XmlElement) -> DetectedSettings {
    let mut detected = DetectedSettings {
        speed_unit: parse_enum_field(header, xml_fields::SPEED_UNITS),
        altitude_unit: parse_enum_field(header, xml_fields::ALTITUDE_UNITS),
        direction_mode: parse_enum_field(header, xml_fields::DIRECTION_MODE),
        direction_reference: parse_enum_field(header, xml_fields::DIRECTION_REFERENCE),
        altitude_reference: parse_enum_field(header, xml_fields::ALTITUDE_REFERENCE),
        magnetic_declination: parse_numeric_field(header, xml_fields::MAGNETIC_DECLINATION),
        ..Default::default()
    };

    // Elevation is declared in the header's altitude unit
    detected.launch_elevation =
        parse_numeric_field(header, xml_fields::ELEVATION).map(|elevation| {
            match detected.altitude_unit {
                Some(AltitudeUnit::Feet) => elevation * METERS_PER_FOOT,
                _ => elevation,
            }
        });

    debug!("Detected header settings: {:?}", detected);
    detected
}

/// Raw value of a header field, from an attribute or a child element
fn field_value(header: &XmlElement, field: &str) -> Option<String> {
    header
        .attribute(field)
        .map(|value| value.trim().to_string())
        .or_else(|| header.descendant_text(field))
        .filter(|value| !value.is_empty())
}

fn parse_enum_field<T: FromStr>(header: &XmlElement, field: &str) -> Option<T> {
    let value = field_value(header, field)?;
    match value.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!("Unrecognized {} value '{}' in header", field, value);
            None
        }
    }
}

fn parse_numeric_field(header: &XmlElement, field: &str) -> Option<f64> {
    let value = field_value(header, field)?;
    let parsed = parse_number(&value);
    if parsed.is_none() {
        warn!("Non-numeric {} value '{}' in header", field, value);
    }
    parsed
}
