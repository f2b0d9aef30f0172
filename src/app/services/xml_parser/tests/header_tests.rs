//! Tests for XML header metadata extraction

use super::*;
use crate::app::models::{
    AltitudeReference, AltitudeUnit, DirectionMode, DirectionReference, SpeedUnit,
};
use crate::app::services::xml_parser::header::{find_header, parse_header};
use crate::app::services::xml_parser::tree::{QuickXmlTreeParser, XmlTreeParser};

#[test]
fn test_child_element_header() {
    let root = QuickXmlTreeParser
        .parse_tree(&format!("<root>{}</root>", create_test_document()))
        .unwrap();
    let header = find_header(&root).expect("header element");
    let detected = parse_header(header);

    assert_eq!(detected.speed_unit, Some(SpeedUnit::Knots));
    assert_eq!(detected.altitude_unit, Some(AltitudeUnit::Feet));
    assert_eq!(detected.direction_mode, None);
    assert_eq!(detected.launch_elevation, None);
}

#[test]
fn test_attribute_header_with_all_fields() {
    let root = QuickXmlTreeParser
        .parse_tree(create_full_document().trim())
        .unwrap();
    let detected = parse_header(find_header(&root).unwrap());

    assert_eq!(detected.speed_unit, Some(SpeedUnit::Ms));
    assert_eq!(detected.altitude_unit, Some(AltitudeUnit::Meters));
    assert_eq!(detected.direction_mode, Some(DirectionMode::To));
    assert_eq!(detected.direction_reference, Some(DirectionReference::Magnetic));
    assert_eq!(detected.altitude_reference, Some(AltitudeReference::Agl));
    assert_eq!(detected.launch_elevation, Some(450.0));
    assert_eq!(detected.magnetic_declination, Some(2.5));
}

#[test]
fn test_elevation_converted_from_feet() {
    let root = QuickXmlTreeParser
        .parse_tree("<Hdr AltUnits=\"FT\" Elev=\"1000\"/>")
        .unwrap();
    let detected = parse_header(find_header(&root).unwrap());

    let elevation = detected.launch_elevation.unwrap();
    assert!((elevation - 304.8).abs() < 1e-9);
}

#[test]
fn test_unrecognized_values_left_undetected() {
    let root = QuickXmlTreeParser
        .parse_tree("<header SpdUnits=\"furlongs\" DirRef=\"grid\" Elev=\"high\" AltRef=\"msl\"/>")
        .unwrap();
    let detected = parse_header(find_header(&root).unwrap());

    assert_eq!(detected.speed_unit, None);
    assert_eq!(detected.direction_reference, None);
    assert_eq!(detected.launch_elevation, None);
    assert_eq!(detected.altitude_reference, Some(AltitudeReference::Msl));
}

#[test]
fn test_no_header_element() {
    let root = QuickXmlTreeParser.parse_tree("<wR>1 2 3</wR>").unwrap();
    assert!(find_header(&root).is_none());
}
