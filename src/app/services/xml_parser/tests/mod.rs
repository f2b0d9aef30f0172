//! Test fixtures for the XML measurement parser

mod header_tests;
mod parser_tests;
mod tree_tests;

/// Document with a header, two valid rows and one malformed row
pub fn create_test_document() -> String {
    r#"<Header>
  <SpdUnits>Kts</SpdUnits>
  <AltUnits>Feet</AltUnits>
</Header>
<wR>600 180 20</wR>
<wR>bad</wR>
<wR>2000, 90, 10</wR>"#
        .to_string()
}

/// Complete document with a prolog and attribute-style header
pub fn create_full_document() -> String {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<wRs>
  <wH SpdUnits="m/s" AltUnits="m" DirMode="to" DirRef="Mag" AltRef="AGL" Elev="450" MagDec="2.5"/>
  <wR>100 270 5</wR>
  <wR>300 280 7.5</wR>
</wRs>"#
        .to_string()
}
