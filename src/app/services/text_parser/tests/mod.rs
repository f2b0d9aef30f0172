//! Test fixtures for the delimited text parser


/// Whitespace sounding with a title, column header and comments
pub fn create_test_sounding() -> String {
    r#"# Windsond export
Station  Test Hill
alt dir spd
600 180 20
// mid-profile comment

900   200   25.5
1500 270 35"#
        .to_string()
}
