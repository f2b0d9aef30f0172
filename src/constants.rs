//! Application constants for the wind profile processor
//!
//! Conversion factors, default settings, XML vocabulary and file routing
//! tables used throughout the import and search pipeline.

// =============================================================================
// Unit Conversion Factors
// =============================================================================

/// Feet to meters
pub const METERS_PER_FOOT: f64 = 0.3048;

/// Meters per second to kilometers per hour
pub const KMH_PER_MS: f64 = 3.6;

/// Knots to kilometers per hour
pub const KMH_PER_KNOT: f64 = 1.852;

/// Degrees in a full circle
pub const FULL_CIRCLE_DEGREES: f64 = 360.0;

/// Offset between "from" and "to" direction conventions
pub const REVERSE_DIRECTION_DEGREES: f64 = 180.0;

// =============================================================================
// Format Detection
// =============================================================================

/// Literal markers identifying the XML measurement format
pub const XML_TARGET_MARKERS: &[&str] = &["<wR>", "<wRs>", "<wR "];

/// UTF-8 byte-order mark some editors write at the start of a file
pub const BYTE_ORDER_MARK: char = '\u{feff}';

/// Line prefixes treated as comments by the detector and text parser
pub const COMMENT_PREFIXES: &[&str] = &["#", "//"];

/// Minimum number of fields (altitude, direction, speed) for a data line
pub const MIN_ROW_FIELDS: usize = 3;

// =============================================================================
// XML Measurement Format
// =============================================================================

/// Synthetic root element used when the document has no single root
pub const XML_SYNTHETIC_ROOT: &str = "windImportRoot";

/// Repeated measurement element name
pub const XML_ROW_ELEMENT: &str = "wR";

/// Accepted header element names (case-insensitive)
pub const XML_HEADER_ELEMENTS: &[&str] = &["header", "hdr", "wh"];

/// Header field names (case-insensitive, attribute or child element)
pub mod xml_fields {
    pub const SPEED_UNITS: &str = "SpdUnits";
    pub const ALTITUDE_UNITS: &str = "AltUnits";
    pub const DIRECTION_MODE: &str = "DirMode";
    pub const DIRECTION_REFERENCE: &str = "DirRef";
    pub const ALTITUDE_REFERENCE: &str = "AltRef";
    pub const ELEVATION: &str = "Elev";
    pub const MAGNETIC_DECLINATION: &str = "MagDec";
}

// =============================================================================
// Import Messages
// =============================================================================

pub mod messages {
    pub const UNKNOWN_FORMAT: &str = "unknown format";
    pub const NO_XML_ROWS: &str = "no measurement elements found";
    pub const NO_TEXT_ROWS: &str = "no wind data found";
}

// =============================================================================
// Wind Search
// =============================================================================

/// Maximum number of matches returned by a search
pub const DEFAULT_MAX_RESULTS: usize = 3;

/// Below this absolute heading delta no turn is suggested
pub const TURN_THRESHOLD_DEGREES: f64 = 1.0;

/// Penalty per m/s of vertical speed for layers not flagged stable
pub const VARIO_PENALTY_FACTOR: f64 = 10.0;

/// Penalty for layers with unknown stability
pub const UNKNOWN_STABILITY_PENALTY: f64 = 20.0;

/// Source id reported for the caller's own layers
pub const DEFAULT_OWN_SOURCE_ID: &str = "own";

/// Colour reported for the caller's own layers
pub const DEFAULT_OWN_COLOR: &str = "#3388ff";

// =============================================================================
// File Routing
// =============================================================================

/// Extensions handled by the trajectory importer
pub const TRAJECTORY_EXTENSIONS: &[&str] = &["gpx", "kml"];

/// Extensions handled by the saved-profile importer
pub const SAVED_PROFILE_EXTENSIONS: &[&str] = &["json"];
