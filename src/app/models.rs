//! Data models for wind profile processing
//!
//! This module contains the core data structures shared by the parsers, the
//! unit normalizer and the wind search engine: parsed rows in file units,
//! import settings, the canonical wind layer and search results.

use crate::constants::{FULL_CIRCLE_DEGREES, REVERSE_DIRECTION_DEGREES};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Parsed Rows
// =============================================================================

/// A single measurement row as read from a file, still in declared units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParsedRow {
    pub altitude: f64,
    pub direction: f64,
    pub speed: f64,
}

impl ParsedRow {
    pub fn new(altitude: f64, direction: f64, speed: f64) -> Self {
        Self {
            altitude,
            direction,
            speed,
        }
    }

    /// Build a row from the first three values of a token slice
    pub fn from_values(values: &[f64]) -> Option<Self> {
        match values {
            [altitude, direction, speed, ..] => Some(Self::new(*altitude, *direction, *speed)),
            _ => None,
        }
    }

    /// Check that all three values are finite numbers
    pub fn is_finite(&self) -> bool {
        self.altitude.is_finite() && self.direction.is_finite() && self.speed.is_finite()
    }
}

// =============================================================================
// Unit and Reference Enums
// =============================================================================

/// Unit of recorded altitudes (and header elevation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AltitudeUnit {
    #[default]
    Meters,
    Feet,
}

impl FromStr for AltitudeUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(AltitudeUnit::Meters),
            "ft" | "foot" | "feet" => Ok(AltitudeUnit::Feet),
            _ => Err(Error::invalid_setting("altitude unit", s)),
        }
    }
}

/// Unit of recorded wind speeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedUnit {
    #[default]
    Kmh,
    Ms,
    Knots,
}

impl FromStr for SpeedUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "kmh" | "km/h" | "kph" | "kmph" => Ok(SpeedUnit::Kmh),
            "ms" | "m/s" | "mps" => Ok(SpeedUnit::Ms),
            "kts" | "kt" | "kn" | "knot" | "knots" => Ok(SpeedUnit::Knots),
            _ => Err(Error::invalid_setting("speed unit", s)),
        }
    }
}

/// Whether a recorded direction is where the wind comes from or goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionMode {
    #[default]
    From,
    To,
}

impl DirectionMode {
    /// Convert a direction recorded in this convention to the "from" convention
    pub fn to_from_convention(self, direction: f64) -> f64 {
        match self {
            DirectionMode::From => direction,
            DirectionMode::To => {
                (direction + REVERSE_DIRECTION_DEGREES).rem_euclid(FULL_CIRCLE_DEGREES)
            }
        }
    }
}

impl FromStr for DirectionMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "from" => Ok(DirectionMode::From),
            "to" => Ok(DirectionMode::To),
            _ => Err(Error::invalid_setting("direction mode", s)),
        }
    }
}

/// North reference of recorded directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionReference {
    #[default]
    True,
    Magnetic,
}

impl FromStr for DirectionReference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "true" | "t" | "geographic" => Ok(DirectionReference::True),
            "magnetic" | "mag" | "m" => Ok(DirectionReference::Magnetic),
            _ => Err(Error::invalid_setting("direction reference", s)),
        }
    }
}

/// Vertical reference of recorded altitudes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AltitudeReference {
    #[default]
    Msl,
    Agl,
}

impl FromStr for AltitudeReference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "msl" | "amsl" => Ok(AltitudeReference::Msl),
            "agl" => Ok(AltitudeReference::Agl),
            _ => Err(Error::invalid_setting("altitude reference", s)),
        }
    }
}

// =============================================================================
// Import Settings
// =============================================================================

/// Settings describing the units and reference frames of an imported file
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportSettings {
    pub altitude_unit: AltitudeUnit,
    pub speed_unit: SpeedUnit,
    pub direction_mode: DirectionMode,
    pub direction_reference: DirectionReference,
    pub altitude_reference: AltitudeReference,

    /// Launch elevation in meters, used only for AGL altitudes
    pub launch_elevation: f64,

    /// Magnetic declination in degrees, used only for magnetic directions
    pub magnetic_declination: f64,
}

/// Settings detected from embedded file metadata
///
/// Each field is `Some` only when the file declared a recognized value for it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude_unit: Option<AltitudeUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_unit: Option<SpeedUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction_mode: Option<DirectionMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction_reference: Option<DirectionReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude_reference: Option<AltitudeReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_elevation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magnetic_declination: Option<f64>,
}

impl DetectedSettings {
    /// True when no setting was detected
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overlay detected values on caller settings
    pub fn apply_to(&self, settings: &ImportSettings) -> ImportSettings {
        ImportSettings {
            altitude_unit: self.altitude_unit.unwrap_or(settings.altitude_unit),
            speed_unit: self.speed_unit.unwrap_or(settings.speed_unit),
            direction_mode: self.direction_mode.unwrap_or(settings.direction_mode),
            direction_reference: self
                .direction_reference
                .unwrap_or(settings.direction_reference),
            altitude_reference: self
                .altitude_reference
                .unwrap_or(settings.altitude_reference),
            launch_elevation: self.launch_elevation.unwrap_or(settings.launch_elevation),
            magnetic_declination: self
                .magnetic_declination
                .unwrap_or(settings.magnetic_declination),
        }
    }
}

// =============================================================================
// Canonical Wind Layer
// =============================================================================

/// Origin of a wind layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindSource {
    Manual,
    Pibal,
    Windsond,
    Forecast,
    Measured,
    #[default]
    Imported,
}

impl fmt::Display for WindSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WindSource::Manual => "manual",
            WindSource::Pibal => "pibal",
            WindSource::Windsond => "windsond",
            WindSource::Forecast => "forecast",
            WindSource::Measured => "measured",
            WindSource::Imported => "imported",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for WindSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "manual" => Ok(WindSource::Manual),
            "pibal" => Ok(WindSource::Pibal),
            "windsond" => Ok(WindSource::Windsond),
            "forecast" => Ok(WindSource::Forecast),
            "measured" => Ok(WindSource::Measured),
            "imported" => Ok(WindSource::Imported),
            _ => Err(Error::invalid_setting("wind source", s)),
        }
    }
}

/// Canonical wind layer: meters MSL, true-north "from" degrees, km/h
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindLayer {
    /// Altitude in whole meters above mean sea level
    pub altitude: i32,

    /// Direction the wind blows from, degrees true in [0, 359]
    pub direction: u16,

    /// Speed in km/h rounded to 0.1
    pub speed: f64,

    pub timestamp: DateTime<Utc>,

    pub source: WindSource,

    /// Layer flagged as thermally stable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_stable: Option<bool>,

    /// Vertical speed reading in m/s
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vario: Option<f64>,
}

impl WindLayer {
    pub fn new(
        altitude: i32,
        direction: u16,
        speed: f64,
        timestamp: DateTime<Utc>,
        source: WindSource,
    ) -> Self {
        Self {
            altitude,
            direction,
            speed,
            timestamp,
            source,
            is_stable: None,
            vario: None,
        }
    }

    pub fn with_stability(mut self, is_stable: bool) -> Self {
        self.is_stable = Some(is_stable);
        self
    }

    pub fn with_vario(mut self, vario: f64) -> Self {
        self.vario = Some(vario);
        self
    }
}

// =============================================================================
// Import Result
// =============================================================================

/// Classified file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImportFormat {
    XmlTarget,
    /// Comma separated delimited text
    Csv,
    /// Whitespace separated delimited text
    Sounding,
    Unknown,
}

impl ImportFormat {
    pub fn is_delimited(self) -> bool {
        matches!(self, ImportFormat::Csv | ImportFormat::Sounding)
    }
}

impl fmt::Display for ImportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImportFormat::XmlTarget => "xml-target",
            ImportFormat::Csv => "csv",
            ImportFormat::Sounding => "sounding",
            ImportFormat::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// Outcome of parsing one file's text
///
/// `errors` explain an unsuccessful or aborted import; `warnings` record
/// skipped rows and never affect `success`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    pub success: bool,
    pub format: ImportFormat,
    pub rows: Vec<ParsedRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_settings: Option<DetectedSettings>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ImportResult {
    /// Result with no rows and a single error
    pub fn failed(format: ImportFormat, error: impl Into<String>) -> Self {
        Self {
            success: false,
            format,
            rows: Vec::new(),
            detected_settings: None,
            errors: vec![error.into()],
            warnings: Vec::new(),
        }
    }

    /// Effective settings after overlaying detected values on caller settings
    pub fn effective_settings(&self, settings: &ImportSettings) -> ImportSettings {
        match &self.detected_settings {
            Some(detected) => detected.apply_to(settings),
            None => *settings,
        }
    }
}

// =============================================================================
// Wind Search
// =============================================================================

/// Suggested turn towards a matching layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnDirection {
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "R")]
    Right,
    #[serde(rename = "")]
    None,
}

impl fmt::Display for TurnDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            TurnDirection::Left => "L",
            TurnDirection::Right => "R",
            TurnDirection::None => "",
        };
        write!(f, "{}", symbol)
    }
}

/// A wind profile shared by another team member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerProfile {
    pub id: String,
    pub display_name: String,
    pub color: String,
    pub layers: Vec<WindLayer>,
}

/// One ranked match produced by a wind search
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub source_id: String,
    pub color: String,
    pub layer: WindLayer,
    /// Shortest angular distance to the target, degrees in [0, 180]
    pub direction_diff: f64,
    pub turn_direction: TurnDirection,
    pub score: f64,
}
