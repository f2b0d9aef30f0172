//! Wind Profile Processor Library
//!
//! A Rust library for importing wind profile measurements and forecasts from
//! heterogeneous file formats into one canonical representation, and for
//! ranking wind layers against a target heading.
//!
//! This library provides tools for:
//! - Detecting the format of wind files (XML measurements, CSV, soundings)
//! - Parsing XML measurement files with header unit/reference metadata
//! - Parsing comma or whitespace delimited text with headers and comments
//! - Normalizing units and reference frames (feet/knots/AGL/magnetic/"to")
//! - Searching own and peer profiles for layers matching a heading
//! - Reading and writing saved canonical profiles

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod field_parsers;
        pub mod format_detector;
        pub mod profile_store;
        pub mod text_parser;
        pub mod unit_normalizer;
        pub mod wind_import;
        pub mod wind_search;
        pub mod xml_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{
    DetectedSettings, ImportFormat, ImportResult, ImportSettings, ParsedRow, PeerProfile,
    SearchResult, TurnDirection, WindLayer, WindSource,
};
pub use app::services::format_detector::detect_format;
pub use app::services::unit_normalizer::normalize;
pub use app::services::wind_import::{FileRoute, import_file, parse, route_file};
pub use app::services::wind_search::{SearchOptions, search};
pub use config::Config;

/// Result type alias for the wind profile processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for wind profile operations
///
/// Parsing problems inside a file are never errors; they are reported in the
/// `errors` and `warnings` of an [`ImportResult`].
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Saved profile could not be read or written
    #[error("Profile format error in '{origin}': {message}")]
    ProfileFormat {
        origin: String,
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Unrecognized value for an import setting
    #[error("Invalid {setting}: '{value}'")]
    InvalidSetting { setting: String, value: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a saved profile error
    pub fn profile_format(
        origin: impl Into<String>,
        message: impl Into<String>,
        source: Option<serde_json::Error>,
    ) -> Self {
        Self::ProfileFormat {
            origin: origin.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid setting error
    pub fn invalid_setting(setting: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidSetting {
            setting: setting.into(),
            value: value.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
