//! Wind file import pipeline
//!
//! Dispatches raw text to the matching parser, then overlays detected header
//! settings on caller settings and normalizes the rows into canonical layers.
//! Also decides which importer a file belongs to from its extension.

use std::path::Path;
use tracing::{info, warn};

use super::field_parsers::strip_byte_order_mark;
use super::format_detector::detect_format;
use super::text_parser::TextWindParser;
use super::unit_normalizer::normalize;
use super::xml_parser::XmlWindParser;
use crate::app::models::{ImportFormat, ImportResult, ImportSettings, WindLayer, WindSource};
use crate::constants::{SAVED_PROFILE_EXTENSIONS, TRAJECTORY_EXTENSIONS, messages};
use crate::{Error, Result};

/// Importer responsible for a selected file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRoute {
    /// Flight track, handled by the trajectory importer
    Trajectory,
    /// Previously exported canonical profile
    SavedProfile,
    /// Anything else goes through format detection and parsing
    WindImport,
}

/// Pick the importer for a file path by extension (case-insensitive)
pub fn route_file(path: &Path) -> FileRoute {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if TRAJECTORY_EXTENSIONS.contains(&extension.as_str()) {
        FileRoute::Trajectory
    } else if SAVED_PROFILE_EXTENSIONS.contains(&extension.as_str()) {
        FileRoute::SavedProfile
    } else {
        FileRoute::WindImport
    }
}

/// Detect the format of raw text and parse it
pub fn parse(text: &str) -> ImportResult {
    let text = strip_byte_order_mark(text);
    match detect_format(text) {
        ImportFormat::XmlTarget => XmlWindParser::new().parse(text),
        ImportFormat::Csv | ImportFormat::Sounding => TextWindParser::new().parse(text),
        ImportFormat::Unknown => {
            warn!("Could not classify import content");
            ImportResult::failed(ImportFormat::Unknown, messages::UNKNOWN_FORMAT)
        }
    }
}

/// Parse result together with the settings used and the normalized layers
#[derive(Debug, Clone)]
pub struct ImportOutcome {
    pub result: ImportResult,
    /// Caller settings with detected header values applied
    pub settings: ImportSettings,
    pub layers: Vec<WindLayer>,
}

impl ImportOutcome {
    pub fn success(&self) -> bool {
        self.result.success
    }
}

/// Parse and normalize file text in one step
pub fn import_text(text: &str, settings: &ImportSettings, source: WindSource) -> ImportOutcome {
    let result = parse(text);
    let settings = result.effective_settings(settings);
    let layers = if result.success {
        normalize(&result.rows, &settings, source)
    } else {
        Vec::new()
    };

    info!(
        "Imported {} layers from {} rows ({} format)",
        layers.len(),
        result.rows.len(),
        result.format
    );

    ImportOutcome {
        result,
        settings,
        layers,
    }
}

/// Read a wind file and import it
pub fn import_file(
    path: &Path,
    settings: &ImportSettings,
    source: WindSource,
) -> Result<ImportOutcome> {
    let bytes = std::fs::read(path)
        .map_err(|e| Error::io(format!("Failed to read file {}", path.display()), e))?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(import_text(&text, settings, source))
}
