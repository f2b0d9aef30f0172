//! Configuration management and validation.
//!
//! Provides the default import settings, the wind source tag for imported
//! layers and the search options. A configuration can be loaded from a JSON
//! file and is then refined by command line arguments.

use crate::app::models::{ImportSettings, WindSource};
use crate::app::services::wind_search::SearchOptions;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Processing configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Settings assumed for fields a file does not declare
    pub import: ImportSettings,

    /// Source tag attached to imported layers
    pub source: WindSource,

    pub search: SearchOptions,
}

impl Config {
    /// Load configuration from a JSON file; missing fields take defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read config {}", path.display()), e))?;
        let config: Config = serde_json::from_str(&json).map_err(|e| {
            Error::configuration(format!("Invalid config file {}: {}", path.display(), e))
        })?;
        debug!("Loaded configuration from {}", path.display());
        config.validate()?;
        Ok(config)
    }

    pub fn with_import_settings(mut self, import: ImportSettings) -> Self {
        self.import = import;
        self
    }

    pub fn with_source(mut self, source: WindSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_launch_elevation(mut self, meters: f64) -> Self {
        self.import.launch_elevation = meters;
        self
    }

    pub fn with_magnetic_declination(mut self, degrees: f64) -> Self {
        self.import.magnetic_declination = degrees;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.search.max_results = max_results;
        self
    }

    /// Validate numeric settings
    pub fn validate(&self) -> Result<()> {
        if !self.import.launch_elevation.is_finite() {
            return Err(Error::configuration(format!(
                "Launch elevation must be a finite number, got {}",
                self.import.launch_elevation
            )));
        }

        let declination = self.import.magnetic_declination;
        if !declination.is_finite() || !(-180.0..=180.0).contains(&declination) {
            return Err(Error::configuration(format!(
                "Magnetic declination {} must be between -180 and 180 degrees",
                declination
            )));
        }

        if self.search.max_results == 0 {
            return Err(Error::configuration(
                "Search must return at least one result",
            ));
        }

        Ok(())
    }
}
