//! Canonical wind profile files
//!
//! A saved profile is a JSON array of layers already in canonical units, as
//! exported by this tool. Loading bypasses the unit normalizer; layers are
//! only validated and ordered by altitude.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::app::models::{WindLayer, WindSource};
use crate::{Error, Result};

/// One layer of a saved profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileEntry {
    pub altitude: i32,
    pub direction: u16,
    pub speed: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<WindSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_stable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vario: Option<f64>,
}

impl ProfileEntry {
    fn into_layer(self, loaded_at: DateTime<Utc>) -> WindLayer {
        WindLayer {
            altitude: self.altitude,
            direction: self.direction,
            speed: self.speed,
            timestamp: self.timestamp.unwrap_or(loaded_at),
            source: self.source.unwrap_or_default(),
            is_stable: self.is_stable,
            vario: self.vario,
        }
    }
}

impl From<&WindLayer> for ProfileEntry {
    fn from(layer: &WindLayer) -> Self {
        Self {
            altitude: layer.altitude,
            direction: layer.direction,
            speed: layer.speed,
            source: Some(layer.source),
            timestamp: Some(layer.timestamp),
            is_stable: layer.is_stable,
            vario: layer.vario,
        }
    }
}

/// Parse saved profile JSON into layers sorted by altitude
pub fn parse_profile(json: &str, origin: &str) -> Result<Vec<WindLayer>> {
    let entries: Vec<ProfileEntry> = serde_json::from_str(json)
        .map_err(|e| Error::profile_format(origin, "invalid profile JSON", Some(e)))?;

    let loaded_at = Utc::now();
    let mut layers = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        if entry.direction >= 360 {
            return Err(Error::profile_format(
                origin,
                format!("layer {}: direction {} out of range", index + 1, entry.direction),
                None,
            ));
        }
        if !entry.speed.is_finite() || entry.speed < 0.0 {
            return Err(Error::profile_format(
                origin,
                format!("layer {}: invalid speed {}", index + 1, entry.speed),
                None,
            ));
        }
        layers.push(entry.into_layer(loaded_at));
    }

    layers.sort_by_key(|layer| layer.altitude);
    debug!("Loaded {} layers from {}", layers.len(), origin);
    Ok(layers)
}

/// Serialize layers as saved profile JSON
pub fn profile_to_json(layers: &[WindLayer]) -> Result<String> {
    let entries: Vec<ProfileEntry> = layers.iter().map(ProfileEntry::from).collect();
    serde_json::to_string_pretty(&entries)
        .map_err(|e| Error::profile_format("memory", "failed to serialize profile", Some(e)))
}

/// Load a saved profile file
pub fn load_profile(path: &Path) -> Result<Vec<WindLayer>> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| Error::io(format!("Failed to read profile {}", path.display()), e))?;
    parse_profile(&json, &path.display().to_string())
}

/// Write layers to a saved profile file
pub fn save_profile(path: &Path, layers: &[WindLayer]) -> Result<()> {
    let json = profile_to_json(layers)?;
    std::fs::write(path, json)
        .map_err(|e| Error::io(format!("Failed to write profile {}", path.display()), e))
}
