//! Batch normalization into canonical wind layers

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use super::conversion::{altitude_to_meters_msl, direction_to_true_from, speed_to_kmh};
use crate::app::models::{ImportSettings, ParsedRow, WindLayer, WindSource};

/// Normalize parsed rows into canonical layers stamped with the current time
///
/// The output holds one layer per rounded altitude (the last row for an
/// altitude wins) and is sorted ascending by altitude.
pub fn normalize(
    rows: &[ParsedRow],
    settings: &ImportSettings,
    source: WindSource,
) -> Vec<WindLayer> {
    normalize_at(rows, settings, source, Utc::now())
}

/// Normalize parsed rows with an explicit timestamp
pub fn normalize_at(
    rows: &[ParsedRow],
    settings: &ImportSettings,
    source: WindSource,
    timestamp: DateTime<Utc>,
) -> Vec<WindLayer> {
    let mut by_altitude: BTreeMap<i32, WindLayer> = BTreeMap::new();
    let mut replaced = 0usize;

    for row in rows {
        if !row.is_finite() {
            debug!("Skipping non-finite row {:?}", row);
            continue;
        }

        let Some(altitude) = altitude_to_meters_msl(row.altitude, settings) else {
            warn!("Skipping row with out-of-range altitude {}", row.altitude);
            continue;
        };
        if by_altitude.remove(&altitude).is_some() {
            replaced += 1;
        }

        let layer = WindLayer::new(
            altitude,
            direction_to_true_from(row.direction, settings),
            speed_to_kmh(row.speed, settings.speed_unit),
            timestamp,
            source,
        );
        by_altitude.insert(altitude, layer);
    }

    debug!(
        "Normalized {} rows into {} layers ({} duplicate altitudes replaced)",
        rows.len(),
        by_altitude.len(),
        replaced
    );

    by_altitude.into_values().collect()
}
