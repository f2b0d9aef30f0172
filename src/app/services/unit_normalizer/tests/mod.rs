//! Test utilities for unit normalization

use chrono::{DateTime, TimeZone, Utc};

use crate::app::models::ImportSettings;


/// Fixed timestamp for deterministic layer comparison
pub fn test_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// Meters, km/h, from, true, MSL
pub fn default_settings() -> ImportSettings {
    ImportSettings::default()
}
