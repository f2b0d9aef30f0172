//! Test utilities for the wind search engine

use chrono::{TimeZone, Utc};

use crate::app::models::{PeerProfile, WindLayer, WindSource};

mod scoring_tests;

/// Layer at the given altitude and direction with unknown stability
pub fn layer(altitude: i32, direction: u16) -> WindLayer {
    WindLayer::new(
        altitude,
        direction,
        10.0,
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        WindSource::Measured,
    )
}

pub fn peer(id: &str, color: &str, layers: Vec<WindLayer>) -> PeerProfile {
    PeerProfile {
        id: id.to_string(),
        display_name: format!("Pilot {}", id),
        color: color.to_string(),
        layers,
    }
}
