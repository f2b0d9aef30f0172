//! Unit and reference frame conversions
//!
//! Canonical units are meters MSL, km/h and degrees true in the "from"
//! convention.

use crate::app::models::{
    AltitudeReference, AltitudeUnit, DirectionReference, ImportSettings, SpeedUnit,
};
use crate::constants::{FULL_CIRCLE_DEGREES, KMH_PER_KNOT, KMH_PER_MS, METERS_PER_FOOT};

/// Convert a declared altitude to whole meters MSL
///
/// Returns `None` when the result does not fit an `i32`.
pub fn altitude_to_meters_msl(altitude: f64, settings: &ImportSettings) -> Option<i32> {
    let meters = match settings.altitude_unit {
        AltitudeUnit::Meters => altitude,
        AltitudeUnit::Feet => altitude * METERS_PER_FOOT,
    };
    let msl = match settings.altitude_reference {
        AltitudeReference::Msl => meters,
        AltitudeReference::Agl => meters + settings.launch_elevation,
    };
    let rounded = msl.round();
    (f64::from(i32::MIN)..=f64::from(i32::MAX))
        .contains(&rounded)
        .then_some(rounded as i32)
}

/// Convert a declared speed to km/h, rounded to 0.1
pub fn speed_to_kmh(speed: f64, unit: SpeedUnit) -> f64 {
    let kmh = match unit {
        SpeedUnit::Kmh => speed,
        SpeedUnit::Ms => speed * KMH_PER_MS,
        SpeedUnit::Knots => speed * KMH_PER_KNOT,
    };
    round_to_tenth(kmh)
}

/// Convert a declared direction to whole degrees true, "from" convention
pub fn direction_to_true_from(direction: f64, settings: &ImportSettings) -> u16 {
    let from = settings.direction_mode.to_from_convention(direction);
    let true_north = match settings.direction_reference {
        DirectionReference::True => from,
        DirectionReference::Magnetic => {
            (from + settings.magnetic_declination).rem_euclid(FULL_CIRCLE_DEGREES)
        }
    };
    normalize_degrees(true_north.round()) as u16
}

/// Wrap an angle into [0, 360)
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(FULL_CIRCLE_DEGREES);
    // rem_euclid can return 360.0 for tiny negative inputs
    if wrapped >= FULL_CIRCLE_DEGREES {
        0.0
    } else {
        wrapped
    }
}

pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
