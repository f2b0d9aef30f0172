//! Nearest-direction search over own and peer wind profiles
//!
//! - [`scoring`] - Angular distance, turn hints and stability penalties
//! - [`engine`] - Target validation, candidate pooling and ranking
//!
//! ## Usage
//!
//! ```rust
//! use chrono::Utc;
//! use wind_profile_processor::app::models::{DirectionMode, WindLayer, WindSource};
//! use wind_profile_processor::app::services::wind_search::{SearchOptions, search};
//!
//! let layers = vec![WindLayer::new(900, 90, 10.0, Utc::now(), WindSource::Measured).with_stability(true)];
//! let results = search("90", &layers, &[], DirectionMode::From, &SearchOptions::default());
//! assert_eq!(results[0].score, 0.0);
//! ```

pub mod engine;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use engine::{SearchOptions, TargetDirection, search};
