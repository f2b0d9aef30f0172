//! Unit normalization of parsed rows into canonical wind layers
//!
//! - [`conversion`] - Altitude, speed and direction conversions
//! - [`normalizer`] - Per-batch conversion, altitude deduplication and ordering

pub mod conversion;
pub mod normalizer;

#[cfg(test)]
mod tests;

pub use normalizer::{normalize, normalize_at};
