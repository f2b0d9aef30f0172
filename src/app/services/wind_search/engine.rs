//! Ranked search across own and peer wind layers

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::scoring::score_layer;
use crate::app::models::{DirectionMode, PeerProfile, SearchResult, WindLayer};
use crate::constants::{
    DEFAULT_MAX_RESULTS, DEFAULT_OWN_COLOR, DEFAULT_OWN_SOURCE_ID, FULL_CIRCLE_DEGREES,
};

/// Options for a wind search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchOptions {
    /// Number of matches to return
    pub max_results: usize,

    /// Source id reported for the caller's own layers
    pub own_source_id: String,

    /// Colour reported for the caller's own layers
    pub own_color: String,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            own_source_id: DEFAULT_OWN_SOURCE_ID.to_string(),
            own_color: DEFAULT_OWN_COLOR.to_string(),
        }
    }
}

/// Target heading as typed by a user or supplied numerically
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetDirection<'a> {
    Text(&'a str),
    Degrees(f64),
}

impl TargetDirection<'_> {
    /// Validated heading in [0, 360], or `None` when the query has no answer
    pub fn degrees(&self) -> Option<f64> {
        let degrees = match self {
            TargetDirection::Text(text) => text.trim().parse::<f64>().ok()?,
            TargetDirection::Degrees(degrees) => *degrees,
        };
        (degrees.is_finite() && (0.0..=FULL_CIRCLE_DEGREES).contains(&degrees)).then_some(degrees)
    }
}

impl<'a> From<&'a str> for TargetDirection<'a> {
    fn from(text: &'a str) -> Self {
        TargetDirection::Text(text)
    }
}

impl From<f64> for TargetDirection<'_> {
    fn from(degrees: f64) -> Self {
        TargetDirection::Degrees(degrees)
    }
}

impl From<u16> for TargetDirection<'_> {
    fn from(degrees: u16) -> Self {
        TargetDirection::Degrees(f64::from(degrees))
    }
}

/// Rank layers from own and peer profiles by closeness to a target heading
///
/// An invalid target yields no results. Ties keep pooling order: own layers
/// first, then peers in the order given.
pub fn search<'a>(
    target: impl Into<TargetDirection<'a>>,
    own_layers: &[WindLayer],
    peers: &[PeerProfile],
    direction_mode: DirectionMode,
    options: &SearchOptions,
) -> Vec<SearchResult> {
    let target = target.into();
    let Some(degrees) = target.degrees() else {
        debug!("Ignoring search for invalid target {:?}", target);
        return Vec::new();
    };

    let own = own_layers
        .iter()
        .map(|layer| (options.own_source_id.as_str(), options.own_color.as_str(), layer));
    let shared = peers.iter().flat_map(|peer| {
        peer.layers
            .iter()
            .map(move |layer| (peer.id.as_str(), peer.color.as_str(), layer))
    });

    let mut candidates: Vec<SearchResult> = own
        .chain(shared)
        .map(|(source_id, color, layer)| {
            let scored = score_layer(layer, degrees, direction_mode);
            SearchResult {
                source_id: source_id.to_string(),
                color: color.to_string(),
                layer: layer.clone(),
                direction_diff: scored.direction_diff,
                turn_direction: scored.turn_direction,
                score: scored.score,
            }
        })
        .collect();

    debug!(
        "Scored {} candidate layers against {} degrees",
        candidates.len(),
        degrees
    );

    candidates.sort_by(|a, b| a.score.total_cmp(&b.score));
    candidates.truncate(options.max_results);
    candidates
}
