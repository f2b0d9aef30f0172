//! Per-layer scoring for the wind search

use crate::app::models::{DirectionMode, TurnDirection, WindLayer};
use crate::constants::{
    FULL_CIRCLE_DEGREES, TURN_THRESHOLD_DEGREES, UNKNOWN_STABILITY_PENALTY, VARIO_PENALTY_FACTOR,
};

/// Score components for one candidate layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerScore {
    pub direction_diff: f64,
    pub turn_direction: TurnDirection,
    pub penalty: f64,
    pub score: f64,
}

/// Direction of a layer in the active display convention
pub fn comparison_direction(layer: &WindLayer, mode: DirectionMode) -> f64 {
    mode.to_from_convention(f64::from(layer.direction))
}

/// Shortest angular distance between two headings, in [0, 180]
pub fn direction_diff(direction: f64, target: f64) -> f64 {
    let diff = (direction - target).abs() % FULL_CIRCLE_DEGREES;
    if diff > 180.0 { FULL_CIRCLE_DEGREES - diff } else { diff }
}

/// Turn needed from the target heading towards a direction
pub fn turn_direction(direction: f64, target: f64) -> TurnDirection {
    let mut delta = (direction - target).rem_euclid(FULL_CIRCLE_DEGREES);
    if delta > 180.0 {
        delta -= FULL_CIRCLE_DEGREES;
    }

    if delta.abs() < TURN_THRESHOLD_DEGREES {
        TurnDirection::None
    } else if delta > 0.0 {
        TurnDirection::Right
    } else {
        TurnDirection::Left
    }
}

/// Penalty for layers not known to be stable
pub fn stability_penalty(layer: &WindLayer) -> f64 {
    if layer.is_stable == Some(true) {
        return 0.0;
    }
    match layer.vario.filter(|vario| vario.is_finite()) {
        Some(vario) => VARIO_PENALTY_FACTOR * vario.abs(),
        None => UNKNOWN_STABILITY_PENALTY,
    }
}

/// Score a layer against a validated target heading; lower is better
pub fn score_layer(layer: &WindLayer, target: f64, mode: DirectionMode) -> LayerScore {
    let direction = comparison_direction(layer, mode);
    let direction_diff = direction_diff(direction, target);
    let penalty = stability_penalty(layer);

    LayerScore {
        direction_diff,
        turn_direction: turn_direction(direction, target),
        penalty,
        score: direction_diff + penalty,
    }
}
