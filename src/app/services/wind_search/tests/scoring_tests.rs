//! Tests for per-layer scoring

use super::*;
use crate::app::models::{DirectionMode, TurnDirection};
use crate::app::services::wind_search::scoring::{
    comparison_direction, direction_diff, score_layer, stability_penalty, turn_direction,
};

#[test]
fn test_direction_diff_shortest_path() {
    assert_eq!(direction_diff(90.0, 90.0), 0.0);
    assert_eq!(direction_diff(10.0, 350.0), 20.0);
    assert_eq!(direction_diff(350.0, 10.0), 20.0);
    assert_eq!(direction_diff(0.0, 180.0), 180.0);
    assert_eq!(direction_diff(0.0, 360.0), 0.0);
}

#[test]
fn test_turn_direction() {
    assert_eq!(turn_direction(95.0, 90.0), TurnDirection::Right);
    assert_eq!(turn_direction(85.0, 90.0), TurnDirection::Left);
    assert_eq!(turn_direction(90.5, 90.0), TurnDirection::None);
    assert_eq!(turn_direction(10.0, 350.0), TurnDirection::Right);
    assert_eq!(turn_direction(350.0, 10.0), TurnDirection::Left);
    // exactly opposite wraps to +180
    assert_eq!(turn_direction(270.0, 90.0), TurnDirection::Right);
}

#[test]
fn test_comparison_direction_modes() {
    let layer = layer(600, 90);
    assert_eq!(comparison_direction(&layer, DirectionMode::From), 90.0);
    assert_eq!(comparison_direction(&layer, DirectionMode::To), 270.0);
    assert_eq!(comparison_direction(&super::layer(600, 270), DirectionMode::To), 90.0);
}

#[test]
fn test_stability_penalty() {
    assert_eq!(stability_penalty(&layer(600, 90).with_stability(true)), 0.0);
    assert_eq!(
        stability_penalty(&layer(600, 90).with_stability(true).with_vario(3.0)),
        0.0
    );
    assert_eq!(stability_penalty(&layer(600, 90).with_vario(-1.5)), 15.0);
    assert_eq!(stability_penalty(&layer(600, 90).with_stability(false)), 20.0);
    assert_eq!(stability_penalty(&layer(600, 90)), 20.0);
}

#[test]
fn test_score_layer() {
    let scored = score_layer(&layer(600, 95).with_vario(2.0), 90.0, DirectionMode::From);
    assert_eq!(scored.direction_diff, 5.0);
    assert_eq!(scored.penalty, 20.0);
    assert_eq!(scored.score, 25.0);
    assert_eq!(scored.turn_direction, TurnDirection::Right);
}
