use std::f32::consts::FRAC_1_SQRT_2;

use crate::{
    config::{DirectionConfig, YAxis},
    geometry::{angle_between_degrees, length},
    types::{DirectionCategory, DirectionMembership, Point3},
};

/// Canonical unit vector for a direction. Left/right follow the landmark
/// x axis, forward points toward the camera (negative z).
pub fn reference_vector(category: DirectionCategory, y_axis: YAxis) -> Point3 {
    let up = match y_axis {
        YAxis::Down => -1.0,
        YAxis::Up => 1.0,
    };
    let d = FRAC_1_SQRT_2;
    match category {
        DirectionCategory::VerticalUp => [0.0, up, 0.0],
        DirectionCategory::VerticalDown => [0.0, -up, 0.0],
        DirectionCategory::HorizontalLeft => [-1.0, 0.0, 0.0],
        DirectionCategory::HorizontalRight => [1.0, 0.0, 0.0],
        DirectionCategory::DiagonalUpLeft => [-d, up * d, 0.0],
        DirectionCategory::DiagonalUpRight => [d, up * d, 0.0],
        DirectionCategory::DiagonalDownLeft => [-d, -up * d, 0.0],
        DirectionCategory::DiagonalDownRight => [d, -up * d, 0.0],
        DirectionCategory::Forward => [0.0, 0.0, -1.0],
        DirectionCategory::Backward => [0.0, 0.0, 1.0],
    }
}

/// Each category is scored on its own: 1 when the finger lies on the
/// reference vector, falling linearly to 0 at `falloff_degrees`.
pub fn classify_direction(direction: Point3, config: &DirectionConfig) -> DirectionMembership {
    let mut scores = [0.0; 10];
    if length(direction) < 1e-5 {
        return DirectionMembership(scores);
    }

    for category in DirectionCategory::ALL {
        let reference = reference_vector(category, config.y_axis);
        let angle = angle_between_degrees(direction, reference);
        scores[category.index()] = (1.0 - angle / config.falloff_degrees).max(0.0);
    }

    DirectionMembership(scores)
}
