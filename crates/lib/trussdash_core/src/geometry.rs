//! Member geometry.

use serde::{Deserialize, Serialize};

/// A 2D point of member geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometryPoint {
    pub x: f64,
    pub y: f64,
}

impl GeometryPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &GeometryPoint) -> f64 {
        let (dx, dy) = (self.x - other.x, self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

/// Characteristic length of a member: the largest distance between any two
/// of its points, or 0 for fewer than two points.
///
/// All pairs are compared, not just neighbours, so a non-convex outline still
/// reports its full span.
pub fn member_length(points: &[GeometryPoint]) -> f64 {
    points
        .iter()
        .enumerate()
        .flat_map(|(i, a)| points[i + 1..].iter().map(move |b| a.distance_to(b)))
        .fold(0.0, f64::max)
}
