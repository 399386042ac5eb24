use crate::bodies::normalize_degrees;
use serde::{Deserialize, Serialize};

/// Point in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Screen angle in degrees for an ecliptic degree.
///
/// The ascendant sits at 9 o'clock and the zodiac runs counter-clockwise.
pub fn screen_angle(degree: f64, ascendant_degree: f64) -> f64 {
    normalize_degrees(180.0 - degree + ascendant_degree)
}

/// Cartesian position of an ecliptic degree on a circle of `radius`.
pub fn position_on_circle(degree: f64, radius: f64, center: Point, ascendant_degree: f64) -> Point {
    let angle = screen_angle(normalize_degrees(degree), ascendant_degree).to_radians();
    Point {
        x: center.x + radius * angle.cos(),
        y: center.y + radius * angle.sin(),
    }
}

/// Inverse of [`position_on_circle`]: (ecliptic degree, radius) of a point.
pub fn degree_at_point(point: Point, center: Point, ascendant_degree: f64) -> (f64, f64) {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    let radius = dx.hypot(dy);
    let angle = dy.atan2(dx).to_degrees();
    (normalize_degrees(180.0 - angle + ascendant_degree), radius)
}

/// Midpoint of the arc running counter-clockwise from `start` to `end`.
pub fn arc_midpoint(start: f64, end: f64) -> f64 {
    let span = normalize_degrees(end - start);
    normalize_degrees(start + span / 2.0)
}
