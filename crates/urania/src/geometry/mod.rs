//! Polar ↔ screen mapping and box math shared by the placer and renderer.

pub mod bounds;
pub mod polar;

pub use bounds::{BoundingBox, Viewport};
pub use polar::{arc_midpoint, degree_at_point, position_on_circle, screen_angle, Point};
