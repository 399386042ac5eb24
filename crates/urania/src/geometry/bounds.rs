use crate::geometry::polar::Point;
use serde::{Deserialize, Serialize};

/// Axis-aligned box around a glyph
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Square of side `size` centered on `center`
    pub fn centered(center: Point, size: f64) -> Self {
        let half = size / 2.0;
        Self {
            min_x: center.x - half,
            min_y: center.y - half,
            max_x: center.x + half,
            max_y: center.y + half,
        }
    }

    /// Strict overlap; boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.min_x < other.max_x
            && self.max_x > other.min_x
            && self.min_y < other.max_y
            && self.max_y > other.min_y
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point::new((self.min_x + self.max_x) / 2.0, (self.min_y + self.max_y) / 2.0)
    }
}

/// Visible region of a scene
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Square viewport around `center` reaching `extent` in every direction
    pub fn around(center: Point, extent: f64) -> Self {
        Self {
            x: center.x - extent,
            y: center.y - extent,
            width: extent * 2.0,
            height: extent * 2.0,
        }
    }

    pub fn contains(&self, bbox: &BoundingBox) -> bool {
        bbox.min_x >= self.x
            && bbox.min_y >= self.y
            && bbox.max_x <= self.x + self.width
            && bbox.max_y <= self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let a = BoundingBox::centered(Point::new(0.0, 0.0), 10.0);
        let b = BoundingBox::centered(Point::new(9.0, 9.0), 10.0);
        let c = BoundingBox::centered(Point::new(10.0, 0.0), 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        // touching edges
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_viewport_contains() {
        let view = Viewport::around(Point::new(0.0, 0.0), 20.0);
        assert!(view.contains(&BoundingBox::centered(Point::new(10.0, 10.0), 10.0)));
        assert!(!view.contains(&BoundingBox::centered(Point::new(18.0, 0.0), 10.0)));
    }
}
