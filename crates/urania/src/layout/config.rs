use crate::geometry::{Point, Viewport};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Margin kept around the outermost drawn element
const VIEW_MARGIN: f64 = 8.0;

/// Wheel variant a preset is tuned for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Natal,
    Composite,
    Synastry,
    Transit,
}

/// Ring drawn outside the zodiac band for a second chart's bodies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondaryRing {
    pub glyph_radius: f64,
    pub outer_radius: f64,
}

/// Geometry constants for one chart type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingConfig {
    pub center: Point,
    /// Outer edge of the zodiac band
    pub outer_radius: f64,
    /// Inner edge of the zodiac band, outer edge of the houses
    pub house_ring_radius: f64,
    /// Aspect circle
    pub inner_radius: f64,
    /// Base anchor radius for body glyphs
    pub glyph_radius: f64,
    pub glyph_size: f64,
    /// Radius of the disc drawn behind a glyph
    pub glyph_bg_radius: f64,
    pub padding: f64,
    pub max_attempts: u32,
    pub push_increment: f64,
    /// Angular offsets in degrees, tried in order
    pub jitter_offsets: Vec<f64>,
    pub secondary: Option<SecondaryRing>,
}

#[derive(Error, Debug, PartialEq)]
pub enum RingConfigError {
    #[error("{0} must be a positive number")]
    NotPositive(&'static str),
    #[error("{0} must be a finite, non-negative number")]
    Negative(&'static str),
    #[error("{0} must be finite")]
    NotFinite(&'static str),
    #[error("radii must satisfy inner < house ring < outer")]
    RadiusOrder,
    #[error("secondary ring must lie outside the zodiac band")]
    SecondaryInsideBand,
    #[error("secondary glyph radius must be inside the secondary outer radius")]
    SecondaryOrder,
}

impl RingConfig {
    pub fn natal() -> Self {
        Self {
            center: Point::new(300.0, 300.0),
            outer_radius: 280.0,
            house_ring_radius: 240.0,
            inner_radius: 110.0,
            glyph_radius: 190.0,
            glyph_size: 22.0,
            glyph_bg_radius: 13.0,
            padding: 4.0,
            max_attempts: 4,
            push_increment: 12.0,
            jitter_offsets: vec![4.0, -4.0, 8.0, -8.0, 12.0, -12.0],
            secondary: None,
        }
    }

    pub fn composite() -> Self {
        Self::natal()
    }

    pub fn synastry() -> Self {
        Self {
            secondary: Some(SecondaryRing {
                glyph_radius: 305.0,
                outer_radius: 330.0,
            }),
            ..Self::natal()
        }
    }

    pub fn transit() -> Self {
        Self::synastry()
    }

    pub fn for_kind(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Natal => Self::natal(),
            ChartKind::Composite => Self::composite(),
            ChartKind::Synastry => Self::synastry(),
            ChartKind::Transit => Self::transit(),
        }
    }

    /// Side of the square collision box around a glyph
    pub fn box_size(&self) -> f64 {
        self.glyph_size.max(2.0 * self.glyph_bg_radius) + self.padding
    }

    /// Farthest a glyph on this ring can be pushed, including its half box
    pub fn max_glyph_extent(&self) -> f64 {
        self.glyph_radius + self.max_attempts as f64 * self.push_increment + self.box_size() / 2.0
    }

    /// Config for placing bodies on the secondary ring, if there is one
    pub fn secondary_placement(&self) -> Option<RingConfig> {
        self.secondary.as_ref().map(|ring| RingConfig {
            glyph_radius: ring.glyph_radius,
            secondary: None,
            ..self.clone()
        })
    }

    /// Square view box large enough for every ring and worst-case glyph push
    pub fn viewport(&self) -> Viewport {
        let mut extent = self.outer_radius.max(self.max_glyph_extent());
        if let Some(secondary) = self.secondary_placement() {
            extent = extent.max(secondary.max_glyph_extent());
        }
        if let Some(ring) = &self.secondary {
            extent = extent.max(ring.outer_radius);
        }
        Viewport::around(self.center, extent + VIEW_MARGIN)
    }

    pub fn validate(&self) -> Result<(), RingConfigError> {
        let positive = [
            ("outer_radius", self.outer_radius),
            ("house_ring_radius", self.house_ring_radius),
            ("inner_radius", self.inner_radius),
            ("glyph_radius", self.glyph_radius),
            ("glyph_size", self.glyph_size),
            ("push_increment", self.push_increment),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(RingConfigError::NotPositive(name));
            }
        }
        for (name, value) in [("glyph_bg_radius", self.glyph_bg_radius), ("padding", self.padding)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(RingConfigError::Negative(name));
            }
        }
        if !(self.box_size() > 0.0) {
            return Err(RingConfigError::NotPositive("box_size"));
        }
        if !(self.center.x.is_finite() && self.center.y.is_finite()) {
            return Err(RingConfigError::NotFinite("center"));
        }
        if !self.jitter_offsets.iter().all(|offset| offset.is_finite()) {
            return Err(RingConfigError::NotFinite("jitter_offsets"));
        }
        if !(self.inner_radius < self.house_ring_radius && self.house_ring_radius < self.outer_radius) {
            return Err(RingConfigError::RadiusOrder);
        }
        if let Some(ring) = &self.secondary {
            if ring.glyph_radius <= self.outer_radius || ring.outer_radius <= self.outer_radius {
                return Err(RingConfigError::SecondaryInsideBand);
            }
            if !(ring.glyph_radius < ring.outer_radius) {
                return Err(RingConfigError::SecondaryOrder);
            }
        }
        Ok(())
    }
}

impl Default for RingConfig {
    fn default() -> Self {
        Self::natal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_validate() {
        for kind in [ChartKind::Natal, ChartKind::Composite, ChartKind::Synastry, ChartKind::Transit] {
            assert_eq!(RingConfig::for_kind(kind).validate(), Ok(()));
        }
    }

    #[test]
    fn test_box_size_uses_larger_of_glyph_and_disc() {
        let config = RingConfig::natal();
        assert_eq!(config.box_size(), 30.0);
    }

    #[test]
    fn test_viewport_covers_worst_case_push() {
        let config = RingConfig::natal();
        let view = config.viewport();
        assert!(view.width / 2.0 >= config.max_glyph_extent());

        let synastry = RingConfig::synastry();
        let outer = synastry.secondary_placement().map(|c| c.max_glyph_extent()).unwrap_or(0.0);
        assert!(synastry.viewport().width / 2.0 >= outer);
    }

    #[test]
    fn test_validate_rejects_bad_order() {
        let config = RingConfig {
            inner_radius: 260.0,
            ..RingConfig::natal()
        };
        assert_eq!(config.validate(), Err(RingConfigError::RadiusOrder));
    }

    #[test]
    fn test_validate_rejects_collapsed_box() {
        let negative_disc = RingConfig {
            glyph_bg_radius: -5.0,
            ..RingConfig::natal()
        };
        assert_eq!(negative_disc.validate(), Err(RingConfigError::Negative("glyph_bg_radius")));

        let negative_padding = RingConfig {
            padding: -40.0,
            ..RingConfig::natal()
        };
        assert_eq!(negative_padding.validate(), Err(RingConfigError::Negative("padding")));
    }

    #[test]
    fn test_validate_rejects_non_finite_center_and_jitter() {
        let center = RingConfig {
            center: Point::new(f64::NAN, 300.0),
            ..RingConfig::natal()
        };
        assert_eq!(center.validate(), Err(RingConfigError::NotFinite("center")));

        let jitter = RingConfig {
            jitter_offsets: vec![4.0, f64::INFINITY],
            ..RingConfig::natal()
        };
        assert_eq!(jitter.validate(), Err(RingConfigError::NotFinite("jitter_offsets")));
    }

    #[test]
    fn test_validate_rejects_inverted_secondary_ring() {
        let config = RingConfig {
            secondary: Some(SecondaryRing {
                glyph_radius: 400.0,
                outer_radius: 300.0,
            }),
            ..RingConfig::natal()
        };
        assert_eq!(config.validate(), Err(RingConfigError::SecondaryOrder));
    }
}
