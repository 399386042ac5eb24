use crate::aspects::AspectHarmony;
use crate::bodies::{PlanetId, ZodiacSign};
use crate::rendering::primitives::Color;

/// Visual styling configuration for chart elements
#[derive(Debug, Clone, PartialEq)]
pub struct VisualConfig {
    pub background_color: Color,
    pub circle_color: Color,
    pub circle_width: f64,
    pub division_color: Color,
    pub division_width: f64,
    pub cusp_color: Color,
    pub cusp_width: f64,
    /// Houses 1 and 10
    pub angular_cusp_width: f64,
    pub house_label_color: Color,
    pub house_label_size: f64,
    pub house_label_offset: f64,
    pub sign_glyph_size: f64,
    pub tick_length: f64,
    pub tick_color: Color,
    /// Faint line from a nudged glyph back to its true degree
    pub indicator_color: Color,
    pub indicator_width: f64,
    pub retrograde_label_size: f64,
    pub retrograde_color: Color,
    pub hard_aspect_color: Color,
    pub soft_aspect_color: Color,
    pub neutral_aspect_color: Color,
    pub aspect_min_width: f64,
    pub aspect_max_width: f64,
    /// Dash pattern for everything on the secondary ring
    pub secondary_dash: Vec<f64>,
}

impl VisualConfig {
    pub fn planet_color(&self, planet: PlanetId) -> Color {
        Color::from_hex_or_white(planet.info().color)
    }

    pub fn sign_color(&self, sign: ZodiacSign) -> Color {
        Color::from_hex_or_white(sign.info().color)
    }

    pub fn aspect_color(&self, harmony: AspectHarmony) -> Color {
        match harmony {
            AspectHarmony::Hard => self.hard_aspect_color,
            AspectHarmony::Soft => self.soft_aspect_color,
            AspectHarmony::Neutral => self.neutral_aspect_color,
        }
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        // Traditional dark theme
        Self {
            background_color: Color::from_hex_or_white("#1A1A1A"),
            circle_color: Color::from_hex_or_white("#D4AF37"), // Gold
            circle_width: 1.5,
            division_color: Color::from_hex_or_white("#444444"),
            division_width: 1.0,
            cusp_color: Color::from_hex_or_white("#CCCCCC"),
            cusp_width: 1.0,
            angular_cusp_width: 2.5,
            house_label_color: Color::from_hex_or_white("#CCCCCC"),
            house_label_size: 10.0,
            house_label_offset: 14.0,
            sign_glyph_size: 20.0,
            tick_length: 6.0,
            tick_color: Color::from_hex_or_white("#EEEEEE"),
            indicator_color: Color::from_hex_or_white("#EEEEEE").with_opacity(0.35),
            indicator_width: 0.75,
            retrograde_label_size: 8.0,
            retrograde_color: Color::from_hex_or_white("#FF8C00"), // DarkOrange
            hard_aspect_color: Color::from_hex_or_white("#FF4500"), // OrangeRed
            soft_aspect_color: Color::from_hex_or_white("#27AE60"), // Green
            neutral_aspect_color: Color::from_hex_or_white("#9E9E9E"),
            aspect_min_width: 0.5,
            aspect_max_width: 2.5,
            secondary_dash: vec![4.0, 3.0],
        }
    }
}
