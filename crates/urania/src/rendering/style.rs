use crate::aspects::AspectType;
use crate::rendering::primitives::Stroke;
use crate::rendering::visual_config::VisualConfig;

/// Line prominence for an orb: tighter orbs are stronger.
///
/// `clamp(1 - orb/10, 0.1, 1.0)`; a non-finite orb gets the floor.
pub fn aspect_strength(orb_degrees: f64) -> f64 {
    if !orb_degrees.is_finite() {
        return 0.1;
    }
    (1.0 - orb_degrees.abs() / 10.0).clamp(0.1, 1.0)
}

/// Stroke for an aspect line. Color comes from the aspect family, opacity
/// and width from the orb strength.
pub fn aspect_style(aspect_type: AspectType, orb_degrees: f64, visual: &VisualConfig) -> Stroke {
    let strength = aspect_strength(orb_degrees);
    let color = visual.aspect_color(aspect_type.harmony()).with_opacity(strength);
    let width = visual.aspect_min_width + (visual.aspect_max_width - visual.aspect_min_width) * strength;
    Stroke::solid(color, width)
}
