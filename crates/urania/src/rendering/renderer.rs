//! Wheel renderer: turns chart data into a back-to-front scene graph.

use crate::aspects::{filter_aspects, filter_cross_aspects, AspectEdge};
use crate::bodies::{ascendant_degree, houses_known, CelestialBody, HouseCusp, PlanetId};
use crate::chart::ChartData;
use crate::geometry::position_on_circle;
use crate::layout::{
    build_house_segments, build_zodiac_segments, place_bodies_traced, ChartKind, PlacedGlyph,
    RingConfig, SecondaryRing,
};
use crate::rendering::icons::{GlyphRef, IconCache};
use crate::rendering::primitives::{Color, Point, Shape, Stroke, TextAnchor};
use crate::rendering::scene::{RingSide, SceneGraph, SceneLayer, SceneTarget};
use crate::rendering::style::aspect_style;
use crate::rendering::visual_config::VisualConfig;

/// Which optional layers to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub show_aspects: bool,
    pub show_houses: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_aspects: true,
            show_houses: true,
        }
    }
}

/// Renders wheels for one session. Owns the icon cache for that session.
pub struct RingRenderer {
    kind: ChartKind,
    config: RingConfig,
    visual: VisualConfig,
    icons: IconCache,
}

impl RingRenderer {
    /// Renderer for `kind` with custom ring geometry
    pub fn new(kind: ChartKind, config: RingConfig) -> Self {
        Self::with_visual_config(kind, config, VisualConfig::default())
    }

    pub fn with_visual_config(kind: ChartKind, config: RingConfig, visual: VisualConfig) -> Self {
        Self {
            kind,
            config,
            visual,
            icons: IconCache::new(),
        }
    }

    /// Renderer with the built-in preset for `kind`
    pub fn for_kind(kind: ChartKind) -> Self {
        Self::new(kind, RingConfig::for_kind(kind))
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn config(&self) -> &RingConfig {
        &self.config
    }

    pub fn visual_config(&self) -> &VisualConfig {
        &self.visual
    }

    pub fn icons(&self) -> &IconCache {
        &self.icons
    }

    /// End the session: evict every cached icon asset
    pub fn teardown(&mut self) {
        self.icons.evict_all();
    }

    /// Single-ring wheel (natal or composite)
    pub fn render_wheel(
        &mut self,
        bodies: &[CelestialBody],
        cusps: &[HouseCusp],
        aspects: &[AspectEdge],
        options: RenderOptions,
    ) -> SceneGraph {
        let config = self.config.clone();
        let ascendant = ascendant_degree(cusps);
        let mut scene = SceneGraph::new(self.kind, config.viewport(), config.center, ascendant);
        scene.background_color = self.visual.background_color;
        scene.houses_shown = options.show_houses && houses_known(cusps);

        self.draw_background(&mut scene, &config, None);
        self.draw_zodiac(&mut scene, &config);
        self.draw_houses(&mut scene, &config, cusps, options);

        let report = place_bodies_traced(bodies, &config, ascendant);
        self.draw_bodies(&mut scene, &config, &report.glyphs, RingSide::Base);
        scene.glyphs = report.glyphs;
        scene.unresolved_overlaps = report.unresolved;

        if options.show_aspects {
            let edges = filter_aspects(aspects);
            self.draw_aspects(&mut scene, &config, &edges, bodies, bodies);
        }

        log::debug!(
            "rendered {:?} wheel: {} nodes, {} glyphs",
            self.kind,
            scene.nodes.len(),
            scene.glyphs.len()
        );
        scene
    }

    /// Two-ring wheel (synastry or transit).
    ///
    /// `base` sits on the inner ring and sets the rotation; `secondary` is
    /// placed on a ring outside the zodiac band with the same rotation. Only
    /// cross aspects are drawn, from a base body to a secondary body.
    pub fn render_biwheel(
        &mut self,
        base: &ChartData,
        secondary: &ChartData,
        cross_aspects: &[AspectEdge],
        options: RenderOptions,
    ) -> SceneGraph {
        let (config, ring) = with_secondary_ring(&self.config);
        let secondary_config = RingConfig {
            glyph_radius: ring.glyph_radius,
            secondary: None,
            ..config.clone()
        };

        let ascendant = base.ascendant();
        let kind = match self.kind {
            ChartKind::Transit => ChartKind::Transit,
            _ => ChartKind::Synastry,
        };
        let mut scene = SceneGraph::new(kind, config.viewport(), config.center, ascendant);
        scene.background_color = self.visual.background_color;
        scene.houses_shown = options.show_houses && base.houses_known();

        self.draw_background(&mut scene, &config, Some(&ring));
        self.draw_zodiac(&mut scene, &config);
        self.draw_houses(&mut scene, &config, &base.cusps, options);

        let inner = place_bodies_traced(&base.bodies, &config, ascendant);
        let outer = place_bodies_traced(&secondary.bodies, &secondary_config, ascendant);
        self.draw_bodies(&mut scene, &config, &inner.glyphs, RingSide::Base);
        self.draw_bodies(&mut scene, &config, &outer.glyphs, RingSide::Secondary);
        scene.glyphs = inner.glyphs;
        scene.secondary_glyphs = outer.glyphs;
        scene.unresolved_overlaps = inner.unresolved + outer.unresolved;

        if options.show_aspects {
            let edges = filter_cross_aspects(cross_aspects);
            self.draw_aspects(&mut scene, &config, &edges, &base.bodies, &secondary.bodies);
        }

        log::debug!(
            "rendered {:?} biwheel: {} nodes, {} + {} glyphs",
            kind,
            scene.nodes.len(),
            scene.glyphs.len(),
            scene.secondary_glyphs.len()
        );
        scene
    }

    fn draw_background(&self, scene: &mut SceneGraph, config: &RingConfig, ring: Option<&SecondaryRing>) {
        let solid = Stroke::solid(self.visual.circle_color, self.visual.circle_width);

        scene.push(
            SceneLayer::OuterCircle,
            None,
            ring_circle(config.center, config.outer_radius, solid.clone()),
        );

        if let Some(ring) = ring {
            let dashed = Stroke::dashed(
                self.visual.circle_color,
                self.visual.circle_width,
                self.visual.secondary_dash.clone(),
            );
            scene.push(
                SceneLayer::SecondaryCircle,
                None,
                ring_circle(config.center, ring.outer_radius, dashed),
            );
        }

        if scene.houses_shown {
            scene.push(
                SceneLayer::HouseCircle,
                None,
                ring_circle(config.center, config.house_ring_radius, solid.clone()),
            );
        }

        scene.push(
            SceneLayer::InnerCircle,
            None,
            ring_circle(config.center, config.inner_radius, solid),
        );
    }

    fn draw_zodiac(&mut self, scene: &mut SceneGraph, config: &RingConfig) {
        let asc = scene.ascendant_degree;
        let division = Stroke::solid(self.visual.division_color, self.visual.division_width);
        let icon_radius = (config.house_ring_radius + config.outer_radius) / 2.0;

        for segment in build_zodiac_segments() {
            let target = Some(SceneTarget::Sign { sign: segment.sign });
            scene.push(
                SceneLayer::Zodiac,
                target,
                Shape::Line {
                    from: position_on_circle(segment.start_degree, config.house_ring_radius, config.center, asc),
                    to: position_on_circle(segment.start_degree, config.outer_radius, config.center, asc),
                    stroke: division.clone(),
                },
            );

            let fill = self.visual.sign_color(segment.sign);
            let glyph = GlyphRef::Sign(segment.sign);
            let icon_key = self.icons.get_or_recolor(glyph, fill);
            scene.push(
                SceneLayer::Zodiac,
                target,
                Shape::Icon {
                    position: position_on_circle(segment.mid_degree(), icon_radius, config.center, asc),
                    glyph,
                    icon_key,
                    size: self.visual.sign_glyph_size,
                    fill,
                },
            );
        }
    }

    fn draw_houses(&self, scene: &mut SceneGraph, config: &RingConfig, cusps: &[HouseCusp], options: RenderOptions) {
        if !options.show_houses {
            return;
        }
        let Some(segments) = build_house_segments(cusps) else {
            log::debug!("house cusps unavailable, skipping house layer");
            return;
        };

        let asc = scene.ascendant_degree;
        let label_radius = config.inner_radius + self.visual.house_label_offset;
        for segment in segments {
            let target = Some(SceneTarget::House {
                house_number: segment.house_number,
            });
            let width = if segment.is_angular() {
                self.visual.angular_cusp_width
            } else {
                self.visual.cusp_width
            };
            scene.push(
                SceneLayer::Houses,
                target,
                Shape::Line {
                    from: position_on_circle(segment.cusp_degree, config.inner_radius, config.center, asc),
                    to: position_on_circle(segment.cusp_degree, config.house_ring_radius, config.center, asc),
                    stroke: Stroke::solid(self.visual.cusp_color, width),
                },
            );
            scene.push(
                SceneLayer::Houses,
                target,
                Shape::Label {
                    position: position_on_circle(segment.mid_degree(), label_radius, config.center, asc),
                    content: segment.house_number.to_string(),
                    size: self.visual.house_label_size,
                    color: self.visual.house_label_color,
                    anchor: TextAnchor::Middle,
                },
            );
        }
    }

    fn draw_bodies(&mut self, scene: &mut SceneGraph, config: &RingConfig, glyphs: &[PlacedGlyph], side: RingSide) {
        let asc = scene.ascendant_degree;
        let center = config.center;
        let dash = match side {
            RingSide::Base => None,
            RingSide::Secondary => Some(self.visual.secondary_dash.clone()),
        };
        // Base ticks hang inward from the band, secondary ticks outward from it
        let (tick_from, tick_to) = match side {
            RingSide::Base => (config.house_ring_radius, config.house_ring_radius - self.visual.tick_length),
            RingSide::Secondary => (config.outer_radius, config.outer_radius + self.visual.tick_length),
        };

        for glyph in glyphs {
            let planet = glyph.body.name;
            let target = Some(SceneTarget::Body { ring: side, planet });
            let true_degree = glyph.body.ecliptic_degree;

            scene.push(
                SceneLayer::Bodies,
                target,
                Shape::Line {
                    from: position_on_circle(true_degree, tick_from, center, asc),
                    to: position_on_circle(true_degree, tick_to, center, asc),
                    stroke: Stroke::solid(self.visual.tick_color, 1.0),
                },
            );

            if glyph.was_adjusted {
                let stroke = Stroke {
                    color: self.visual.indicator_color,
                    width: self.visual.indicator_width,
                    dash_array: dash.clone(),
                };
                scene.push(
                    SceneLayer::Bodies,
                    target,
                    Shape::Line {
                        from: glyph.position(),
                        to: position_on_circle(true_degree, config.outer_radius, center, asc),
                        stroke,
                    },
                );
            }

            scene.push(
                SceneLayer::Bodies,
                target,
                Shape::Circle {
                    center: glyph.position(),
                    radius: config.glyph_bg_radius,
                    fill: Some(self.visual.background_color),
                    stroke: None,
                },
            );

            let fill = self.visual.planet_color(planet);
            let icon = GlyphRef::Planet(planet);
            let icon_key = self.icons.get_or_recolor(icon, fill);
            scene.push(
                SceneLayer::Bodies,
                target,
                Shape::Icon {
                    position: glyph.position(),
                    glyph: icon,
                    icon_key,
                    size: config.glyph_size,
                    fill,
                },
            );

            if glyph.body.retrograde {
                let offset = config.glyph_size * 0.6;
                scene.push(
                    SceneLayer::Bodies,
                    target,
                    Shape::Label {
                        position: Point::new(glyph.x + offset, glyph.y + offset),
                        content: "R".to_string(),
                        size: self.visual.retrograde_label_size,
                        color: self.visual.retrograde_color,
                        anchor: TextAnchor::Start,
                    },
                );
            }
        }
    }

    /// Aspect lines between true degrees on the inner circle. `body_a` is
    /// looked up in `from_bodies` and `body_b` in `to_bodies`.
    fn draw_aspects(
        &self,
        scene: &mut SceneGraph,
        config: &RingConfig,
        edges: &[AspectEdge],
        from_bodies: &[CelestialBody],
        to_bodies: &[CelestialBody],
    ) {
        let asc = scene.ascendant_degree;
        for edge in edges {
            let (Some(from), Some(to)) = (
                true_degree(from_bodies, edge.body_a),
                true_degree(to_bodies, edge.body_b),
            ) else {
                log::debug!("aspect {:?}-{:?} has no drawable endpoint", edge.body_a, edge.body_b);
                continue;
            };

            scene.push(
                SceneLayer::Aspects,
                Some(SceneTarget::Aspect {
                    from: edge.body_a,
                    to: edge.body_b,
                    aspect_type: edge.aspect_type,
                }),
                Shape::Line {
                    from: position_on_circle(from, config.inner_radius, config.center, asc),
                    to: position_on_circle(to, config.inner_radius, config.center, asc),
                    stroke: aspect_style(edge.aspect_type, edge.orb_degrees, &self.visual),
                },
            );
        }
    }
}

/// Render a single-ring wheel with a throwaway renderer session. The scene
/// is labelled `Natal`; use [`RingRenderer::new`] for composite wheels.
pub fn render_wheel(
    bodies: &[CelestialBody],
    cusps: &[HouseCusp],
    aspects: &[AspectEdge],
    config: &RingConfig,
    options: RenderOptions,
) -> SceneGraph {
    let mut renderer = RingRenderer::new(ChartKind::Natal, config.clone());
    let scene = renderer.render_wheel(bodies, cusps, aspects, options);
    renderer.teardown();
    scene
}

fn ring_circle(center: Point, radius: f64, stroke: Stroke) -> Shape {
    Shape::Circle {
        center,
        radius,
        fill: None,
        stroke: Some(stroke),
    }
}

fn true_degree(bodies: &[CelestialBody], planet: PlanetId) -> Option<f64> {
    bodies
        .iter()
        .find(|body| body.name == planet && !body.is_excluded())
        .map(|body| body.ecliptic_degree)
        .filter(|degree| degree.is_finite())
}

/// The config with a secondary ring, deriving one just outside the zodiac
/// band when the preset has none.
fn with_secondary_ring(config: &RingConfig) -> (RingConfig, SecondaryRing) {
    let ring = config.secondary.clone().unwrap_or_else(|| {
        let step = config.box_size();
        SecondaryRing {
            glyph_radius: config.outer_radius + step,
            outer_radius: config.outer_radius + 2.0 * step,
        }
    });
    let config = RingConfig {
        secondary: Some(ring.clone()),
        ..config.clone()
    };
    (config, ring)
}
