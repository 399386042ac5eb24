use urania::aspects::{AspectEdge, AspectType};
use urania::bodies::{CelestialBody, HouseCusp, PlanetId, ZodiacSign};
use urania::chart::ChartData;
use urania::geometry::position_on_circle;
use urania::layout::{ChartKind, RingConfig};
use urania::rendering::primitives::{Color, Shape};
use urania::rendering::{
    aspect_style, render_wheel, to_svg, RenderOptions, RingRenderer, RingSide, SceneLayer, SceneTarget,
    VisualConfig,
};

fn equal_cusps(start: f64) -> Vec<HouseCusp> {
    (1..=12)
        .map(|h| HouseCusp::new(h, (start + (h as f64 - 1.0) * 30.0) % 360.0))
        .collect()
}

fn sample_bodies() -> Vec<CelestialBody> {
    vec![
        CelestialBody::new(PlanetId::Sun, 215.0, ZodiacSign::Scorpio, 12, false),
        CelestialBody::new(PlanetId::Moon, 35.0, ZodiacSign::Taurus, 5, false),
        CelestialBody::new(PlanetId::Mercury, 250.0, ZodiacSign::Sagittarius, 1, true),
        CelestialBody::new(PlanetId::SouthNode, 100.0, ZodiacSign::Cancer, 8, false),
    ]
}

fn sample_aspects() -> Vec<AspectEdge> {
    vec![
        AspectEdge::new(PlanetId::Sun, PlanetId::Moon, AspectType::Opposition, 0.5),
        AspectEdge::new(PlanetId::Moon, PlanetId::Sun, AspectType::Opposition, 0.5),
        AspectEdge::new(PlanetId::Sun, PlanetId::SouthNode, AspectType::Square, 2.0),
        AspectEdge::new(PlanetId::Moon, PlanetId::Mercury, AspectType::Quincunx, 5.0),
    ]
}

fn lines(shapes: impl Iterator<Item = Shape>) -> Vec<Shape> {
    shapes.filter(|s| matches!(s, Shape::Line { .. })).collect()
}

#[test]
fn test_layer_order_back_to_front() {
    let scene = render_wheel(
        &sample_bodies(),
        &equal_cusps(100.0),
        &sample_aspects(),
        &RingConfig::natal(),
        RenderOptions::default(),
    );
    assert_eq!(
        scene.layer_order(),
        vec![
            SceneLayer::OuterCircle,
            SceneLayer::HouseCircle,
            SceneLayer::InnerCircle,
            SceneLayer::Zodiac,
            SceneLayer::Houses,
            SceneLayer::Bodies,
            SceneLayer::Aspects,
        ]
    );
    assert!(scene.houses_shown);
    assert_eq!(scene.ascendant_degree, 100.0);
    assert_eq!(scene.kind, ChartKind::Natal);
}

#[test]
fn test_zodiac_always_has_twelve_divisions() {
    let scene = render_wheel(&[], &[], &[], &RingConfig::natal(), RenderOptions::default());
    let zodiac: Vec<_> = scene.layer(SceneLayer::Zodiac).collect();
    assert_eq!(zodiac.len(), 24);
    assert_eq!(
        zodiac.iter().filter(|n| matches!(n.shape, Shape::Icon { .. })).count(),
        12
    );
}

#[test]
fn test_unknown_birth_time_suppresses_houses() {
    let cusps: Vec<HouseCusp> = (1..=12).map(|h| HouseCusp::new(h, f64::NAN)).collect();
    let scene = render_wheel(
        &sample_bodies(),
        &cusps,
        &sample_aspects(),
        &RingConfig::natal(),
        RenderOptions::default(),
    );

    assert!(!scene.houses_shown);
    assert_eq!(scene.ascendant_degree, 0.0);
    assert_eq!(scene.layer(SceneLayer::HouseCircle).count(), 0);
    assert_eq!(scene.layer(SceneLayer::Houses).count(), 0);
    // Other layers still render
    assert_eq!(scene.glyphs.len(), 3);
    assert!(scene.layer(SceneLayer::Aspects).count() > 0);
}

#[test]
fn test_show_houses_off() {
    let options = RenderOptions {
        show_houses: false,
        ..RenderOptions::default()
    };
    let scene = render_wheel(&sample_bodies(), &equal_cusps(0.0), &[], &RingConfig::natal(), options);
    assert_eq!(scene.layer(SceneLayer::Houses).count(), 0);
    assert_eq!(scene.layer(SceneLayer::HouseCircle).count(), 0);
}

#[test]
fn test_angular_cusps_are_thicker() {
    let visual = VisualConfig::default();
    let scene = render_wheel(&[], &equal_cusps(0.0), &[], &RingConfig::natal(), RenderOptions::default());

    let width_of = |house_number: u8| {
        scene
            .nodes_for(SceneTarget::House { house_number })
            .find_map(|node| match &node.shape {
                Shape::Line { stroke, .. } => Some(stroke.width),
                _ => None,
            })
    };
    assert_eq!(width_of(1), Some(visual.angular_cusp_width));
    assert_eq!(width_of(10), Some(visual.angular_cusp_width));
    assert_eq!(width_of(4), Some(visual.cusp_width));
    assert_eq!(scene.layer(SceneLayer::Houses).count(), 24);
}

#[test]
fn test_aspects_filtered_and_deduplicated() {
    let scene = render_wheel(
        &sample_bodies(),
        &equal_cusps(0.0),
        &sample_aspects(),
        &RingConfig::natal(),
        RenderOptions::default(),
    );

    let aspects: Vec<_> = scene.layer(SceneLayer::Aspects).collect();
    assert_eq!(aspects.len(), 2);
    for node in &aspects {
        match node.target {
            Some(SceneTarget::Aspect { from, to, .. }) => {
                assert!(!from.is_excluded() && !to.is_excluded());
            }
            other => panic!("unexpected target {:?}", other),
        }
    }
    assert!(scene.glyphs.iter().all(|g| g.body.name != PlanetId::SouthNode));
}

#[test]
fn test_aspect_lines_use_orb_style() {
    let visual = VisualConfig::default();
    let aspects = vec![AspectEdge::new(PlanetId::Sun, PlanetId::Moon, AspectType::Opposition, 0.5)];
    let scene = render_wheel(&sample_bodies(), &[], &aspects, &RingConfig::natal(), RenderOptions::default());

    let node = scene
        .layer(SceneLayer::Aspects)
        .next()
        .expect("one aspect line");
    match &node.shape {
        Shape::Line { stroke, .. } => {
            assert_eq!(*stroke, aspect_style(AspectType::Opposition, 0.5, &visual));
        }
        other => panic!("unexpected shape {:?}", other),
    }
}

#[test]
fn test_show_aspects_off() {
    let options = RenderOptions {
        show_aspects: false,
        ..RenderOptions::default()
    };
    let scene = render_wheel(&sample_bodies(), &[], &sample_aspects(), &RingConfig::natal(), options);
    assert_eq!(scene.layer(SceneLayer::Aspects).count(), 0);
}

#[test]
fn test_adjusted_glyph_gets_indicator_to_outer_circle() {
    let config = RingConfig::natal();
    let bodies = vec![
        CelestialBody::at(PlanetId::Sun, 120.0),
        CelestialBody::at(PlanetId::Moon, 120.0),
    ];
    let scene = render_wheel(&bodies, &[], &[], &config, RenderOptions::default());

    let sun = lines(
        scene
            .nodes_for(SceneTarget::Body {
                ring: RingSide::Base,
                planet: PlanetId::Sun,
            })
            .map(|n| n.shape.clone()),
    );
    let moon = lines(
        scene
            .nodes_for(SceneTarget::Body {
                ring: RingSide::Base,
                planet: PlanetId::Moon,
            })
            .map(|n| n.shape.clone()),
    );
    // Tick only for the Sun, tick plus indicator for the nudged Moon
    assert_eq!(sun.len(), 1);
    assert_eq!(moon.len(), 2);

    let outer_point = position_on_circle(120.0, config.outer_radius, config.center, 0.0);
    match &moon[1] {
        Shape::Line { to, .. } => {
            assert!((to.x - outer_point.x).abs() < 1e-9);
            assert!((to.y - outer_point.y).abs() < 1e-9);
        }
        other => panic!("unexpected shape {:?}", other),
    }
}

#[test]
fn test_retrograde_label() {
    let scene = render_wheel(&sample_bodies(), &[], &[], &RingConfig::natal(), RenderOptions::default());
    let labels: Vec<_> = scene
        .layer(SceneLayer::Bodies)
        .filter_map(|n| match &n.shape {
            Shape::Label { content, .. } => Some((n.target, content.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(
        labels,
        vec![(
            Some(SceneTarget::Body {
                ring: RingSide::Base,
                planet: PlanetId::Mercury
            }),
            "R".to_string()
        )]
    );
}

#[test]
fn test_biwheel_secondary_ring() {
    let base = ChartData::new(
        vec![
            CelestialBody::at(PlanetId::Sun, 10.0),
            CelestialBody::at(PlanetId::Moon, 100.0),
        ],
        equal_cusps(5.0),
        vec![],
    );
    let secondary = ChartData::new(
        vec![
            CelestialBody::at(PlanetId::Venus, 12.0),
            CelestialBody::at(PlanetId::Mars, 200.0),
            CelestialBody::at(PlanetId::PartOfFortune, 50.0),
        ],
        vec![],
        vec![],
    );
    let cross = vec![
        AspectEdge::new(PlanetId::Sun, PlanetId::Venus, AspectType::Conjunction, 2.0),
        AspectEdge::new(PlanetId::Sun, PlanetId::Venus, AspectType::Conjunction, 2.0),
        AspectEdge::new(PlanetId::Moon, PlanetId::Mars, AspectType::Sextile, 4.0),
        AspectEdge::new(PlanetId::Moon, PlanetId::PartOfFortune, AspectType::Square, 1.0),
    ];

    let mut renderer = RingRenderer::for_kind(ChartKind::Synastry);
    let scene = renderer.render_biwheel(&base, &secondary, &cross, RenderOptions::default());

    assert_eq!(scene.kind, ChartKind::Synastry);
    assert_eq!(scene.ascendant_degree, 5.0);
    assert_eq!(
        scene.layer_order()[..3],
        [SceneLayer::OuterCircle, SceneLayer::SecondaryCircle, SceneLayer::HouseCircle]
    );
    match &scene.layer(SceneLayer::SecondaryCircle).next().map(|n| n.shape.clone()) {
        Some(Shape::Circle { stroke: Some(stroke), .. }) => assert!(stroke.is_dashed()),
        other => panic!("unexpected secondary circle {:?}", other),
    }

    assert_eq!(scene.glyphs.len(), 2);
    assert_eq!(scene.secondary_glyphs.len(), 2);
    let ring = RingConfig::synastry().secondary.expect("synastry preset has a secondary ring");
    assert!(scene.secondary_glyphs.iter().all(|g| g.final_radius >= ring.glyph_radius));
    assert!(scene
        .nodes_for(SceneTarget::Body {
            ring: RingSide::Secondary,
            planet: PlanetId::Venus
        })
        .next()
        .is_some());

    assert_eq!(scene.layer(SceneLayer::Aspects).count(), 2);
    assert!(scene.viewport.width / 2.0 >= ring.outer_radius);
}

#[test]
fn test_biwheel_without_preset_ring_derives_one() {
    let base = ChartData::new(vec![CelestialBody::at(PlanetId::Sun, 10.0)], vec![], vec![]);
    let secondary = ChartData::new(vec![CelestialBody::at(PlanetId::Sun, 10.0)], vec![], vec![]);

    let mut renderer = RingRenderer::new(ChartKind::Transit, RingConfig::natal());
    let scene = renderer.render_biwheel(&base, &secondary, &[], RenderOptions::default());
    assert_eq!(scene.kind, ChartKind::Transit);
    assert_eq!(scene.layer(SceneLayer::SecondaryCircle).count(), 1);
    assert!(scene.secondary_glyphs[0].final_radius > RingConfig::natal().outer_radius);
}

#[test]
fn test_icon_cache_is_session_scoped() {
    let mut renderer = RingRenderer::new(ChartKind::Natal, RingConfig::natal());
    renderer.render_wheel(&sample_bodies(), &[], &[], RenderOptions::default());
    let cached = renderer.icons().len();
    // 12 signs and 3 drawable bodies
    assert_eq!(cached, 15);
    let misses = renderer.icons().misses();

    renderer.render_wheel(&sample_bodies(), &[], &[], RenderOptions::default());
    assert_eq!(renderer.icons().len(), cached);
    assert_eq!(renderer.icons().misses(), misses);
    assert!(renderer.icons().hits() >= cached);

    renderer.teardown();
    assert!(renderer.icons().is_empty());
}

#[test]
fn test_render_is_idempotent() {
    let render = || {
        render_wheel(
            &sample_bodies(),
            &equal_cusps(33.0),
            &sample_aspects(),
            &RingConfig::natal(),
            RenderOptions::default(),
        )
    };
    assert_eq!(render(), render());
}

#[test]
fn test_scene_serializes_tagged_shapes() {
    let scene = render_wheel(&sample_bodies(), &equal_cusps(0.0), &[], &RingConfig::natal(), RenderOptions::default());
    let json = scene.to_json().expect("scene serializes");
    assert!(json.contains("\"type\":\"Circle\"") || json.contains("\"type\":\"circle\""));
    assert!(json.contains("\"layer\":\"outer_circle\""));

    let svg = to_svg(&scene);
    assert!(svg.contains("<line"));
    assert!(svg.contains("data-icon=\"planet:Su@"));
}

#[test]
fn test_color_from_hex() {
    let color = Color::from_hex("#FF000080").expect("rgba hex");
    assert_eq!((color.r, color.g, color.b, color.a), (255, 0, 0, 128));
    assert_eq!(Color::from_hex("#00FF00").map(|c| c.a), Some(255));
    assert!(Color::from_hex("#GG0000").is_none());
    assert!(Color::from_hex("#FFF").is_none());
}
