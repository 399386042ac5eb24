//! Mapping decoded tokens back onto the chart they describe.

use crate::aspects::{AspectEdge, AspectType};
use crate::bodies::PlanetId;
use crate::chart::ChartData;
use crate::notation::tokens::NotationToken;
use crate::rendering::{RingSide, SceneTarget};

/// What a host should highlight for one token
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Highlight {
    pub targets: Vec<SceneTarget>,
    /// Chart edges matching an aspect token
    pub edges: Vec<AspectEdge>,
}

impl Highlight {
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn contains(&self, target: &SceneTarget) -> bool {
        self.targets.contains(target)
    }

    fn push(&mut self, target: SceneTarget) {
        if !self.targets.contains(&target) {
            self.targets.push(target);
        }
    }

    fn body(&mut self, chart: Option<&ChartData>, ring: RingSide, planet: PlanetId) -> bool {
        let present = chart
            .and_then(|chart| chart.body(planet))
            .is_some_and(|body| !body.is_excluded());
        if present {
            self.push(SceneTarget::Body { ring, planet });
        }
        present
    }

    fn house(&mut self, chart: &ChartData, house_number: u8) {
        if house_number != 0 && chart.houses_known() {
            self.push(SceneTarget::House { house_number });
        }
    }

    fn edges(&mut self, chart: &ChartData, a: PlanetId, b: PlanetId, aspect_type: AspectType) {
        for edge in chart.visible_aspects() {
            if edge.connects(a, b) && edge.aspect_type == aspect_type {
                self.push(SceneTarget::Aspect {
                    from: edge.body_a,
                    to: edge.body_b,
                    aspect_type,
                });
                self.edges.push(edge);
            }
        }
    }
}

/// Resolve a token against a single chart (natal or composite).
///
/// Two-chart tokens only highlight the side that lives in `chart`; use
/// [`resolve_biwheel`] when both charts are at hand.
pub fn resolve(token: &NotationToken, chart: &ChartData) -> Highlight {
    let mut highlight = Highlight::default();
    let base = Some(chart);
    match token {
        NotationToken::Placement { position, .. } => {
            highlight.body(base, RingSide::Base, position.planet());
            highlight.house(chart, position.house);
        }
        NotationToken::Aspect {
            first,
            second,
            aspect_type,
            ..
        } => {
            highlight.body(base, RingSide::Base, first.planet());
            highlight.body(base, RingSide::Base, second.planet());
            highlight.house(chart, first.house);
            highlight.house(chart, second.house);
            highlight.edges(chart, first.planet(), second.planet(), *aspect_type);
        }
        NotationToken::CompositePlacement { planet, house, .. } => {
            highlight.body(base, RingSide::Base, *planet);
            highlight.house(chart, *house);
        }
        NotationToken::CompositeAspect {
            first,
            second,
            aspect_type,
            ..
        } => {
            highlight.body(base, RingSide::Base, first.planet);
            highlight.body(base, RingSide::Base, second.planet);
            highlight.edges(chart, first.planet, second.planet, *aspect_type);
        }
        NotationToken::SynastryAspect { first, .. } => {
            highlight.body(base, RingSide::Base, first.planet());
        }
        NotationToken::Transit { natal, .. } => {
            highlight.body(base, RingSide::Base, natal.planet);
        }
    }
    highlight
}

/// Resolve a token against a biwheel: `base` on the inner ring (person 1 or
/// the natal chart), `secondary` on the outer ring (person 2 or transits).
pub fn resolve_biwheel(token: &NotationToken, base: &ChartData, secondary: &ChartData) -> Highlight {
    let (inner, outer, aspect_type) = match token {
        NotationToken::SynastryAspect {
            first,
            second,
            aspect_type,
            ..
        } => (first.planet(), second.planet(), *aspect_type),
        NotationToken::Transit {
            transiting,
            natal,
            aspect_type,
            ..
        } => (natal.planet, transiting.planet, *aspect_type),
        _ => return resolve(token, base),
    };

    let mut highlight = Highlight::default();
    let has_inner = highlight.body(Some(base), RingSide::Base, inner);
    let has_outer = highlight.body(Some(secondary), RingSide::Secondary, outer);
    if has_inner && has_outer {
        highlight.push(SceneTarget::Aspect {
            from: inner,
            to: outer,
            aspect_type,
        });
    }
    highlight
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{CelestialBody, HouseCusp};
    use crate::notation::decode;

    fn chart() -> ChartData {
        ChartData::new(
            vec![
                CelestialBody::at(PlanetId::Mercury, 250.0),
                CelestialBody::at(PlanetId::Jupiter, 160.0),
                CelestialBody::at(PlanetId::SouthNode, 10.0),
            ],
            (1..=12).map(|h| HouseCusp::new(h, (h as f64 - 1.0) * 30.0)).collect(),
            vec![AspectEdge::new(PlanetId::Jupiter, PlanetId::Mercury, AspectType::Square, 7.2)],
        )
    }

    #[test]
    fn test_resolve_aspect_matches_reversed_edge() {
        let token = decode("A-MesSa01GaSqJusVi10").unwrap();
        let highlight = resolve(&token, &chart());
        assert_eq!(highlight.edges.len(), 1);
        assert!(highlight.contains(&SceneTarget::Body {
            ring: RingSide::Base,
            planet: PlanetId::Jupiter
        }));
    }

    #[test]
    fn test_resolve_excluded_point_is_empty() {
        let token = decode("Pp-SnsAr00").unwrap();
        assert!(resolve(&token, &chart()).is_empty());
    }
}
