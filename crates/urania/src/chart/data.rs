use crate::aspects::{filter_aspects, AspectEdge};
use crate::bodies::{ascendant_degree, houses_known, CelestialBody, HouseCusp, PlanetId};
use serde::{Deserialize, Serialize};

/// One chart as the renderer consumes it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub bodies: Vec<CelestialBody>,
    pub cusps: Vec<HouseCusp>,
    pub aspects: Vec<AspectEdge>,
}

impl ChartData {
    pub fn new(bodies: Vec<CelestialBody>, cusps: Vec<HouseCusp>, aspects: Vec<AspectEdge>) -> Self {
        Self {
            bodies,
            cusps,
            aspects,
        }
    }

    pub fn houses_known(&self) -> bool {
        houses_known(&self.cusps)
    }

    /// House 1 cusp, or 0 when houses are unavailable
    pub fn ascendant(&self) -> f64 {
        ascendant_degree(&self.cusps)
    }

    pub fn body(&self, planet: PlanetId) -> Option<&CelestialBody> {
        self.bodies.iter().find(|body| body.name == planet)
    }

    /// Bodies that may be drawn
    pub fn visible_bodies(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter().filter(|body| !body.is_excluded())
    }

    /// Aspects that may be drawn
    pub fn visible_aspects(&self) -> Vec<AspectEdge> {
        filter_aspects(&self.aspects)
    }
}
