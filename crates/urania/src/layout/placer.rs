//! Collision-avoiding glyph placement on a ring.
//!
//! Bodies are placed one at a time in ascending degree order. A body first
//! tries its true degree at the base radius, then radial pushes outward, then
//! the configured angular offsets at the base and last radius. When nothing
//! clears, the last candidate is kept so a render never fails.

use crate::bodies::{normalize_degrees, CelestialBody};
use crate::geometry::{position_on_circle, BoundingBox, Point};
use crate::layout::config::RingConfig;
use serde::{Deserialize, Serialize};

/// Final draw position of one body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedGlyph {
    pub body: CelestialBody,
    pub final_degree: f64,
    pub final_radius: f64,
    pub x: f64,
    pub y: f64,
    /// Moved off its true degree or base radius
    pub was_adjusted: bool,
}

impl PlacedGlyph {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn bounding_box(&self, config: &RingConfig) -> BoundingBox {
        BoundingBox::centered(self.position(), config.box_size())
    }
}

/// Placement result with the work it took
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementReport {
    pub glyphs: Vec<PlacedGlyph>,
    /// Candidate positions tested against the occupied set
    pub checks: usize,
    /// Glyphs kept at a still-overlapping position
    pub unresolved: usize,
}

impl PlacementReport {
    /// Upper bound on `checks` for `body_count` bodies
    pub fn max_checks(body_count: usize, config: &RingConfig) -> usize {
        body_count * (1 + config.max_attempts as usize + 2 * config.jitter_offsets.len())
    }
}

struct Candidate {
    degree: f64,
    radius: f64,
    position: Point,
    bbox: BoundingBox,
}

struct Placer<'a> {
    config: &'a RingConfig,
    ascendant_degree: f64,
    box_size: f64,
    occupied: Vec<BoundingBox>,
    checks: usize,
}

impl<'a> Placer<'a> {
    fn new(config: &'a RingConfig, ascendant_degree: f64) -> Self {
        Self {
            config,
            ascendant_degree,
            box_size: config.box_size(),
            occupied: Vec::new(),
            checks: 0,
        }
    }

    fn candidate(&self, degree: f64, radius: f64) -> Candidate {
        let degree = normalize_degrees(degree);
        let position = position_on_circle(degree, radius, self.config.center, self.ascendant_degree);
        Candidate {
            degree,
            radius,
            position,
            bbox: BoundingBox::centered(position, self.box_size),
        }
    }

    fn collides(&mut self, candidate: &Candidate) -> bool {
        self.checks += 1;
        self.occupied.iter().any(|placed| placed.overlaps(&candidate.bbox))
    }

    /// Returns the chosen candidate and whether it is collision free.
    fn place(&mut self, true_degree: f64) -> (Candidate, bool) {
        let base_radius = self.config.glyph_radius;
        let mut current = self.candidate(true_degree, base_radius);
        if !self.collides(&current) {
            return (current, true);
        }

        let mut radius = base_radius;
        for attempt in 1..=self.config.max_attempts {
            radius = base_radius + attempt as f64 * self.config.push_increment;
            current = self.candidate(true_degree, radius);
            log::trace!("push {:.2}° to r={:.1} (attempt {})", true_degree, radius, attempt);
            if !self.collides(&current) {
                return (current, true);
            }
        }

        let config = self.config;
        for offset in &config.jitter_offsets {
            for r in [base_radius, radius] {
                current = self.candidate(true_degree + offset, r);
                log::trace!("jitter {:.2}° by {:+.1}° at r={:.1}", true_degree, offset, r);
                if !self.collides(&current) {
                    return (current, true);
                }
            }
        }

        (current, false)
    }
}

/// Place every non-excluded body on the ring described by `config`.
pub fn place_bodies(bodies: &[CelestialBody], config: &RingConfig, ascendant_degree: f64) -> Vec<PlacedGlyph> {
    place_bodies_traced(bodies, config, ascendant_degree).glyphs
}

/// Like [`place_bodies`], also reporting how many candidates were tested.
pub fn place_bodies_traced(
    bodies: &[CelestialBody],
    config: &RingConfig,
    ascendant_degree: f64,
) -> PlacementReport {
    let mut ordered: Vec<&CelestialBody> = bodies
        .iter()
        .filter(|body| !body.is_excluded() && body.ecliptic_degree.is_finite())
        .collect();
    // sort_by is stable, so bodies sharing a degree keep input order
    ordered.sort_by(|a, b| {
        normalize_degrees(a.ecliptic_degree).total_cmp(&normalize_degrees(b.ecliptic_degree))
    });

    let mut placer = Placer::new(config, ascendant_degree);
    let mut glyphs = Vec::with_capacity(ordered.len());
    let mut unresolved = 0;

    for body in ordered {
        let true_degree = normalize_degrees(body.ecliptic_degree);
        let (chosen, clear) = placer.place(true_degree);
        if !clear {
            unresolved += 1;
            log::debug!(
                "{} at {:.2}° left overlapping at {:.2}°, r={:.1}",
                body.name,
                true_degree,
                chosen.degree,
                chosen.radius
            );
        }

        placer.occupied.push(chosen.bbox);
        glyphs.push(PlacedGlyph {
            body: body.clone(),
            final_degree: chosen.degree,
            final_radius: chosen.radius,
            x: chosen.position.x,
            y: chosen.position.y,
            was_adjusted: chosen.degree != true_degree || chosen.radius != config.glyph_radius,
        });
    }

    PlacementReport {
        glyphs,
        checks: placer.checks,
        unresolved,
    }
}
