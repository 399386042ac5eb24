use crate::bodies::PlanetId;
use serde::{Deserialize, Serialize};

/// Aspect kinds delivered by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectType {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
    Quincunx,
    Semisextile,
    Semisquare,
    Sesquiquadrate,
}

/// Styling family of an aspect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectHarmony {
    Hard,
    Soft,
    Neutral,
}

/// (abbreviation, display name, exact angle, harmony)
const ASPECT_TABLE: [(&str, &str, f64, AspectHarmony); 9] = [
    ("Co", "conjunction", 0.0, AspectHarmony::Neutral),
    ("Op", "opposition", 180.0, AspectHarmony::Hard),
    ("Tr", "trine", 120.0, AspectHarmony::Soft),
    ("Sq", "square", 90.0, AspectHarmony::Hard),
    ("Sx", "sextile", 60.0, AspectHarmony::Soft),
    ("Qc", "quincunx", 150.0, AspectHarmony::Neutral),
    ("Ss", "semisextile", 30.0, AspectHarmony::Neutral),
    ("Sm", "semisquare", 45.0, AspectHarmony::Hard),
    ("Se", "sesquiquadrate", 135.0, AspectHarmony::Hard),
];

impl AspectType {
    pub const ALL: [AspectType; 9] = [
        AspectType::Conjunction,
        AspectType::Opposition,
        AspectType::Trine,
        AspectType::Square,
        AspectType::Sextile,
        AspectType::Quincunx,
        AspectType::Semisextile,
        AspectType::Semisquare,
        AspectType::Sesquiquadrate,
    ];

    pub fn abbreviation(self) -> &'static str {
        ASPECT_TABLE[self as usize].0
    }

    pub fn display_name(self) -> &'static str {
        ASPECT_TABLE[self as usize].1
    }

    pub fn exact_angle(self) -> f64 {
        ASPECT_TABLE[self as usize].2
    }

    pub fn harmony(self) -> AspectHarmony {
        ASPECT_TABLE[self as usize].3
    }

    pub fn from_abbreviation(code: &str) -> Option<AspectType> {
        AspectType::ALL
            .iter()
            .copied()
            .find(|a| a.abbreviation() == code)
    }

    pub fn from_name(name: &str) -> Option<AspectType> {
        let name = name.trim();
        AspectType::ALL
            .iter()
            .copied()
            .find(|a| a.display_name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for AspectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Coarse orb bucket carried by notation tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrbTier {
    /// Under 1°
    Exact,
    /// 1° to under 3°
    Tight,
    /// 3° to under 6°
    Moderate,
    /// 6° and wider
    Wide,
}

impl OrbTier {
    pub const ALL: [OrbTier; 4] = [OrbTier::Exact, OrbTier::Tight, OrbTier::Moderate, OrbTier::Wide];

    pub fn abbreviation(self) -> &'static str {
        match self {
            OrbTier::Exact => "Ex",
            OrbTier::Tight => "Ti",
            OrbTier::Moderate => "Mo",
            OrbTier::Wide => "Ga",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            OrbTier::Exact => "exact",
            OrbTier::Tight => "tight",
            OrbTier::Moderate => "moderate",
            OrbTier::Wide => "wide",
        }
    }

    pub fn from_abbreviation(code: &str) -> Option<OrbTier> {
        OrbTier::ALL.iter().copied().find(|t| t.abbreviation() == code)
    }

    pub fn from_orb(orb_degrees: f64) -> OrbTier {
        let orb = orb_degrees.abs();
        if orb < 1.0 {
            OrbTier::Exact
        } else if orb < 3.0 {
            OrbTier::Tight
        } else if orb < 6.0 {
            OrbTier::Moderate
        } else {
            OrbTier::Wide
        }
    }
}

impl std::fmt::Display for OrbTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// An aspect between two bodies. Equality ignores endpoint order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AspectEdge {
    pub body_a: PlanetId,
    pub body_b: PlanetId,
    pub aspect_type: AspectType,
    pub orb_degrees: f64,
}

impl AspectEdge {
    pub fn new(body_a: PlanetId, body_b: PlanetId, aspect_type: AspectType, orb_degrees: f64) -> Self {
        Self {
            body_a,
            body_b,
            aspect_type,
            orb_degrees,
        }
    }

    /// Order-independent identity of the edge
    pub fn key(&self) -> (PlanetId, PlanetId, AspectType) {
        if self.body_a <= self.body_b {
            (self.body_a, self.body_b, self.aspect_type)
        } else {
            (self.body_b, self.body_a, self.aspect_type)
        }
    }

    pub fn connects(&self, a: PlanetId, b: PlanetId) -> bool {
        (self.body_a == a && self.body_b == b) || (self.body_a == b && self.body_b == a)
    }

    pub fn same_edge(&self, other: &AspectEdge) -> bool {
        self.key() == other.key()
    }

    pub fn touches_excluded(&self) -> bool {
        self.body_a.is_excluded() || self.body_b.is_excluded()
    }
}

impl PartialEq for AspectEdge {
    fn eq(&self, other: &Self) -> bool {
        self.same_edge(other) && self.orb_degrees == other.orb_degrees
    }
}
