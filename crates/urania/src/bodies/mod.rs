pub mod planets;
pub mod signs;

pub use planets::{PlanetId, SymbolInfo, EXCLUDED_POINTS};
pub use signs::ZodiacSign;

use serde::{Deserialize, Serialize};

/// Normalize a longitude into [0, 360). NaN stays NaN.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let normalized = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360.0
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// A body as delivered by the backend.
///
/// `sign` and `house` are trusted as given; they are never re-derived from
/// the degree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialBody {
    pub name: PlanetId,
    /// Longitude in degrees, normalized to [0, 360)
    pub ecliptic_degree: f64,
    pub sign: ZodiacSign,
    /// House 1-12, 0 when unknown
    pub house: u8,
    pub retrograde: bool,
}

impl CelestialBody {
    pub fn new(
        name: PlanetId,
        ecliptic_degree: f64,
        sign: ZodiacSign,
        house: u8,
        retrograde: bool,
    ) -> Self {
        Self {
            name,
            ecliptic_degree: normalize_degrees(ecliptic_degree),
            sign,
            house: if house > 12 { 0 } else { house },
            retrograde,
        }
    }

    /// Synthetic body with the sign taken from the degree and no house.
    pub fn at(name: PlanetId, ecliptic_degree: f64) -> Self {
        Self::new(name, ecliptic_degree, ZodiacSign::from_degree(ecliptic_degree), 0, false)
    }

    pub fn is_excluded(&self) -> bool {
        self.name.is_excluded()
    }
}

/// A house cusp. NaN or out-of-range degrees mean the birth time is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusp {
    pub house_number: u8,
    pub ecliptic_degree: f64,
}

impl HouseCusp {
    pub fn new(house_number: u8, ecliptic_degree: f64) -> Self {
        Self {
            house_number,
            ecliptic_degree,
        }
    }

    /// Houses 1 and 10 get an emphasized cusp line
    pub fn is_angular(&self) -> bool {
        self.house_number == 1 || self.house_number == 10
    }

    pub fn is_known(&self) -> bool {
        (1..=12).contains(&self.house_number)
            && self.ecliptic_degree.is_finite()
            && (0.0..360.0).contains(&self.ecliptic_degree)
    }
}

/// True when there is exactly one usable cusp for each of the 12 houses.
pub fn houses_known(cusps: &[HouseCusp]) -> bool {
    if cusps.len() != 12 {
        return false;
    }
    let mut seen = [false; 12];
    for cusp in cusps {
        if !cusp.is_known() {
            return false;
        }
        let slot = &mut seen[(cusp.house_number - 1) as usize];
        if *slot {
            return false;
        }
        *slot = true;
    }
    true
}

/// Chart rotation: the house 1 cusp when houses are known, otherwise 0.
pub fn ascendant_degree(cusps: &[HouseCusp]) -> f64 {
    if !houses_known(cusps) {
        return 0.0;
    }
    cusps
        .iter()
        .find(|c| c.house_number == 1)
        .map(|c| c.ecliptic_degree)
        .unwrap_or(0.0)
}
