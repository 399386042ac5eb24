use crate::bodies::{houses_known, HouseCusp, ZodiacSign};
use crate::geometry::arc_midpoint;

/// One 30° zodiac division
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignSegment {
    pub sign: ZodiacSign,
    pub start_degree: f64,
    pub end_degree: f64,
}

impl SignSegment {
    pub fn mid_degree(&self) -> f64 {
        self.start_degree + 15.0
    }
}

/// One house, from its cusp to the next
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseSegment {
    pub house_number: u8,
    pub cusp_degree: f64,
    pub next_cusp_degree: f64,
}

impl HouseSegment {
    pub fn is_angular(&self) -> bool {
        self.house_number == 1 || self.house_number == 10
    }

    /// Where the house number label goes
    pub fn mid_degree(&self) -> f64 {
        arc_midpoint(self.cusp_degree, self.next_cusp_degree)
    }
}

/// The 12 static zodiac divisions starting at 0° Aries
pub fn build_zodiac_segments() -> Vec<SignSegment> {
    ZodiacSign::ALL
        .iter()
        .map(|&sign| SignSegment {
            sign,
            start_degree: sign.start_degree(),
            end_degree: sign.start_degree() + 30.0,
        })
        .collect()
}

/// Houses in number order, or `None` when the birth time is unknown
pub fn build_house_segments(cusps: &[HouseCusp]) -> Option<Vec<HouseSegment>> {
    if !houses_known(cusps) {
        return None;
    }

    let mut sorted: Vec<HouseCusp> = cusps.to_vec();
    sorted.sort_by_key(|c| c.house_number);

    let segments = sorted
        .iter()
        .enumerate()
        .map(|(i, cusp)| {
            let next = sorted[(i + 1) % sorted.len()];
            HouseSegment {
                house_number: cusp.house_number,
                cusp_degree: cusp.ecliptic_degree,
                next_cusp_degree: next.ecliptic_degree,
            }
        })
        .collect();

    Some(segments)
}
