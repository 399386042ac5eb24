//! Planet and point symbol table.
//!
//! Every chart point the wheel can draw is a closed `PlanetId` variant with a
//! canonical abbreviation, display name, glyph and color.

use serde::{Deserialize, Serialize};

/// Canonical per-symbol metadata shared by planets and signs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolInfo {
    /// Two-letter code used by the notation codec
    pub abbreviation: &'static str,
    pub display_name: &'static str,
    pub glyph: &'static str,
    /// Hex color used for the glyph fill
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanetId {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Chiron,
    Lilith,
    NorthNode,
    SouthNode,
    PartOfFortune,
    Ascendant,
    Midheaven,
}

const PLANET_TABLE: [SymbolInfo; 17] = [
    SymbolInfo { abbreviation: "Su", display_name: "Sun", glyph: "☉", color: "#FFD700" },
    SymbolInfo { abbreviation: "Mo", display_name: "Moon", glyph: "☽", color: "#C0C0C0" },
    SymbolInfo { abbreviation: "Me", display_name: "Mercury", glyph: "☿", color: "#8B7355" },
    SymbolInfo { abbreviation: "Ve", display_name: "Venus", glyph: "♀", color: "#FFC0CB" },
    SymbolInfo { abbreviation: "Ma", display_name: "Mars", glyph: "♂", color: "#DC143C" },
    SymbolInfo { abbreviation: "Ju", display_name: "Jupiter", glyph: "♃", color: "#FFA500" },
    SymbolInfo { abbreviation: "Sa", display_name: "Saturn", glyph: "♄", color: "#808080" },
    SymbolInfo { abbreviation: "Ur", display_name: "Uranus", glyph: "♅", color: "#87CEEB" },
    SymbolInfo { abbreviation: "Ne", display_name: "Neptune", glyph: "♆", color: "#4169E1" },
    SymbolInfo { abbreviation: "Pl", display_name: "Pluto", glyph: "♇", color: "#2F4F4F" },
    SymbolInfo { abbreviation: "Ch", display_name: "Chiron", glyph: "⚷", color: "#8B7355" },
    SymbolInfo { abbreviation: "Li", display_name: "Lilith", glyph: "⚸", color: "#6A0DAD" },
    SymbolInfo { abbreviation: "Nn", display_name: "North Node", glyph: "☊", color: "#00CED1" },
    SymbolInfo { abbreviation: "Sn", display_name: "South Node", glyph: "☋", color: "#00CED1" },
    SymbolInfo { abbreviation: "Pf", display_name: "Part of Fortune", glyph: "⊗", color: "#DAA520" },
    SymbolInfo { abbreviation: "As", display_name: "Ascendant", glyph: "AC", color: "#EEEEEE" },
    SymbolInfo { abbreviation: "Mc", display_name: "Midheaven", glyph: "MC", color: "#EEEEEE" },
];

/// Points never drawn as glyphs or aspect endpoints.
pub const EXCLUDED_POINTS: &[PlanetId] = &[PlanetId::SouthNode, PlanetId::PartOfFortune];

impl PlanetId {
    pub const ALL: [PlanetId; 17] = [
        PlanetId::Sun,
        PlanetId::Moon,
        PlanetId::Mercury,
        PlanetId::Venus,
        PlanetId::Mars,
        PlanetId::Jupiter,
        PlanetId::Saturn,
        PlanetId::Uranus,
        PlanetId::Neptune,
        PlanetId::Pluto,
        PlanetId::Chiron,
        PlanetId::Lilith,
        PlanetId::NorthNode,
        PlanetId::SouthNode,
        PlanetId::PartOfFortune,
        PlanetId::Ascendant,
        PlanetId::Midheaven,
    ];

    pub fn info(self) -> &'static SymbolInfo {
        &PLANET_TABLE[self as usize]
    }

    pub fn abbreviation(self) -> &'static str {
        self.info().abbreviation
    }

    pub fn display_name(self) -> &'static str {
        self.info().display_name
    }

    pub fn is_excluded(self) -> bool {
        EXCLUDED_POINTS.contains(&self)
    }

    pub fn from_abbreviation(code: &str) -> Option<PlanetId> {
        PlanetId::ALL
            .iter()
            .copied()
            .find(|p| p.abbreviation() == code)
    }

    /// Resolve a backend or narrative name.
    ///
    /// Case, spaces, underscores and hyphens are ignored, so "North Node",
    /// "north_node" and "NorthNode" all resolve to the same point.
    pub fn from_name(name: &str) -> Option<PlanetId> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();

        let planet = match key.as_str() {
            "sun" => PlanetId::Sun,
            "moon" => PlanetId::Moon,
            "mercury" => PlanetId::Mercury,
            "venus" => PlanetId::Venus,
            "mars" => PlanetId::Mars,
            "jupiter" => PlanetId::Jupiter,
            "saturn" => PlanetId::Saturn,
            "uranus" => PlanetId::Uranus,
            "neptune" => PlanetId::Neptune,
            "pluto" => PlanetId::Pluto,
            "chiron" => PlanetId::Chiron,
            "lilith" | "blackmoonlilith" | "meanlilith" => PlanetId::Lilith,
            "northnode" | "truenode" | "meannode" | "nnode" => PlanetId::NorthNode,
            "southnode" | "snode" => PlanetId::SouthNode,
            "partoffortune" | "fortune" => PlanetId::PartOfFortune,
            "ascendant" | "asc" => PlanetId::Ascendant,
            "midheaven" | "mc" => PlanetId::Midheaven,
            _ => return None,
        };
        Some(planet)
    }
}

impl std::fmt::Display for PlanetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_variants() {
        for planet in PlanetId::ALL {
            assert_eq!(PlanetId::from_abbreviation(planet.abbreviation()), Some(planet));
        }
    }

    #[test]
    fn test_from_name_spellings() {
        assert_eq!(PlanetId::from_name("South Node"), Some(PlanetId::SouthNode));
        assert_eq!(PlanetId::from_name("south_node"), Some(PlanetId::SouthNode));
        assert_eq!(PlanetId::from_name("Part of Fortune"), Some(PlanetId::PartOfFortune));
        assert_eq!(PlanetId::from_name("NorthNode"), Some(PlanetId::NorthNode));
        assert_eq!(PlanetId::from_name("Vulcan"), None);
    }

    #[test]
    fn test_exclusions() {
        assert!(PlanetId::SouthNode.is_excluded());
        assert!(PlanetId::PartOfFortune.is_excluded());
        assert!(!PlanetId::NorthNode.is_excluded());
    }
}
