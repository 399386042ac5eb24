//! Zodiac sign table.

use super::normalize_degrees;
use super::planets::SymbolInfo;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

const SIGN_TABLE: [SymbolInfo; 12] = [
    SymbolInfo { abbreviation: "Ar", display_name: "Aries", glyph: "♈", color: "#FF4500" },
    SymbolInfo { abbreviation: "Ta", display_name: "Taurus", glyph: "♉", color: "#8B4513" },
    SymbolInfo { abbreviation: "Ge", display_name: "Gemini", glyph: "♊", color: "#87CEEB" },
    SymbolInfo { abbreviation: "Ca", display_name: "Cancer", glyph: "♋", color: "#27AE60" },
    SymbolInfo { abbreviation: "Le", display_name: "Leo", glyph: "♌", color: "#FFD700" },
    SymbolInfo { abbreviation: "Vi", display_name: "Virgo", glyph: "♍", color: "#9ACD32" },
    SymbolInfo { abbreviation: "Li", display_name: "Libra", glyph: "♎", color: "#FF69B4" },
    SymbolInfo { abbreviation: "Sc", display_name: "Scorpio", glyph: "♏", color: "#8B0000" },
    SymbolInfo { abbreviation: "Sa", display_name: "Sagittarius", glyph: "♐", color: "#800080" },
    SymbolInfo { abbreviation: "Cp", display_name: "Capricorn", glyph: "♑", color: "#708090" },
    SymbolInfo { abbreviation: "Aq", display_name: "Aquarius", glyph: "♒", color: "#00FFFF" },
    SymbolInfo { abbreviation: "Pi", display_name: "Pisces", glyph: "♓", color: "#2E8B57" },
];

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    pub fn info(self) -> &'static SymbolInfo {
        &SIGN_TABLE[self as usize]
    }

    pub fn abbreviation(self) -> &'static str {
        self.info().abbreviation
    }

    pub fn display_name(self) -> &'static str {
        self.info().display_name
    }

    /// Index 0-11 starting at Aries
    pub fn index(self) -> usize {
        self as usize
    }

    /// Ecliptic degree where the sign begins
    pub fn start_degree(self) -> f64 {
        self.index() as f64 * 30.0
    }

    /// Sign containing the given longitude. NaN falls back to Aries.
    pub fn from_degree(longitude: f64) -> ZodiacSign {
        let normalized = normalize_degrees(longitude);
        if !normalized.is_finite() {
            return ZodiacSign::Aries;
        }
        let index = ((normalized / 30.0).floor() as usize).min(11);
        ZodiacSign::ALL[index]
    }

    pub fn from_abbreviation(code: &str) -> Option<ZodiacSign> {
        ZodiacSign::ALL
            .iter()
            .copied()
            .find(|s| s.abbreviation() == code)
    }

    pub fn from_name(name: &str) -> Option<ZodiacSign> {
        let name = name.trim();
        ZodiacSign::ALL
            .iter()
            .copied()
            .find(|s| s.display_name().eq_ignore_ascii_case(name) || s.abbreviation() == name)
    }
}

impl std::fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
