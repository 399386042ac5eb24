//! Session-scoped cache of recolored icon assets.
//!
//! The renderer owns one `IconCache` per session; `RingRenderer::teardown`
//! evicts it. Nothing is shared between sessions.

use crate::bodies::{PlanetId, ZodiacSign};
use crate::rendering::primitives::Color;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which symbol an icon shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum GlyphRef {
    Planet(PlanetId),
    Sign(ZodiacSign),
}

impl GlyphRef {
    pub fn symbol(&self) -> &'static str {
        match self {
            GlyphRef::Planet(planet) => planet.info().glyph,
            GlyphRef::Sign(sign) => sign.info().glyph,
        }
    }

    fn slug(&self) -> String {
        match self {
            GlyphRef::Planet(planet) => format!("planet:{}", planet.abbreviation()),
            GlyphRef::Sign(sign) => format!("sign:{}", sign.abbreviation()),
        }
    }
}

/// A glyph recolored for one fill
#[derive(Debug, Clone, PartialEq)]
pub struct IconAsset {
    pub key: String,
    pub glyph: GlyphRef,
    pub fill: Color,
    pub symbol: &'static str,
}

#[derive(Debug, Default)]
pub struct IconCache {
    assets: HashMap<(GlyphRef, Color), IconAsset>,
    hits: usize,
    misses: usize,
}

impl IconCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key of the recolored asset, creating it on first use
    pub fn get_or_recolor(&mut self, glyph: GlyphRef, fill: Color) -> String {
        if let Some(asset) = self.assets.get(&(glyph, fill)) {
            self.hits += 1;
            return asset.key.clone();
        }

        self.misses += 1;
        let key = format!("{}@{}{:02X}", glyph.slug(), fill.to_hex(), fill.a);
        self.assets.insert(
            (glyph, fill),
            IconAsset {
                key: key.clone(),
                glyph,
                fill,
                symbol: glyph.symbol(),
            },
        );
        key
    }

    pub fn get(&self, key: &str) -> Option<&IconAsset> {
        self.assets.values().find(|asset| asset.key == key)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }

    /// Drop every asset and reset the counters
    pub fn evict_all(&mut self) {
        log::debug!("evicting {} icon assets", self.assets.len());
        self.assets.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recolor_is_memoized() {
        let mut cache = IconCache::new();
        let sun = GlyphRef::Planet(PlanetId::Sun);
        let first = cache.get_or_recolor(sun, Color::WHITE);
        let second = cache.get_or_recolor(sun, Color::WHITE);
        assert_eq!(first, second);
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.hits(), 1);

        let black = cache.get_or_recolor(sun, Color::BLACK);
        assert_ne!(first, black);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&black).map(|a| a.symbol), Some("☉"));
    }

    #[test]
    fn test_evict_all() {
        let mut cache = IconCache::new();
        cache.get_or_recolor(GlyphRef::Sign(ZodiacSign::Leo), Color::WHITE);
        cache.evict_all();
        assert!(cache.is_empty());
        assert_eq!(cache.misses(), 0);
    }
}
