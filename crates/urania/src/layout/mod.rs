pub mod config;
pub mod placer;
pub mod rings;

pub use config::{ChartKind, RingConfig, RingConfigError, SecondaryRing};
pub use placer::{place_bodies, place_bodies_traced, PlacedGlyph, PlacementReport};
pub use rings::{build_house_segments, build_zodiac_segments, HouseSegment, SignSegment};
