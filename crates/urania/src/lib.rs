//! Radial chart geometry: polar mapping, collision-free glyph placement,
//! wheel scene graphs, and the compact notation used to reference chart
//! facts from narrative text.

pub mod aspects;
pub mod bodies;
pub mod chart;
pub mod geometry;
pub mod layout;
pub mod notation;
pub mod rendering;

pub use aspects::{filter_aspects, filter_cross_aspects, AspectEdge, AspectType, OrbTier};
pub use bodies::{CelestialBody, HouseCusp, PlanetId, ZodiacSign};
pub use chart::{load_chart_from_json, ChartData, ChartDataError};
pub use geometry::{position_on_circle, Point};
pub use layout::{place_bodies, ChartKind, PlacedGlyph, RingConfig};
pub use notation::{decode, encode, NotationToken};
pub use rendering::{render_wheel, RenderOptions, RingRenderer, SceneGraph};
