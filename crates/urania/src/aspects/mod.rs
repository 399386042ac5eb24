pub mod filter;
pub mod types;

pub use filter::{filter_aspects, filter_cross_aspects};
pub use types::{AspectEdge, AspectHarmony, AspectType, OrbTier};
