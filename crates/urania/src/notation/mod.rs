//! Compact notation tokens used to cross-reference narrative text with a
//! chart, e.g. `Pp-SusSc12` for the Sun in Scorpio in house 12.

pub mod decoder;
pub mod encoder;
pub mod resolve;
pub mod scan;
pub mod tokens;

pub use decoder::decode;
pub use encoder::encode;
pub use resolve::{resolve, resolve_biwheel, Highlight};
pub use scan::{scan, TokenMatch};
pub use tokens::{NotationToken, PlanetCode, Position, TokenKind};
