pub mod icons;
pub mod primitives;
pub mod renderer;
pub mod scene;
pub mod style;
pub mod svg;
pub mod visual_config;

pub use icons::{GlyphRef, IconAsset, IconCache};
pub use primitives::{Color, Shape, Stroke, TextAnchor};
pub use renderer::{render_wheel, RenderOptions, RingRenderer};
pub use scene::{RingSide, SceneGraph, SceneLayer, SceneNode, SceneTarget};
pub use style::{aspect_strength, aspect_style};
pub use svg::to_svg;
pub use visual_config::VisualConfig;
