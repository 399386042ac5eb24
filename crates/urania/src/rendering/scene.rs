use crate::aspects::AspectType;
use crate::bodies::{PlanetId, ZodiacSign};
use crate::geometry::{Point, Viewport};
use crate::layout::{ChartKind, PlacedGlyph};
use crate::rendering::primitives::{Color, Shape};
use serde::{Deserialize, Serialize};

/// Draw layer, listed back to front
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneLayer {
    OuterCircle,
    SecondaryCircle,
    HouseCircle,
    InnerCircle,
    Zodiac,
    Houses,
    Bodies,
    Aspects,
}

/// Which ring a body was drawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RingSide {
    Base,
    Secondary,
}

/// Chart fact a node depicts, for hit testing and highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneTarget {
    Sign { sign: ZodiacSign },
    House { house_number: u8 },
    Body { ring: RingSide, planet: PlanetId },
    Aspect {
        from: PlanetId,
        to: PlanetId,
        aspect_type: AspectType,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    pub layer: SceneLayer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<SceneTarget>,
    pub shape: Shape,
}

/// Renderer-agnostic description of one wheel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneGraph {
    pub kind: ChartKind,
    pub viewport: Viewport,
    pub center: Point,
    /// Rotation shared by every ring in this render
    pub ascendant_degree: f64,
    pub background_color: Color,
    pub houses_shown: bool,
    /// Draw instructions in back-to-front order
    pub nodes: Vec<SceneNode>,
    pub glyphs: Vec<PlacedGlyph>,
    pub secondary_glyphs: Vec<PlacedGlyph>,
    /// Glyphs left overlapping after every placement strategy
    pub unresolved_overlaps: usize,
}

impl SceneGraph {
    pub fn new(kind: ChartKind, viewport: Viewport, center: Point, ascendant_degree: f64) -> Self {
        Self {
            kind,
            viewport,
            center,
            ascendant_degree,
            background_color: Color::BLACK,
            houses_shown: false,
            nodes: Vec::new(),
            glyphs: Vec::new(),
            secondary_glyphs: Vec::new(),
            unresolved_overlaps: 0,
        }
    }

    pub fn push(&mut self, layer: SceneLayer, target: Option<SceneTarget>, shape: Shape) {
        self.nodes.push(SceneNode { layer, target, shape });
    }

    pub fn layer(&self, layer: SceneLayer) -> impl Iterator<Item = &SceneNode> {
        self.nodes.iter().filter(move |node| node.layer == layer)
    }

    /// Layers in the order they first appear
    pub fn layer_order(&self) -> Vec<SceneLayer> {
        let mut order: Vec<SceneLayer> = Vec::new();
        for node in &self.nodes {
            if order.last() != Some(&node.layer) {
                order.push(node.layer);
            }
        }
        order
    }

    pub fn nodes_for(&self, target: SceneTarget) -> impl Iterator<Item = &SceneNode> {
        self.nodes.iter().filter(move |node| node.target == Some(target))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
