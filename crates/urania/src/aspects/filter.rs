use crate::aspects::types::AspectEdge;
use std::collections::HashSet;

/// Aspects within one chart, ready for drawing.
///
/// Drops edges touching an excluded point, self edges, and later duplicates of
/// an undirected pair. First occurrence wins.
pub fn filter_aspects(edges: &[AspectEdge]) -> Vec<AspectEdge> {
    let mut seen = HashSet::new();
    let mut kept = Vec::with_capacity(edges.len());

    for edge in edges {
        if edge.touches_excluded() || edge.body_a == edge.body_b {
            log::trace!("dropping aspect {:?}", edge.key());
            continue;
        }
        if seen.insert(edge.key()) {
            kept.push(*edge);
        }
    }

    kept
}

/// Aspects between two charts (`body_a` in the base chart, `body_b` in the
/// secondary one). Direction matters here: Sun-Moon and Moon-Sun are distinct
/// cross aspects.
pub fn filter_cross_aspects(edges: &[AspectEdge]) -> Vec<AspectEdge> {
    let mut seen = HashSet::new();
    edges
        .iter()
        .filter(|edge| !edge.touches_excluded())
        .filter(|edge| seen.insert((edge.body_a, edge.body_b, edge.aspect_type)))
        .copied()
        .collect()
}
