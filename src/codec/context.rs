use ahash::AHashMap;

use crate::model::{Bounds, Point};

/// Encode-side view of the laid-out process graph.
///
/// The diagram assembler populates the layout for every node an edge
/// references before edges are encoded; a missing lookup is a caller
/// contract violation and degrades to an omitted docker anchor.
pub trait GraphContext {
    /// Bounding box of a laid-out node, if the node has been placed.
    fn bounds(&self, node_id: &str) -> Option<Bounds>;

    /// Registered routing points for an edge, anchor placeholders
    /// included. May be empty.
    fn routing_points(&self, edge_id: &str) -> &[Point];

    /// The default outgoing edge of a gateway-like or activity-like node.
    fn default_edge_id(&self, node_id: &str) -> Option<&str>;
}

/// Decode-side topology lookup: which element feeds a given shape. The
/// editor document stores this relation implicitly through containment,
/// not on the edge shape itself.
pub trait DocumentContext {
    fn source_of(&self, shape_id: &str) -> Option<&str>;
}

/// Maps an editor shape id to the stable domain id it stands for.
pub trait IdResolver {
    fn domain_id(&self, shape_id: &str) -> Option<&str>;
}

/// In-memory [`GraphContext`] populated by the diagram assembler before
/// edges are encoded.
#[derive(Debug, Clone, Default)]
pub struct DiagramLayout {
    bounds: AHashMap<String, Bounds>,
    routing: AHashMap<String, Vec<Point>>,
    default_edges: AHashMap<String, String>,
}

impl DiagramLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_bounds(&mut self, node_id: impl Into<String>, bounds: Bounds) {
        self.bounds.insert(node_id.into(), bounds);
    }

    pub fn set_routing_points(&mut self, edge_id: impl Into<String>, points: Vec<Point>) {
        self.routing.insert(edge_id.into(), points);
    }

    pub fn set_default_edge(&mut self, node_id: impl Into<String>, edge_id: impl Into<String>) {
        self.default_edges.insert(node_id.into(), edge_id.into());
    }
}

impl GraphContext for DiagramLayout {
    fn bounds(&self, node_id: &str) -> Option<Bounds> {
        self.bounds.get(node_id).copied()
    }

    fn routing_points(&self, edge_id: &str) -> &[Point] {
        self.routing.get(edge_id).map(Vec::as_slice).unwrap_or(&[])
    }

    fn default_edge_id(&self, node_id: &str) -> Option<&str> {
        self.default_edges.get(node_id).map(String::as_str)
    }
}
