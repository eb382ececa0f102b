//! The edge codec: one encode and one decode pass per edge.
//!
//! Both directions are single-pass, infallible transforms over read-only
//! context objects. Missing data degrades to omitted fields; the caller
//! decides what is fatal (for instance by rejecting decoded edges where
//! [`FlowEdge::is_connected`] is false).

mod context;

pub use context::*;

use itertools::Itertools;
use tracing::debug;

use crate::condition::Condition;
use crate::model::FlowEdge;
use crate::shape::{EditorShape, ResourceRef, ShapeBounds, ShapeProperties, StencilRef};

/// Stateless converter between [`FlowEdge`] and [`EditorShape`].
pub struct SequenceFlowCodec;

impl SequenceFlowCodec {
    /// Encodes one domain edge into an editor shape.
    ///
    /// Dockers anchor into the source and target boxes as half-width /
    /// half-height offsets; any routing points beyond the two anchors are
    /// carried over as absolute interior waypoints. `defaultflow` is
    /// emitted as `true` only when the source node's default-edge pointer
    /// names this edge, and omitted otherwise.
    pub fn encode(edge: &FlowEdge, ctx: &impl GraphContext) -> EditorShape {
        let mut dockers = Vec::new();
        if let Some(source) = edge.source_ref.as_deref().and_then(|id| ctx.bounds(id)) {
            dockers.push(source.center_offset());
        }
        let routing = ctx.routing_points(&edge.id);
        if routing.len() > 2 {
            dockers.extend(routing.iter().skip(1).dropping_back(1).copied());
        }
        if let Some(target) = edge.target_ref.as_deref().and_then(|id| ctx.bounds(id)) {
            dockers.push(target.center_offset());
        }

        let target = edge.target_ref.as_deref().map(ResourceRef::new);

        let mut properties = ShapeProperties {
            override_id: Some(edge.id.clone()),
            name: non_empty(edge.name.as_deref()),
            documentation: non_empty(edge.documentation.as_deref()),
            condition: Condition::from_edge(edge).to_value(),
            default_flow: None,
        };

        if let Some(source_id) = edge.source_ref.as_deref()
            && ctx.default_edge_id(source_id) == Some(edge.id.as_str())
        {
            properties.default_flow = Some(true);
        }

        EditorShape {
            resource_id: edge.id.clone(),
            stencil: StencilRef::sequence_flow(),
            bounds: ShapeBounds::sequence_flow_placeholder(),
            dockers,
            outgoing: target.iter().cloned().collect(),
            target,
            child_shapes: Vec::new(),
            properties,
        }
    }

    /// Decodes one editor shape back into a domain edge.
    ///
    /// The source is resolved through the document's topology (it is not
    /// stored on the edge shape); the target only when the source
    /// resolved. Never fails: unresolved references and unusable condition
    /// data leave the corresponding fields unset.
    pub fn decode(
        shape: &EditorShape,
        doc: &impl DocumentContext,
        ids: &impl IdResolver,
    ) -> FlowEdge {
        let id = shape
            .properties
            .override_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .unwrap_or(&shape.resource_id);
        let mut edge = FlowEdge::new(id);
        edge.name = non_empty(shape.properties.name.as_deref());
        edge.documentation = non_empty(shape.properties.documentation.as_deref());

        if let Some(source_ref) = doc.source_of(&shape.resource_id) {
            edge.source_ref = Some(source_ref.to_string());
            if let Some(target) = &shape.target {
                match ids.domain_id(&target.resource_id) {
                    Some(target_ref) => edge.target_ref = Some(target_ref.to_string()),
                    None => debug!(
                        shape = %shape.resource_id,
                        target = %target.resource_id,
                        "target shape unknown, leaving target unset"
                    ),
                }
            }
        } else {
            debug!(shape = %shape.resource_id, "no source shape found, edge is incomplete");
        }

        if let Some(condition) = &shape.properties.condition {
            Condition::from_json(condition).apply_to(&mut edge);
        }

        edge
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(str::to_owned)
}
