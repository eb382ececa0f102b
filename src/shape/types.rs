//! Serde types for the editor's shape-graph JSON.
//!
//! Property names are fixed contract strings shared with the web editor;
//! renames below are part of the wire format, not a style choice. Optional
//! properties are omitted entirely when absent, never emitted as `null`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CodecError;
use crate::model::Point;

/// Stencil identifier for sequence-flow shapes.
pub const STENCIL_SEQUENCE_FLOW: &str = "SequenceFlow";

// The editor ignores edge bounds but rejects shapes without them, so every
// sequence flow gets the same placeholder box.
const EDGE_BOUNDS_UPPER_LEFT: (f64, f64) = (128.0, 212.0);
const EDGE_BOUNDS_LOWER_RIGHT: (f64, f64) = (172.0, 212.0);

/// Reference to another shape by its editor resource id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    #[serde(rename = "resourceId")]
    pub resource_id: String,
}

impl ResourceRef {
    pub fn new(resource_id: impl Into<String>) -> Self {
        Self {
            resource_id: resource_id.into(),
        }
    }
}

/// Stencil tag of a shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StencilRef {
    pub id: String,
}

impl StencilRef {
    pub fn sequence_flow() -> Self {
        Self {
            id: STENCIL_SEQUENCE_FLOW.to_string(),
        }
    }
}

/// Rectangle in the editor's upper-left/lower-right encoding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeBounds {
    #[serde(rename = "upperLeft")]
    pub upper_left: Point,
    #[serde(rename = "lowerRight")]
    pub lower_right: Point,
}

impl ShapeBounds {
    /// The fixed placeholder box emitted for every sequence-flow shape.
    pub fn sequence_flow_placeholder() -> Self {
        Self {
            upper_left: Point::new(EDGE_BOUNDS_UPPER_LEFT.0, EDGE_BOUNDS_UPPER_LEFT.1),
            lower_right: Point::new(EDGE_BOUNDS_LOWER_RIGHT.0, EDGE_BOUNDS_LOWER_RIGHT.1),
        }
    }
}

/// The `properties` object of a sequence-flow shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeProperties {
    #[serde(
        rename = "overrideId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub override_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    /// Held as raw JSON: the condition property has several mutually
    /// exclusive shapes, and unrecognized ones must survive
    /// deserialization so decode can treat them as "no condition".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Value>,
    /// Only ever serialized as `true`; a non-default edge omits the
    /// property instead of writing `false`.
    #[serde(
        rename = "defaultflow",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub default_flow: Option<bool>,
}

/// One shape node of the editor's JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorShape {
    #[serde(rename = "resourceId")]
    pub resource_id: String,
    pub stencil: StencilRef,
    pub bounds: ShapeBounds,
    #[serde(default)]
    pub dockers: Vec<Point>,
    #[serde(default)]
    pub outgoing: Vec<ResourceRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<ResourceRef>,
    #[serde(rename = "childShapes", default)]
    pub child_shapes: Vec<Value>,
    #[serde(default)]
    pub properties: ShapeProperties,
}

impl EditorShape {
    /// Deserializes a shape from a raw JSON value.
    pub fn from_value(value: &Value) -> Result<Self, CodecError> {
        Ok(serde_json::from_value(value.clone())?)
    }

    /// Serializes this shape back into a raw JSON value.
    pub fn to_value(&self) -> Result<Value, CodecError> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn is_sequence_flow(&self) -> bool {
        self.stencil.id == STENCIL_SEQUENCE_FLOW
    }
}
