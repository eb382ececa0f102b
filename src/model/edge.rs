use serde::{Deserialize, Serialize};

use super::AnnotationMap;

/// A single sequence flow in the domain process model.
///
/// Optional fields use `None` rather than sentinel empty strings so that
/// "absent" and "empty" stay distinguishable; the codec treats both as
/// absent when emitting editor JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowEdge {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_expression: Option<String>,
    #[serde(default, skip_serializing_if = "AnnotationMap::is_empty")]
    pub annotations: AnnotationMap,
}

impl FlowEdge {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// True when both endpoint references resolved. Decode returns
    /// incomplete edges on purpose; callers that need strict validation
    /// check this afterwards.
    pub fn is_connected(&self) -> bool {
        self.source_ref.is_some() && self.target_ref.is_some()
    }
}
