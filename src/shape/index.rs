use ahash::AHashMap;

use super::EditorShape;
use crate::codec::{DocumentContext, IdResolver};

/// Lookup index over the shapes of one editor document.
///
/// The editor stores an edge's source implicitly: a node shape lists the
/// edges it feeds in its `outgoing` array. The index inverts that relation
/// once, so decode can ask for the source of any shape id, and maps every
/// shape id to its stable domain id (`overrideId` when present, falling
/// back to the resource id).
#[derive(Debug, Clone, Default)]
pub struct ShapeIndex {
    source_by_shape: AHashMap<String, String>,
    domain_ids: AHashMap<String, String>,
}

impl ShapeIndex {
    pub fn from_shapes(shapes: &[EditorShape]) -> Self {
        let mut index = Self::default();
        for shape in shapes {
            let domain_id = shape
                .properties
                .override_id
                .as_deref()
                .filter(|id| !id.is_empty())
                .unwrap_or(&shape.resource_id);
            index
                .domain_ids
                .insert(shape.resource_id.clone(), domain_id.to_string());
            for outgoing in &shape.outgoing {
                // First claim wins; a well-formed document has one source
                // per edge shape.
                index
                    .source_by_shape
                    .entry(outgoing.resource_id.clone())
                    .or_insert_with(|| domain_id.to_string());
            }
        }
        index
    }

    pub fn len(&self) -> usize {
        self.domain_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domain_ids.is_empty()
    }
}

impl DocumentContext for ShapeIndex {
    fn source_of(&self, shape_id: &str) -> Option<&str> {
        self.source_by_shape.get(shape_id).map(String::as_str)
    }
}

impl IdResolver for ShapeIndex {
    fn domain_id(&self, shape_id: &str) -> Option<&str> {
        self.domain_ids.get(shape_id).map(String::as_str)
    }
}
