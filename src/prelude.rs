//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and traits from the seqflow
//! crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust
//! use seqflow::prelude::*;
//!
//! let mut edge = FlowEdge::new("flow1");
//! edge.source_ref = Some("task1".to_string());
//! edge.target_ref = Some("task2".to_string());
//!
//! let mut layout = DiagramLayout::new();
//! layout.set_bounds("task1", Bounds::new(0.0, 0.0, 100.0, 80.0));
//! layout.set_bounds("task2", Bounds::new(200.0, 0.0, 100.0, 80.0));
//!
//! let shape = SequenceFlowCodec::encode(&edge, &layout);
//! assert_eq!(shape.dockers.len(), 2);
//! ```

// The codec and its context seams
pub use crate::codec::{
    DiagramLayout, DocumentContext, GraphContext, IdResolver, SequenceFlowCodec,
};

// Domain-side types
pub use crate::condition::Condition;
pub use crate::model::{Annotation, AnnotationMap, Bounds, FlowEdge, Point};

// Editor-side types
pub use crate::shape::{
    EditorShape, ResourceRef, STENCIL_SEQUENCE_FLOW, ShapeBounds, ShapeIndex, ShapeProperties,
    StencilRef,
};

// Error types
pub use crate::error::CodecError;
