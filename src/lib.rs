//! # Seqflow - Sequence Flow / Editor Shape Codec
//!
//! **Seqflow** converts the sequence-flow edges of a business-process
//! graph between two representations: the compact domain form a process
//! engine works with (an expression string plus side-channel annotations)
//! and the tagged JSON shape a web-based visual editor reads and writes.
//!
//! ## Core Workflow
//!
//! The codec is one stateless component with two single-pass transforms:
//!
//! 1.  **Encode**: a diagram-level assembler walks the process model and
//!     calls [`SequenceFlowCodec::encode`](codec::SequenceFlowCodec::encode)
//!     once per edge, handing it a [`GraphContext`](codec::GraphContext)
//!     that resolves node bounds, routing waypoints and default-edge
//!     pointers. The result is one [`EditorShape`](shape::EditorShape) per
//!     edge, ready to be placed into the editor document.
//! 2.  **Decode**: when an edited document comes back, the assembler calls
//!     [`SequenceFlowCodec::decode`](codec::SequenceFlowCodec::decode) once
//!     per sequence-flow shape, with a
//!     [`DocumentContext`](codec::DocumentContext) and
//!     [`IdResolver`](codec::IdResolver) (typically one
//!     [`ShapeIndex`](shape::ShapeIndex) built from the document's shapes).
//!     The result is one [`FlowEdge`](model::FlowEdge) per shape.
//!
//! Both directions are deliberately lenient: missing relations and
//! partial condition data degrade to omitted fields, never to errors.
//! Callers that need strict validation check the decoded edges afterward.
//!
//! ## Quick Start
//!
//! ```rust
//! use seqflow::prelude::*;
//!
//! // A conditional edge between two laid-out tasks.
//! let mut edge = FlowEdge::new("flow1");
//! edge.source_ref = Some("task1".to_string());
//! edge.target_ref = Some("task2".to_string());
//! edge.condition_expression = Some("${amount > 100}".to_string());
//!
//! let mut layout = DiagramLayout::new();
//! layout.set_bounds("task1", Bounds::new(0.0, 0.0, 100.0, 80.0));
//! layout.set_bounds("task2", Bounds::new(200.0, 0.0, 100.0, 80.0));
//!
//! let shape = SequenceFlowCodec::encode(&edge, &layout);
//! assert_eq!(shape.properties.override_id.as_deref(), Some("flow1"));
//!
//! // Rebuild the edge from the shape graph.
//! let index = ShapeIndex::from_shapes(std::slice::from_ref(&shape));
//! let decoded = SequenceFlowCodec::decode(&shape, &index, &index);
//! assert_eq!(decoded.condition_expression.as_deref(), Some("${amount > 100}"));
//! ```

pub mod codec;
pub mod condition;
pub mod error;
pub mod model;
pub mod prelude;
pub mod shape;
