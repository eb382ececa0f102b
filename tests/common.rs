//! Shared builders for codec tests.
use seqflow::prelude::*;
use serde_json::{Value, json};

/// An edge wired between two nodes, with no condition.
#[allow(dead_code)]
pub fn connected_edge(id: &str, source: &str, target: &str) -> FlowEdge {
    let mut edge = FlowEdge::new(id);
    edge.source_ref = Some(source.to_string());
    edge.target_ref = Some(target.to_string());
    edge
}

/// A layout with two tasks placed: `task1` at 100x80 and `task2` at
/// 100x80, so both docker anchors come out as (50, 40).
#[allow(dead_code)]
pub fn simple_layout() -> DiagramLayout {
    let mut layout = DiagramLayout::new();
    layout.set_bounds("task1", Bounds::new(0.0, 0.0, 100.0, 80.0));
    layout.set_bounds("task2", Bounds::new(200.0, 0.0, 100.0, 80.0));
    layout
}

/// A minimal sequence-flow shape value with the given `condition`
/// property (or none).
#[allow(dead_code)]
pub fn flow_shape_value(condition: Option<Value>) -> Value {
    let mut properties = json!({ "overrideId": "flow1" });
    if let Some(condition) = condition {
        properties["condition"] = condition;
    }
    json!({
        "resourceId": "sid-flow1",
        "stencil": { "id": "SequenceFlow" },
        "bounds": {
            "upperLeft": { "x": 128.0, "y": 212.0 },
            "lowerRight": { "x": 172.0, "y": 212.0 }
        },
        "dockers": [ { "x": 50.0, "y": 40.0 }, { "x": 50.0, "y": 40.0 } ],
        "outgoing": [ { "resourceId": "sid-task2" } ],
        "target": { "resourceId": "sid-task2" },
        "childShapes": [],
        "properties": properties
    })
}

/// A three-shape document: `task1 -> flow1 -> task2`, with editor resource
/// ids distinct from the stable domain ids carried in `overrideId`.
#[allow(dead_code)]
pub fn simple_document(condition: Option<Value>) -> Vec<EditorShape> {
    let task1 = json!({
        "resourceId": "sid-task1",
        "stencil": { "id": "UserTask" },
        "bounds": {
            "upperLeft": { "x": 0.0, "y": 0.0 },
            "lowerRight": { "x": 100.0, "y": 80.0 }
        },
        "outgoing": [ { "resourceId": "sid-flow1" } ],
        "childShapes": [],
        "properties": { "overrideId": "task1" }
    });
    let task2 = json!({
        "resourceId": "sid-task2",
        "stencil": { "id": "UserTask" },
        "bounds": {
            "upperLeft": { "x": 200.0, "y": 0.0 },
            "lowerRight": { "x": 300.0, "y": 80.0 }
        },
        "childShapes": [],
        "properties": { "overrideId": "task2" }
    });
    vec![
        EditorShape::from_value(&task1).expect("task1 shape"),
        EditorShape::from_value(&flow_shape_value(condition)).expect("flow shape"),
        EditorShape::from_value(&task2).expect("task2 shape"),
    ]
}

/// Decodes the flow shape of a [`simple_document`] built with the given
/// condition.
#[allow(dead_code)]
pub fn decode_with_condition(condition: Option<Value>) -> FlowEdge {
    let shapes = simple_document(condition);
    let index = ShapeIndex::from_shapes(&shapes);
    SequenceFlowCodec::decode(&shapes[1], &index, &index)
}
