//! Unit tests for the small building blocks of the codec.
mod common;
use common::*;
use seqflow::condition::Condition;
use seqflow::prelude::*;
use serde_json::json;

#[test]
fn test_annotation_map_keeps_insertion_order_per_key() {
    let mut annotations = AnnotationMap::new();
    annotations.push_modeler("candidate", "alice");
    annotations.push_modeler("candidate", "bob");
    annotations.push_modeler("conditionOperator", "==");

    assert_eq!(annotations.len(), 3);
    assert_eq!(annotations.first("candidate"), Some("alice"));
    let all: Vec<&str> = annotations.values("candidate").collect();
    assert_eq!(all, vec!["alice", "bob"]);
    assert!(annotations.contains("conditionOperator"));
    assert!(!annotations.contains("conditionValue"));
}

#[test]
fn test_modeler_annotations_carry_the_reserved_namespace() {
    let mut annotations = AnnotationMap::new();
    annotations.push_modeler("conditionFieldId", "amount");

    let annotation = annotations.iter().next().expect("one annotation");
    assert_eq!(annotation.namespace, "http://seqflow.dev/modeler");
    assert_eq!(annotation.prefix, "modeler");
    assert_eq!(annotation.name, "conditionFieldId");
    assert_eq!(annotation.value, "amount");
}

#[test]
fn test_bounds_center_offset() {
    let bounds = Bounds::new(10.0, 20.0, 100.0, 80.0);
    assert_eq!(bounds.center_offset(), Point::new(50.0, 40.0));
}

#[test]
fn test_condition_precedence_on_the_edge() {
    let mut edge = FlowEdge::new("flow1");
    assert_eq!(Condition::from_edge(&edge), Condition::None);

    edge.condition_expression = Some("${x}".to_string());
    assert_eq!(
        Condition::from_edge(&edge),
        Condition::Static {
            expression: "${x}".to_string()
        }
    );

    edge.annotations.push_modeler("conditionFormId", "7");
    assert!(matches!(
        Condition::from_edge(&edge),
        Condition::Outcome { .. }
    ));

    edge.annotations.push_modeler("conditionFieldId", "amount");
    assert!(matches!(Condition::from_edge(&edge), Condition::Field { .. }));
}

#[test]
fn test_empty_expression_string_is_no_condition() {
    let mut edge = FlowEdge::new("flow1");
    edge.condition_expression = Some(String::new());
    assert_eq!(Condition::from_edge(&edge), Condition::None);
}

#[test]
fn test_partial_field_variant_from_annotations() {
    let mut edge = FlowEdge::new("flow1");
    edge.annotations.push_modeler("conditionFieldId", "amount");

    assert_eq!(
        Condition::from_edge(&edge),
        Condition::Field {
            field_id: "amount".to_string(),
            operator: None,
            value: None,
        }
    );
}

#[test]
fn test_condition_type_matching_is_case_insensitive() {
    let condition = json!({
        "expression": {
            "type": "Variables",
            "fieldType": "Field",
            "fieldId": "amount",
            "operator": ">",
            "value": "100"
        }
    });
    assert!(matches!(
        Condition::from_json(&condition),
        Condition::Field { .. }
    ));
}

#[test]
fn test_none_condition_serializes_to_no_property() {
    assert_eq!(Condition::None.to_value(), None);
}

#[test]
fn test_incomplete_variant_applies_nothing() {
    let condition = Condition::Field {
        field_id: "amount".to_string(),
        operator: None,
        value: None,
    };
    let mut edge = FlowEdge::new("flow1");
    condition.apply_to(&mut edge);

    assert_eq!(edge.condition_expression, None);
    assert!(edge.annotations.is_empty());
}

#[test]
fn test_flow_edge_serde_omits_unset_fields() {
    let edge = FlowEdge::new("flow1");
    let value = serde_json::to_value(&edge).expect("serialize edge");

    assert_eq!(value, json!({ "id": "flow1" }));
}

#[test]
fn test_decoded_edge_matches_helper_document() {
    // Guard for the shared helpers themselves.
    let shapes = simple_document(None);
    assert_eq!(shapes.len(), 3);
    assert!(shapes[1].is_sequence_flow());
    assert!(!shapes[0].is_sequence_flow());
}
