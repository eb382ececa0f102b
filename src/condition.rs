//! The tagged condition model and its JSON mapping.
//!
//! A sequence flow's condition lives in two places on the domain side: a
//! template expression string and side-channel annotations that preserve
//! the structured form the expression alone cannot reconstruct. On the
//! editor side the same condition is a tagged `expression` object with
//! mutually exclusive shapes. This module owns both mappings, one decode
//! function per variant, so the precedence rules stay auditable.

use serde_json::{Value, json};
use tracing::debug;

use crate::model::{
    ANNOTATION_CONDITION_FIELD_ID, ANNOTATION_CONDITION_FORM_ID, ANNOTATION_CONDITION_OPERATOR,
    ANNOTATION_CONDITION_OUTCOME_NAME, ANNOTATION_CONDITION_VALUE, FlowEdge,
};

/// The condition attached to a sequence flow, in editor terms.
///
/// Exactly one variant corresponds to a given edge state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// No condition; the `condition` property is omitted entirely.
    None,
    /// Form-field comparison. Operator and value may be missing on the
    /// domain side; whatever is present is emitted.
    Field {
        field_id: String,
        operator: Option<String>,
        value: Option<String>,
    },
    /// Form-outcome comparison, keyed by the numeric form id (held in its
    /// string form, as the annotations store it).
    Outcome {
        form_id: String,
        operator: Option<String>,
        outcome_name: Option<String>,
    },
    /// Raw expression string, round-tripped verbatim.
    Static { expression: String },
}

impl Condition {
    /// Derives the condition variant of a domain edge.
    ///
    /// First match wins: field annotations, then outcome annotations, then
    /// the raw expression string. A partial annotation set still yields a
    /// structured variant here; only decode demands complete data.
    pub fn from_edge(edge: &FlowEdge) -> Self {
        let annotations = &edge.annotations;
        if let Some(field_id) = annotations.first(ANNOTATION_CONDITION_FIELD_ID) {
            return Condition::Field {
                field_id: field_id.to_string(),
                operator: annotations
                    .first(ANNOTATION_CONDITION_OPERATOR)
                    .map(str::to_owned),
                value: annotations
                    .first(ANNOTATION_CONDITION_VALUE)
                    .map(str::to_owned),
            };
        }
        if let Some(form_id) = annotations.first(ANNOTATION_CONDITION_FORM_ID) {
            return Condition::Outcome {
                form_id: form_id.to_string(),
                operator: annotations
                    .first(ANNOTATION_CONDITION_OPERATOR)
                    .map(str::to_owned),
                outcome_name: annotations
                    .first(ANNOTATION_CONDITION_OUTCOME_NAME)
                    .map(str::to_owned),
            };
        }
        if let Some(expression) = edge
            .condition_expression
            .as_deref()
            .filter(|e| !e.is_empty())
        {
            return Condition::Static {
                expression: expression.to_string(),
            };
        }
        Condition::None
    }

    /// Reads the editor's `condition` property.
    ///
    /// A plain string is the legacy form and decodes as a static
    /// expression. Partial or unrecognized structured data decodes to
    /// [`Condition::None`]; the editor saves half-filled condition forms,
    /// so this is normal input, not an error.
    pub fn from_json(condition: &Value) -> Self {
        if let Some(text) = condition.as_str() {
            return Condition::Static {
                expression: text.to_string(),
            };
        }
        let Some(expression) = condition.get("expression") else {
            return Condition::None;
        };
        let Some(kind) = expression.get("type").and_then(Value::as_str) else {
            return Condition::None;
        };
        if kind.eq_ignore_ascii_case("variables") {
            return match expression.get("fieldType").and_then(Value::as_str) {
                Some(field_type) if field_type.eq_ignore_ascii_case("field") => {
                    Self::from_field_expression(expression)
                }
                Some(field_type) if field_type.eq_ignore_ascii_case("outcome") => {
                    Self::from_outcome_expression(expression)
                }
                _ => Condition::None,
            };
        }
        if kind.eq_ignore_ascii_case("static") {
            return Self::from_static_expression(expression);
        }
        debug!(kind, "unrecognized condition expression type, ignoring");
        Condition::None
    }

    fn from_field_expression(expression: &Value) -> Self {
        let field_id = non_null_str(expression, "fieldId");
        let operator = non_null_str(expression, "operator");
        let value = non_null_str(expression, "value");
        match (field_id, operator, value) {
            (Some(field_id), Some(operator), Some(value)) => Condition::Field {
                field_id: field_id.to_string(),
                operator: Some(operator.to_string()),
                value: Some(value.to_string()),
            },
            _ => {
                debug!("field condition missing fieldId, operator or value, dropping it");
                Condition::None
            }
        }
    }

    fn from_outcome_expression(expression: &Value) -> Self {
        let form_id = expression.get("outcomeFormId").and_then(as_form_id);
        let operator = non_null_str(expression, "operator");
        let outcome_name = non_null_str(expression, "outcomeName");
        match (form_id, operator, outcome_name) {
            (Some(form_id), Some(operator), Some(outcome_name)) => Condition::Outcome {
                form_id: form_id.to_string(),
                operator: Some(operator.to_string()),
                outcome_name: Some(outcome_name.to_string()),
            },
            _ => {
                debug!("outcome condition missing outcomeFormId, operator or outcomeName, dropping it");
                Condition::None
            }
        }
    }

    fn from_static_expression(expression: &Value) -> Self {
        match non_null_str(expression, "staticValue") {
            Some(static_value) => Condition::Static {
                expression: static_value.to_string(),
            },
            None => Condition::None,
        }
    }

    /// Serializes the condition into the editor's `condition` property, or
    /// `None` when the property must be omitted.
    pub fn to_value(&self) -> Option<Value> {
        match self {
            Condition::None => None,
            Condition::Field {
                field_id,
                operator,
                value,
            } => {
                let mut expression = json!({
                    "type": "variables",
                    "fieldType": "field",
                    "fieldId": field_id,
                });
                if let Some(operator) = operator {
                    expression["operator"] = json!(operator);
                }
                if let Some(value) = value {
                    expression["value"] = json!(value);
                }
                Some(json!({ "expression": expression }))
            }
            Condition::Outcome {
                form_id,
                operator,
                outcome_name,
            } => {
                let mut expression = json!({
                    "type": "variables",
                    "fieldType": "outcome",
                    "outcomeFormId": form_id,
                });
                if let Some(operator) = operator {
                    expression["operator"] = json!(operator);
                }
                if let Some(outcome_name) = outcome_name {
                    expression["outcomeName"] = json!(outcome_name);
                }
                Some(json!({ "expression": expression }))
            }
            Condition::Static { expression } => Some(json!({
                "expression": {
                    "type": "static",
                    "staticValue": expression,
                }
            })),
        }
    }

    /// Writes the decoded condition back onto a domain edge: the
    /// synthesized expression string plus the annotations that preserve
    /// the structured form. Incomplete variants write nothing.
    pub fn apply_to(&self, edge: &mut FlowEdge) {
        match self {
            Condition::None => {}
            Condition::Field {
                field_id,
                operator: Some(operator),
                value: Some(value),
            } => {
                edge.condition_expression = Some(format!("${{{field_id} {operator} {value}}}"));
                edge.annotations
                    .push_modeler(ANNOTATION_CONDITION_FIELD_ID, field_id);
                edge.annotations
                    .push_modeler(ANNOTATION_CONDITION_OPERATOR, operator);
                edge.annotations
                    .push_modeler(ANNOTATION_CONDITION_VALUE, value);
            }
            Condition::Outcome {
                form_id,
                operator: Some(operator),
                outcome_name: Some(outcome_name),
            } => {
                edge.condition_expression =
                    Some(format!("${{form{form_id}outcome {operator} {outcome_name}}}"));
                edge.annotations
                    .push_modeler(ANNOTATION_CONDITION_FORM_ID, form_id);
                edge.annotations
                    .push_modeler(ANNOTATION_CONDITION_OPERATOR, operator);
                edge.annotations
                    .push_modeler(ANNOTATION_CONDITION_OUTCOME_NAME, outcome_name);
            }
            Condition::Static { expression } => {
                edge.condition_expression = Some(expression.clone());
            }
            // Partially populated Field/Outcome: nothing to write.
            _ => {}
        }
    }
}

fn non_null_str<'a>(expression: &'a Value, key: &str) -> Option<&'a str> {
    expression.get(key).and_then(Value::as_str)
}

// The editor writes the form id as a number, but older documents carry it
// as a numeric string.
fn as_form_id(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
}
