use serde::{Deserialize, Serialize};

/// Namespace reserved for annotations written by this codec.
pub const MODELER_NAMESPACE: &str = "http://seqflow.dev/modeler";
/// Namespace prefix recorded alongside [`MODELER_NAMESPACE`].
pub const MODELER_PREFIX: &str = "modeler";

/// Annotation keys carrying the structured form of a field condition.
pub const ANNOTATION_CONDITION_FIELD_ID: &str = "conditionFieldId";
pub const ANNOTATION_CONDITION_OPERATOR: &str = "conditionOperator";
pub const ANNOTATION_CONDITION_VALUE: &str = "conditionValue";
/// Annotation keys carrying the structured form of an outcome condition.
pub const ANNOTATION_CONDITION_FORM_ID: &str = "conditionFormId";
pub const ANNOTATION_CONDITION_OUTCOME_NAME: &str = "conditionOutcomeName";

/// A single namespaced key/value annotation on a domain element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub namespace: String,
    pub prefix: String,
    pub name: String,
    pub value: String,
}

/// An insertion-ordered annotation multimap.
///
/// Multiple values per key are permitted and keep their relative order;
/// lookups return the first value recorded for a key. The same edge may
/// carry annotations from other tools, so entries written by this codec
/// are namespaced under [`MODELER_NAMESPACE`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationMap {
    entries: Vec<Annotation>,
}

impl AnnotationMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, annotation: Annotation) {
        self.entries.push(annotation);
    }

    /// Records a value under the codec's reserved modeler namespace.
    pub fn push_modeler(&mut self, name: &str, value: &str) {
        self.entries.push(Annotation {
            namespace: MODELER_NAMESPACE.to_string(),
            prefix: MODELER_PREFIX.to_string(),
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|a| a.name == name)
    }

    /// First value recorded for `name`, if any.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// All values recorded for `name`, in insertion order.
    pub fn values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> {
        self.entries
            .iter()
            .filter(move |a| a.name == name)
            .map(|a| a.value.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Annotation> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a AnnotationMap {
    type Item = &'a Annotation;
    type IntoIter = std::slice::Iter<'a, Annotation>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
