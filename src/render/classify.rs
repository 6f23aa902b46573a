//! Value classification: one shape inspection per recursion step.
//!
//! The renderer never probes `serde_json::Value` shapes inline; every value
//! is converted to a [`JsonClass`] first so dispatch is an exhaustive match.

use serde_json::{Map, Value};

/// The four shapes the directory renderer distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonClass<'a> {
    /// Not an object and not an array (null included). Rendered as text.
    Scalar(&'a Value),
    /// Any array. Specialized or generic rendering depends on the section key.
    Array(&'a Vec<Value>),
    /// Object whose values are all scalars: a leaf key-value form.
    SimpleObject(&'a Map<String, Value>),
    /// Object with at least one nested array/object value: a section group.
    SectionGroup(&'a Map<String, Value>),
}

/// Classify one value. Total over all JSON.
#[must_use]
pub fn classify(value: &Value) -> JsonClass<'_> {
    match value {
        Value::Array(items) => JsonClass::Array(items),
        Value::Object(map) => {
            if is_simple_object(map) {
                JsonClass::SimpleObject(map)
            } else {
                JsonClass::SectionGroup(map)
            }
        }
        scalar => JsonClass::Scalar(scalar),
    }
}

/// Decision boundary between a leaf key-value block and a section group:
/// an object is "simple" when every value is a scalar or null.
///
/// The empty object is simple. A single nested value flips the whole object
/// to a section group, which changes layout; fixture authors rely on this
/// boundary staying put.
#[must_use]
pub fn is_simple_object(map: &Map<String, Value>) -> bool {
    map.values().all(|v| !v.is_object() && !v.is_array())
}
