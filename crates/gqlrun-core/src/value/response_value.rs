use crate::value::ScalarValue;
use indexmap::IndexMap;

/// A node of the shaped response tree.
///
/// Serializes to plain JSON-shaped data: objects as maps in selection order,
/// enums as their entry name.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum ResponseValue {
    Enum(String),
    List(Vec<ResponseValue>),
    Null,
    Object(IndexMap<String, ResponseValue>),
    Scalar(ScalarValue),
}

impl ResponseValue {
    pub fn as_object(&self) -> Option<&IndexMap<String, ResponseValue>> {
        match self {
            ResponseValue::Object(fields) => Some(fields),
            _ => None,
        }
    }

    /// Looks up `key` if this is an object.
    pub fn get(&self, key: &str) -> Option<&ResponseValue> {
        self.as_object()?.get(key)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ResponseValue::Null)
    }

    /// Converts to a [`serde_json::Value`]. Non-finite floats become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
