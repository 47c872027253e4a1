use crate::execution::GraphQLError;
use crate::value::ResponseValue;

/// The `{data, errors}` result of executing one operation.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ExecutionResponse {
    pub data: ResponseValue,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphQLError>,
}

impl ExecutionResponse {
    /// A response for a request rejected before any field was executed.
    pub(crate) fn rejected(errors: Vec<GraphQLError>) -> Self {
        Self {
            data: ResponseValue::Null,
            errors,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
