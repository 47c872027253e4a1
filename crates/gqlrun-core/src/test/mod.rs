//! Shared fixtures for the crate's unit tests.


use crate::ExecutionResponse;
use crate::Executor;
use crate::Schema;
use crate::SchemaRequestContext;
use crate::execution::Variables;

/// Parses `query` and executes its only operation to completion on the
/// current thread.
pub(crate) fn execute_blocking(
    schema: &Schema,
    query: &str,
    variables: serde_json::Value,
    context: SchemaRequestContext,
) -> ExecutionResponse {
    futures::executor::block_on(execute(schema, query, None, variables, context))
}

pub(crate) async fn execute(
    schema: &Schema,
    query: &str,
    operation_name: Option<&str>,
    variables: serde_json::Value,
    context: SchemaRequestContext,
) -> ExecutionResponse {
    let document = gqlrun_parser::parse_executable_document(query)
        .expect("test query should parse");
    let variables = match variables {
        serde_json::Value::Object(map) => map,
        serde_json::Value::Null => Variables::new(),
        other => panic!("test variables must be a JSON object, got {other}"),
    };
    Executor::new(schema)
        .execute(&document, operation_name, &variables, context)
        .await
}
