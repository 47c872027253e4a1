use crate::ExecutionResponse;
use crate::Executor;
use crate::Schema;
use crate::SchemaRequestContext;
use crate::execution::Variables;
use gqlrun_parser::GraphQLParseError;
use thiserror::Error;
use tracing::debug;

/// A request that was rejected before execution began.
#[derive(Clone, Debug, Error)]
pub enum RequestError {
    #[error(transparent)]
    Parse(#[from] GraphQLParseError),
}

/// Parses `request_text` and executes the selected operation against
/// `schema`.
///
/// A document that fails to parse is rejected as a whole with
/// [`RequestError::Parse`]. Every other problem is reported in the returned
/// response's `errors`.
pub async fn execute_request(
    schema: &Schema,
    request_text: &str,
    operation_name: Option<&str>,
    variables: &Variables,
    context: SchemaRequestContext,
) -> Result<ExecutionResponse, RequestError> {
    let document = gqlrun_parser::parse_executable_document(request_text)
        .inspect_err(|err| debug!(error = %err, "rejecting request that failed to parse"))?;
    Ok(Executor::new(schema)
        .execute(&document, operation_name, variables, context)
        .await)
}
