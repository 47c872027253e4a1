//! Executes parsed request documents against a built [`Schema`](crate::Schema).

mod execution_response;
mod executor;
mod field_collection;
mod field_error;
mod graphql_error;
mod resolver_context;
mod schema_request_context;
mod variable_coercion;

pub use execution_response::ExecutionResponse;
pub use executor::Executor;
pub use field_error::FieldError;
pub use graphql_error::ErrorKind;
pub use graphql_error::ErrorLocation;
pub use graphql_error::GraphQLError;
pub use graphql_error::PathSegment;
pub use resolver_context::ResolverContext;
pub use schema_request_context::SchemaRequestContext;

/// Raw request variables, as decoded from a JSON request body.
pub type Variables = serde_json::Map<String, serde_json::Value>;

#[cfg(test)]
mod tests;
