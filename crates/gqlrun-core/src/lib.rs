//! Core runtime for `gqlrun`: the type model, the schema registry and its
//! builder, the value model, the scalar byte codec, and the execution engine.

pub mod codec;
pub mod execution;
mod names;
pub mod schema;
pub mod types;
pub mod value;

pub use execution::ExecutionResponse;
pub use execution::Executor;
pub use execution::FieldError;
pub use execution::GraphQLError;
pub use execution::ResolverContext;
pub use execution::SchemaRequestContext;
pub use schema::Schema;
pub use schema::SchemaBuildError;
pub use schema::SchemaBuilder;

#[cfg(test)]
mod test;
