mod enum_definition;
mod operation_builder;
mod operation_definition;
mod property_definition;
#[allow(clippy::module_inception)]
mod schema;
mod schema_builder;
mod type_builder;
mod type_definition;

pub use enum_definition::EnumDefinition;
pub use operation_builder::OperationBuilder;
pub use operation_definition::OperationDefinition;
pub use operation_definition::OperationType;
pub use property_definition::PropertyDefinition;
pub use schema::Schema;
pub use schema_builder::SchemaBuilder;
pub use schema_builder::SchemaBuildError;
pub use type_builder::PropertyBuilder;
pub use type_builder::TypeBuilder;
pub use type_definition::TypeDefinition;

use crate::execution::FieldError;
use crate::execution::ResolverContext;
use crate::execution::SchemaRequestContext;
use crate::value::ObjectRef;
use crate::value::ResolvedValue;
use futures::future::BoxFuture;
use std::any::Any;
use std::sync::Arc;

pub(crate) type ResolverFuture = BoxFuture<'static, Result<ResolvedValue, FieldError>>;

pub(crate) type PropertyAccessRule =
    Arc<dyn Fn(&(dyn Any + Send + Sync), &SchemaRequestContext) -> bool + Send + Sync>;

pub(crate) type PropertyResolver =
    Arc<dyn Fn(ObjectRef, ResolverContext) -> ResolverFuture + Send + Sync>;

pub(crate) type OperationAccessRule =
    Arc<dyn Fn(&SchemaRequestContext) -> bool + Send + Sync>;

pub(crate) type OperationResolver =
    Arc<dyn Fn(ResolverContext) -> ResolverFuture + Send + Sync>;
