use crate::execution::FieldError;
use crate::execution::ResolverContext;
use crate::execution::SchemaRequestContext;
use crate::schema::EnumDefinition;
use crate::schema::OperationAccessRule;
use crate::schema::OperationDefinition;
use crate::schema::OperationResolver;
use crate::schema::OperationType;
use crate::schema::SchemaBuildError;
use crate::schema::schema_builder;
use crate::schema::schema_builder::RequestedType;
use crate::types::TypeAnnotation;
use crate::value::ResolvedValue;
use futures::FutureExt;
use futures::TryFutureExt;
use indexmap::IndexMap;
use std::future::Future;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Declares the arguments, access rule, and resolver of a query or mutation.
/// Handed to the configurator passed to
/// [`SchemaBuilder::register_query`](crate::SchemaBuilder::register_query) and
/// [`SchemaBuilder::register_mutation`](crate::SchemaBuilder::register_mutation).
pub struct OperationBuilder<'b> {
    access_rule: Option<OperationAccessRule>,
    arguments: IndexMap<String, TypeAnnotation>,
    enums: &'b IndexMap<String, EnumDefinition>,
    name: String,
    operation_type: OperationType,
    owner: String,
    requested_types: Vec<RequestedType>,
    resolver: Option<OperationResolver>,
}

impl<'b> OperationBuilder<'b> {
    /// When `rule` returns `false` the operation resolves to `null` with an
    /// authorization error and the resolver is not called.
    pub fn access_rule<A>(&mut self, rule: A) -> &mut Self
    where
        A: Fn(&SchemaRequestContext) -> bool + Send + Sync + 'static,
    {
        self.access_rule = Some(Arc::new(rule));
        self
    }

    /// Declares an argument. Read it in the resolver with
    /// [`ResolverContext::argument`].
    pub fn argument(&mut self, name: &str, type_expr: &str) -> Result<&mut Self> {
        schema_builder::declare_argument(
            self.enums,
            &mut self.arguments,
            &mut self.requested_types,
            &self.owner,
            name,
            type_expr,
        )?;
        Ok(self)
    }

    pub(super) fn finish(
        self,
        type_annotation: TypeAnnotation,
        requested_types: &mut Vec<RequestedType>,
    ) -> Result<OperationDefinition> {
        let resolver = self.resolver.ok_or(SchemaBuildError::MissingResolver {
            owner: self.owner,
        })?;
        requested_types.extend(self.requested_types);
        Ok(OperationDefinition {
            access_rule: self.access_rule,
            arguments: self.arguments,
            name: self.name,
            operation_type: self.operation_type,
            resolver,
            type_annotation,
        })
    }

    pub(super) fn new(
        enums: &'b IndexMap<String, EnumDefinition>,
        operation_type: OperationType,
        name: &str,
    ) -> Self {
        Self {
            access_rule: None,
            arguments: IndexMap::new(),
            enums,
            name: name.to_string(),
            operation_type,
            owner: format!("{operation_type} {name}"),
            requested_types: vec![],
            resolver: None,
        }
    }

    pub fn resolver<F, Fut, R>(&mut self, resolver: F) -> &mut Self
    where
        F: Fn(ResolverContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = std::result::Result<R, FieldError>> + Send + 'static,
        R: Into<ResolvedValue> + 'static,
    {
        let resolver: OperationResolver = Arc::new(move |ctx: ResolverContext| {
            resolver(ctx)
                .map_ok(|value| -> ResolvedValue { value.into() })
                .boxed()
        });
        self.resolver = Some(resolver);
        self
    }
}
