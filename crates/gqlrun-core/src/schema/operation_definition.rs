use crate::execution::ResolverContext;
use crate::execution::SchemaRequestContext;
use crate::schema::OperationAccessRule;
use crate::schema::OperationResolver;
use crate::schema::ResolverFuture;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// Which root bucket an operation was registered in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationType {
    Mutation,
    Query,
}

impl OperationType {
    /// The root type name used for `__typename` and fragment type
    /// conditions on the root selection set.
    pub fn root_type_name(&self) -> &'static str {
        match self {
            OperationType::Mutation => "Mutation",
            OperationType::Query => "Query",
        }
    }
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationType::Mutation => f.write_str("mutation"),
            OperationType::Query => f.write_str("query"),
        }
    }
}

/// A registered query or mutation: a root field with no owning instance.
#[derive(Clone)]
pub struct OperationDefinition {
    pub(super) access_rule: Option<OperationAccessRule>,
    pub(super) arguments: IndexMap<String, TypeAnnotation>,
    pub(super) name: String,
    pub(super) operation_type: OperationType,
    pub(super) resolver: OperationResolver,
    pub(super) type_annotation: TypeAnnotation,
}

impl OperationDefinition {
    pub fn arguments(&self) -> &IndexMap<String, TypeAnnotation> {
        &self.arguments
    }

    pub fn has_access_rule(&self) -> bool {
        self.access_rule.is_some()
    }

    pub fn is_accessible(&self, context: &SchemaRequestContext) -> bool {
        self.access_rule.as_ref().is_none_or(|rule| rule(context))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn operation_type(&self) -> OperationType {
        self.operation_type
    }

    pub(crate) fn resolve(&self, context: ResolverContext) -> ResolverFuture {
        (self.resolver)(context)
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}

impl std::fmt::Debug for OperationDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperationDefinition")
            .field("name", &self.name)
            .field("operation_type", &self.operation_type)
            .field("type_annotation", &self.type_annotation)
            .field("arguments", &self.arguments)
            .field("has_access_rule", &self.access_rule.is_some())
            .finish_non_exhaustive()
    }
}
