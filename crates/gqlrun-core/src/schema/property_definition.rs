use crate::execution::ResolverContext;
use crate::execution::SchemaRequestContext;
use crate::schema::PropertyAccessRule;
use crate::schema::PropertyResolver;
use crate::schema::ResolverFuture;
use crate::types::TypeAnnotation;
use crate::value::ObjectRef;
use indexmap::IndexMap;
use std::any::Any;

/// A field of a registered object type.
#[derive(Clone)]
pub struct PropertyDefinition {
    pub(super) access_rule: Option<PropertyAccessRule>,
    pub(super) arguments: IndexMap<String, TypeAnnotation>,
    pub(super) name: String,
    pub(super) resolver: PropertyResolver,
    pub(super) type_annotation: TypeAnnotation,
}

impl PropertyDefinition {
    /// Declared arguments in declaration order.
    pub fn arguments(&self) -> &IndexMap<String, TypeAnnotation> {
        &self.arguments
    }

    pub fn has_access_rule(&self) -> bool {
        self.access_rule.is_some()
    }

    /// Evaluates the access rule for `instance`. Properties without one are
    /// always accessible.
    pub fn is_accessible(
        &self,
        instance: &(dyn Any + Send + Sync),
        context: &SchemaRequestContext,
    ) -> bool {
        self.access_rule
            .as_ref()
            .is_none_or(|rule| rule(instance, context))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn resolve(
        &self,
        instance: ObjectRef,
        context: ResolverContext,
    ) -> ResolverFuture {
        (self.resolver)(instance, context)
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}

impl std::fmt::Debug for PropertyDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyDefinition")
            .field("name", &self.name)
            .field("type_annotation", &self.type_annotation)
            .field("arguments", &self.arguments)
            .field("has_access_rule", &self.access_rule.is_some())
            .finish_non_exhaustive()
    }
}
