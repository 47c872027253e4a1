use crate::ast::DirectiveAnnotation;
use crate::ast::Name;
use crate::ast::OperationKind;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;
use crate::GraphQLSourceSpan;

/// An operation definition (query, mutation, or subscription).
///
/// The shorthand form `{ ... }` is an anonymous query with no variables or
/// directives.
///
/// See
/// [Operations](https://spec.graphql.org/October2021/#sec-Language.Operations)
/// in the GraphQL spec.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition<'src> {
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub name: Option<Name<'src>>,
    pub operation_kind: OperationKind,
    pub selection_set: SelectionSet<'src>,
    pub span: GraphQLSourceSpan,
    pub variable_definitions: Vec<VariableDefinition<'src>>,
}

impl OperationDefinition<'_> {
    pub fn name_str(&self) -> Option<&str> {
        self.name.as_ref().map(|name| name.as_str())
    }
}
