use crate::ast::DirectiveAnnotation;
use crate::ast::Name;
use crate::ast::SelectionSet;
use crate::GraphQLSourceSpan;

/// `fragment Name on TypeName @directives { ... }`
///
/// See
/// [Fragments](https://spec.graphql.org/October2021/#sec-Language.Fragments)
/// in the GraphQL spec.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition<'src> {
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub name: Name<'src>,
    pub selection_set: SelectionSet<'src>,
    pub span: GraphQLSourceSpan,
    pub type_condition: Name<'src>,
}
