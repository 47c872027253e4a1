use crate::ast::Argument;
use crate::ast::DirectiveAnnotation;
use crate::ast::Name;
use crate::ast::SelectionSet;
use crate::GraphQLSourceSpan;

/// A field selection, optionally aliased, with arguments, directives, and a
/// nested selection set.
///
/// See
/// [Fields](https://spec.graphql.org/October2021/#sec-Language.Fields)
/// in the GraphQL spec.
#[derive(Clone, Debug, PartialEq)]
pub struct Field<'src> {
    pub alias: Option<Name<'src>>,
    pub arguments: Vec<Argument<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub name: Name<'src>,
    pub selection_set: Option<SelectionSet<'src>>,
    pub span: GraphQLSourceSpan,
}

impl Field<'_> {
    /// The key this field's value is stored under in the response: the alias
    /// if present, else the field name.
    pub fn response_key(&self) -> &str {
        self.alias.as_ref().unwrap_or(&self.name).as_str()
    }

    pub fn argument(&self, name: &str) -> Option<&Argument<'_>> {
        self.arguments.iter().find(|arg| arg.name.value == name)
    }
}
