use crate::ast::DirectiveAnnotation;
use crate::ast::Name;
use crate::ast::SelectionSet;
use crate::GraphQLSourceSpan;

/// `... on TypeName @directives { ... }`, where the type condition is
/// optional.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment<'src> {
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub selection_set: SelectionSet<'src>,
    pub span: GraphQLSourceSpan,
    pub type_condition: Option<Name<'src>>,
}
