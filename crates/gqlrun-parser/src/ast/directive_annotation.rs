use crate::ast::Argument;
use crate::ast::Name;
use crate::GraphQLSourceSpan;

/// `@name(args...)`. Directives are kept structurally; nothing interprets
/// them.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation<'src> {
    pub arguments: Vec<Argument<'src>>,
    pub name: Name<'src>,
    pub span: GraphQLSourceSpan,
}
