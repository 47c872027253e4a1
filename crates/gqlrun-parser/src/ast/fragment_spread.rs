use crate::ast::DirectiveAnnotation;
use crate::ast::Name;
use crate::GraphQLSourceSpan;

/// `...FragmentName @directives`
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread<'src> {
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub name: Name<'src>,
    pub span: GraphQLSourceSpan,
}
