use crate::ast::Name;
use crate::ast::Value;
use crate::GraphQLSourceSpan;

/// `name: value` in a field or directive argument list.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument<'src> {
    pub name: Name<'src>,
    pub span: GraphQLSourceSpan,
    pub value: Value<'src>,
}
