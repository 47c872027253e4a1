use crate::ast::Selection;
use crate::GraphQLSourceSpan;

/// `{ selection ... }`. Never empty once parsed.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet<'src> {
    pub selections: Vec<Selection<'src>>,
    pub span: GraphQLSourceSpan,
}
