use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use crate::GraphQLSourceSpan;

/// A top-level definition in an executable document.
#[derive(Clone, Debug, PartialEq)]
pub enum Definition<'src> {
    Fragment(FragmentDefinition<'src>),
    Operation(OperationDefinition<'src>),
}

impl Definition<'_> {
    pub fn span(&self) -> &GraphQLSourceSpan {
        match self {
            Definition::Fragment(frag) => &frag.span,
            Definition::Operation(op) => &op.span,
        }
    }
}
