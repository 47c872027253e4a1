use crate::GraphQLSourceSpan;

/// Implemented by every AST node type.
///
/// Nodes implement this via `#[inherent] impl AstNode`, so `span()` is
/// callable without importing the trait.
pub trait AstNode {
    fn span(&self) -> &GraphQLSourceSpan;

    /// The slice of `source` this node was parsed from.
    fn source_text<'s>(&self, source: &'s str) -> Option<&'s str> {
        self.span().source_slice(source)
    }
}

/// Implements [`AstNode`] for node structs that store a `span` field.
macro_rules! impl_ast_node {
    ($($node:ident),* $(,)?) => {
        $(
            #[inherent::inherent]
            impl crate::ast::AstNode for crate::ast::$node<'_> {
                pub fn span(&self) -> &crate::GraphQLSourceSpan {
                    &self.span
                }
            }
        )*
    };
}

impl_ast_node!(
    Argument,
    DirectiveAnnotation,
    Document,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    Name,
    OperationDefinition,
    SelectionSet,
    VariableDefinition,
);
