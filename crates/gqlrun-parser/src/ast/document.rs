use crate::ast::Definition;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use crate::GraphQLSourceSpan;

/// A parsed executable document: an ordered sequence of operation and
/// fragment definitions.
#[derive(Clone, Debug, PartialEq)]
pub struct Document<'src> {
    pub definitions: Vec<Definition<'src>>,
    pub span: GraphQLSourceSpan,
}

impl<'src> Document<'src> {
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition<'src>> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Operation(op) => Some(op),
            Definition::Fragment(_) => None,
        })
    }

    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition<'src>> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Fragment(frag) => Some(frag),
            Definition::Operation(_) => None,
        })
    }

    /// Looks up a fragment definition by name. The first definition wins if a
    /// name is defined more than once.
    pub fn fragment(&self, name: &str) -> Option<&FragmentDefinition<'src>> {
        self.fragments().find(|frag| frag.name.value == name)
    }
}
