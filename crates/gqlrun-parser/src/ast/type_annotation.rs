use crate::ast::Name;
use crate::GraphQLSourceSpan;

/// A type reference as written in a variable definition.
///
/// Nullability is recorded on each level rather than as a separate
/// `NonNull` wrapper, so `[String!]!` is a non-null list of non-null
/// `String`s.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation<'src> {
    List(ListTypeAnnotation<'src>),
    Named(NamedTypeAnnotation<'src>),
}

impl<'src> TypeAnnotation<'src> {
    pub fn nullable(&self) -> bool {
        match self {
            TypeAnnotation::List(list) => list.nullable,
            TypeAnnotation::Named(named) => named.nullable,
        }
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        match self {
            TypeAnnotation::List(list) => &list.span,
            TypeAnnotation::Named(named) => &named.span,
        }
    }

    /// The named type at the bottom of any list wrapping.
    pub fn innermost_name(&self) -> &Name<'src> {
        match self {
            TypeAnnotation::List(list) => list.element_type.innermost_name(),
            TypeAnnotation::Named(named) => &named.name,
        }
    }
}

impl std::fmt::Display for TypeAnnotation<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeAnnotation::List(list) => {
                write!(f, "[{}]", list.element_type)?;
                if !list.nullable {
                    f.write_str("!")?;
                }
            },
            TypeAnnotation::Named(named) => {
                f.write_str(&named.name.value)?;
                if !named.nullable {
                    f.write_str("!")?;
                }
            },
        }
        Ok(())
    }
}

/// A named type reference (e.g. `String`, `String!`). The `span` covers
/// the trailing `!` when present.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeAnnotation<'src> {
    pub name: Name<'src>,
    pub nullable: bool,
    pub span: GraphQLSourceSpan,
}

/// A list type reference (e.g. `[String]`, `[String!]!`).
#[derive(Clone, Debug, PartialEq)]
pub struct ListTypeAnnotation<'src> {
    pub element_type: Box<TypeAnnotation<'src>>,
    pub nullable: bool,
    pub span: GraphQLSourceSpan,
}
