use crate::types::ScalarKind;

/// A reference to a named type, such as `String!` or `Episode`.
///
/// Whether the name refers to a built-in scalar or to an enum is decided when
/// the annotation is created and never revisited.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NamedTypeAnnotation {
    pub(crate) is_enum: bool,
    pub(crate) is_scalar: bool,
    pub(crate) name: String,
    pub(crate) nullable: bool,
}

impl NamedTypeAnnotation {
    pub fn is_enum(&self) -> bool {
        self.is_enum
    }

    /// Check if two named type annotations are definitionally equal: same
    /// type name and same nullability.
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        self.nullable == other.nullable && self.name == other.name
    }

    pub fn is_scalar(&self) -> bool {
        self.is_scalar
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    /// The built-in scalar this annotation names, if any.
    pub fn scalar_kind(&self) -> Option<ScalarKind> {
        if self.is_scalar {
            ScalarKind::from_name(&self.name)
        } else {
            None
        }
    }

    pub fn to_graphql_string(&self) -> String {
        format!("{}{}", self.name, if self.nullable { "" } else { "!" })
    }
}
