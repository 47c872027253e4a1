use crate::types::TypeAnnotation;

/// A list of some element type, such as `[String!]`.
///
/// `nullable` governs the list container itself; the element type carries
/// its own nullability.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ListTypeAnnotation {
    pub(crate) inner: Box<TypeAnnotation>,
    pub(crate) nullable: bool,
}

impl ListTypeAnnotation {
    pub fn inner_type_annotation(&self) -> &TypeAnnotation {
        &self.inner
    }

    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        self.nullable == other.nullable
            && self.inner.is_equivalent_to(&other.inner)
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn to_graphql_string(&self) -> String {
        format!(
            "[{}]{}",
            self.inner.to_graphql_string(),
            if self.nullable { "" } else { "!" },
        )
    }
}
