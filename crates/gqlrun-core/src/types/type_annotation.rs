use crate::names;
use crate::schema::Schema;
use crate::types::ListTypeAnnotation;
use crate::types::NamedTypeAnnotation;
use crate::types::ScalarKind;
use crate::types::TypeExpressionError;
use gqlrun_parser::ast;

type Result<T> = std::result::Result<T, TypeExpressionError>;

/// The declared type of a field, argument, operation, or variable.
///
/// `[String!]`, `[String]!`, and `[String!]!` are three distinct values: each
/// level of list wrapping records its own nullability.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}

impl TypeAnnotation {
    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeAnnotation`] if this annotation is one.
    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Converts a variable-definition type from a parsed request document,
    /// classifying the innermost name against the built-in scalars and the
    /// enums registered in `schema`.
    pub fn from_ast(ast_type: &ast::TypeAnnotation<'_>, schema: &Schema) -> Self {
        match ast_type {
            ast::TypeAnnotation::List(list) => Self::List(ListTypeAnnotation {
                inner: Box::new(Self::from_ast(&list.element_type, schema)),
                nullable: list.nullable,
            }),
            ast::TypeAnnotation::Named(named) => {
                let name = named.name.as_str();
                let is_scalar = ScalarKind::from_name(name).is_some();
                Self::Named(NamedTypeAnnotation {
                    is_enum: !is_scalar && schema.enum_definition(name).is_some(),
                    is_scalar,
                    name: name.to_string(),
                    nullable: named.nullable,
                })
            },
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            Self::List(list) => list.inner.innermost_named_type_annotation(),
            Self::Named(named) => named,
        }
    }

    /// Check if two type annotations are definitionally equal: same list
    /// structure, same nullability at each level, and same innermost name.
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::List(self_list), Self::List(other_list))
                => self_list.is_equivalent_to(other_list),
            (Self::Named(self_named), Self::Named(other_named))
                => self_named.is_equivalent_to(other_named),
            _ => false,
        }
    }

    /// Whether the innermost named type was recognized as an enum.
    pub fn is_enum(&self) -> bool {
        self.innermost_named_type_annotation().is_enum
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Whether the innermost named type is a built-in scalar.
    pub fn is_scalar(&self) -> bool {
        self.innermost_named_type_annotation().is_scalar
    }

    /// The innermost named type's name.
    pub fn name(&self) -> &str {
        &self.innermost_named_type_annotation().name
    }

    pub fn nullable(&self) -> bool {
        match self {
            Self::List(list) => list.nullable,
            Self::Named(named) => named.nullable,
        }
    }

    /// Parses a type expression such as `"[String!]!"`.
    ///
    /// A trailing `!` makes the outermost level non-null. A bracketed
    /// remainder is parsed recursively and wrapped as a list. Anything else
    /// is a named type, classified as a scalar if it names a [`ScalarKind`]
    /// and as an enum if `is_known_enum` says so at the time of the call.
    /// Enums declared after the call are not recognized retroactively.
    pub fn parse(
        expr: &str,
        is_known_enum: impl Fn(&str) -> bool,
    ) -> Result<Self> {
        Self::parse_impl(expr, expr.trim(), &is_known_enum)
    }

    fn parse_impl(
        full_expr: &str,
        expr: &str,
        is_known_enum: &dyn Fn(&str) -> bool,
    ) -> Result<Self> {
        let (body, nullable) = match expr.strip_suffix('!') {
            Some(body) => (body.trim_end(), false),
            None => (expr, true),
        };
        if body.ends_with('!') {
            return Err(TypeExpressionError::RepeatedNonNullMarker {
                expr: full_expr.to_string(),
            });
        }

        if let Some(rest) = body.strip_prefix('[') {
            let inner = rest.strip_suffix(']').ok_or_else(|| {
                TypeExpressionError::UnbalancedBrackets {
                    expr: full_expr.to_string(),
                }
            })?;
            let inner = Self::parse_impl(full_expr, inner.trim(), is_known_enum)?;
            return Ok(Self::List(ListTypeAnnotation {
                inner: Box::new(inner),
                nullable,
            }));
        }

        if body.contains('[') || body.contains(']') {
            return Err(TypeExpressionError::UnbalancedBrackets {
                expr: full_expr.to_string(),
            });
        }
        if body.is_empty() {
            return Err(TypeExpressionError::EmptyTypeName {
                expr: full_expr.to_string(),
            });
        }
        if !names::is_valid_name(body) {
            return Err(TypeExpressionError::InvalidTypeName {
                expr: full_expr.to_string(),
                name: body.to_string(),
            });
        }

        let is_scalar = ScalarKind::from_name(body).is_some();
        Ok(Self::Named(NamedTypeAnnotation {
            is_enum: !is_scalar && is_known_enum(body),
            is_scalar,
            name: body.to_string(),
            nullable,
        }))
    }

    pub fn to_graphql_string(&self) -> String {
        match self {
            Self::List(list) => list.to_graphql_string(),
            Self::Named(named) => named.to_graphql_string(),
        }
    }
}

impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_graphql_string())
    }
}
