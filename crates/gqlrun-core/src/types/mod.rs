mod list_type_annotation;
mod named_type_annotation;
mod scalar_kind;
mod type_annotation;
mod type_expression_error;

pub use list_type_annotation::ListTypeAnnotation;
pub use named_type_annotation::NamedTypeAnnotation;
pub use scalar_kind::ScalarKind;
pub use type_annotation::TypeAnnotation;
pub use type_expression_error::TypeExpressionError;

#[cfg(test)]
mod tests;
