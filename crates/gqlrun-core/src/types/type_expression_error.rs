use thiserror::Error;

/// A type expression string (such as `"[String!]!"`) that could not be parsed.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeExpressionError {
    #[error("type expression `{expr}` has an empty type name")]
    EmptyTypeName { expr: String },

    #[error("type expression `{expr}` uses `{name}`, which is not a valid GraphQL name")]
    InvalidTypeName { expr: String, name: String },

    #[error("type expression `{expr}` repeats the non-null marker `!`")]
    RepeatedNonNullMarker { expr: String },

    #[error("type expression `{expr}` has unbalanced list brackets")]
    UnbalancedBrackets { expr: String },
}
