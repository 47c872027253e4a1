use gqlrun_parser::GraphQLSourceSpan;
use thiserror::Error;

/// One entry of a response's `errors` list.
#[derive(Clone, Debug, Error, PartialEq, serde::Serialize)]
#[error("{message}")]
pub struct GraphQLError {
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    locations: Vec<ErrorLocation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    path: Vec<PathSegment>,
    #[serde(skip)]
    kind: ErrorKind,
}

impl GraphQLError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            locations: vec![],
            message: message.into(),
            path: vec![],
        }
    }

    /// Adds the start of `span` as a location of this error.
    pub fn at(mut self, span: &GraphQLSourceSpan) -> Self {
        self.locations.push(ErrorLocation {
            column: span.start_inclusive.display_column(),
            line: span.start_inclusive.display_line(),
        });
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn locations(&self) -> &[ErrorLocation] {
        &self.locations
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    pub fn with_path(mut self, path: Vec<PathSegment>) -> Self {
        self.path = path;
        self
    }
}

/// Classifies a [`GraphQLError`]. Not part of the serialized error shape.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// An access rule returned `false`.
    Authorization,
    /// The request deadline expired while a resolver was pending.
    Cancellation,
    /// A non-null position resolved to `null` without another error
    /// explaining why.
    NullPropagation,
    /// A resolver failed or returned a value that does not fit its declared
    /// type.
    Resolver,
    /// The request does not fit the schema: unknown fields or arguments, bad
    /// variable values, unknown fragments, and so on.
    Validation,
}

/// A 1-based line/column position in the request document.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub struct ErrorLocation {
    pub line: usize,
    pub column: usize,
}

/// A step in a response path: a field's response key or a list index.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

impl PathSegment {
    pub fn as_field(&self) -> Option<&str> {
        match self {
            PathSegment::Field(key) => Some(key),
            PathSegment::Index(_) => None,
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Field(key.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

impl std::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathSegment::Field(key) => f.write_str(key),
            PathSegment::Index(index) => write!(f, "{index}"),
        }
    }
}
