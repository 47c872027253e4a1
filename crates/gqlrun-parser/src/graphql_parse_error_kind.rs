use crate::GraphQLStringParsingError;

/// Categorizes parse errors for programmatic handling.
///
/// The `#[error(...)]` messages are concise. Full human-readable messages
/// live in `GraphQLParseError::message()`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphQLParseErrorKind {
    /// Expected specific token(s) but found something else.
    ///
    /// ```text
    /// query { hero(id 1000) { name } }
    ///                 ^^^^ expected `:`, found `1000`
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        expected: Vec<String>,
        found: String,
    },

    /// The document ended before a complete construct was parsed.
    #[error("unexpected end of input")]
    UnexpectedEof {
        expected: Vec<String>,
    },

    /// The lexer rejected part of the input. The lexer's message and notes are
    /// preserved on the owning `GraphQLParseError`.
    #[error("lexer error")]
    LexerError,

    /// A delimiter was opened but input ended before it was closed.
    #[error("unclosed delimiter: `{delimiter}`")]
    UnclosedDelimiter {
        delimiter: String,
    },

    /// A literal value could not be converted (e.g. integer overflow or a bad
    /// string escape).
    #[error("invalid value")]
    InvalidValue(ValueParsingError),

    /// A name was used where it is reserved (e.g. `fragment on on User`).
    #[error("reserved name: `{name}`")]
    ReservedName {
        name: String,
    },

    /// Empty construct that requires content, such as `{ }` or `()`.
    #[error("invalid empty construct: `{construct}`")]
    InvalidEmptyConstruct {
        construct: String,
    },

    /// A schema (type-system) definition appeared in a request document.
    #[error("type-system definition in executable document")]
    TypeSystemDefinition {
        keyword: String,
    },

    /// Nesting exceeded the parser's recursion limit.
    #[error("nesting too deep")]
    NestingTooDeep,
}

/// Errors that occur when converting literal token text to values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueParsingError {
    #[error("Invalid GraphQL string: {0}")]
    String(#[from] GraphQLStringParsingError),

    /// Integer literals must fit in a signed 64-bit integer. Narrower scalar
    /// checks happen during execution.
    #[error("Invalid GraphQL integer: {0}")]
    Int(String),

    /// Float literals must be finite.
    #[error("Invalid GraphQL float: {0}")]
    Float(String),
}
