//! A GraphQL parser for executable (request) documents: operations,
//! fragments, variables, arguments, and directives.
//!
//! Every AST node carries a [`GraphQLSourceSpan`] used for error reporting.
//! Parsing is all-or-nothing: either a complete [`ast::Document`] is returned
//! or the first [`GraphQLParseError`] encountered.

pub mod ast;
mod graphql_error_note;
mod graphql_error_note_kind;
mod graphql_parse_error;
mod graphql_parse_error_kind;
mod graphql_parser;
mod graphql_source_span;
mod graphql_string_parsing_error;
mod graphql_token_stream;
mod source_position;
pub mod token;
pub mod token_source;

pub use graphql_error_note::GraphQLErrorNote;
pub use graphql_error_note::GraphQLErrorNotes;
pub use graphql_error_note_kind::GraphQLErrorNoteKind;
pub use graphql_parse_error::GraphQLParseError;
pub use graphql_parse_error_kind::GraphQLParseErrorKind;
pub use graphql_parse_error_kind::ValueParsingError;
pub use graphql_parser::GraphQLParser;
pub use graphql_source_span::GraphQLSourceSpan;
pub use graphql_string_parsing_error::GraphQLStringParsingError;
pub use graphql_token_stream::GraphQLTokenStream;
pub use smallvec::smallvec;
pub use smallvec::SmallVec;
pub use source_position::SourcePosition;

/// Parses `source` as an executable document.
///
/// Shorthand for `GraphQLParser::new(source).parse_executable_document()`.
pub fn parse_executable_document(
    source: &str,
) -> Result<ast::Document, GraphQLParseError> {
    GraphQLParser::new(source).parse_executable_document()
}

#[cfg(test)]
mod tests;
