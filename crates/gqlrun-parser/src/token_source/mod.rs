mod str_graphql_token_source;

pub use str_graphql_token_source::StrGraphQLTokenSource;

use crate::token::GraphQLToken;

/// Marker trait for [`GraphQLToken`] lexers (iterators that generate
/// [`GraphQLToken`]s).
///
/// Lexers are responsible for:
/// - Skipping ignored tokens (whitespace, commas, comments, BOM)
/// - Emitting [`GraphQLTokenKind::Error`](crate::token::GraphQLTokenKind::Error)
///   for malformed input
/// - Emitting a final [`GraphQLTokenKind::Eof`](crate::token::GraphQLTokenKind::Eof)
///   token
///
/// All lookahead and buffering is handled by
/// [`GraphQLTokenStream`](crate::GraphQLTokenStream).
pub trait GraphQLTokenSource<'src>: Iterator<Item = GraphQLToken<'src>> {}

impl<'src, T> GraphQLTokenSource<'src> for T
where
    T: Iterator<Item = GraphQLToken<'src>>,
{}
