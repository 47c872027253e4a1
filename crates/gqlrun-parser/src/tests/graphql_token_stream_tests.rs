use crate::token::GraphQLTokenKind;
use crate::token_source::StrGraphQLTokenSource;
use crate::GraphQLTokenStream;

#[test]
fn peek_does_not_consume() {
    let mut stream = GraphQLTokenStream::new(StrGraphQLTokenSource::new("a b"));
    assert_eq!(
        stream.peek().map(|t| t.kind.clone()),
        Some(GraphQLTokenKind::name_borrowed("a")),
    );
    assert_eq!(
        stream.peek_nth(1).map(|t| t.kind.clone()),
        Some(GraphQLTokenKind::name_borrowed("b")),
    );
    assert_eq!(
        stream.consume().map(|t| t.kind),
        Some(GraphQLTokenKind::name_borrowed("a")),
    );
}

#[test]
fn ends_with_eof_then_none() {
    let mut stream = GraphQLTokenStream::new(StrGraphQLTokenSource::new("a"));
    assert!(!stream.is_at_end());
    stream.consume();
    assert!(stream.is_at_end());
    assert_eq!(stream.consume().map(|t| t.kind), Some(GraphQLTokenKind::Eof));
    assert!(stream.consume().is_none());
    assert!(stream.peek_nth(3).is_none());
}
