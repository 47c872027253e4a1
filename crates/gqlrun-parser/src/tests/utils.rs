//! Various test utils.

use crate::ast;
use crate::GraphQLParseError;
use crate::GraphQLParser;

pub fn parse(source: &str) -> ast::Document<'_> {
    match GraphQLParser::new(source).parse_executable_document() {
        Ok(doc) => doc,
        Err(err) => panic!("failed to parse:\n{}", err.format_detailed(Some(source))),
    }
}

pub fn parse_err(source: &str) -> GraphQLParseError {
    match GraphQLParser::new(source).parse_executable_document() {
        Ok(doc) => panic!("expected a parse error, got: {doc:#?}"),
        Err(err) => err,
    }
}

pub fn only_operation<'a, 'src>(
    doc: &'a ast::Document<'src>,
) -> &'a ast::OperationDefinition<'src> {
    let ops: Vec<_> = doc.operations().collect();
    assert_eq!(ops.len(), 1, "expected exactly one operation");
    ops[0]
}

pub fn field<'a, 'src>(selection: &'a ast::Selection<'src>) -> &'a ast::Field<'src> {
    match selection {
        ast::Selection::Field(field) => field,
        other => panic!("expected a field selection, got: {other:#?}"),
    }
}

pub fn field_names(selection_set: &ast::SelectionSet<'_>) -> Vec<String> {
    selection_set
        .selections
        .iter()
        .map(|sel| field(sel).response_key().to_string())
        .collect()
}
