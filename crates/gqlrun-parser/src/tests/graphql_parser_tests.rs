//! Structural tests for successfully parsed executable documents.

use crate::ast;
use crate::ast::AstNode;
use crate::tests::utils::field;
use crate::tests::utils::field_names;
use crate::tests::utils::only_operation;
use crate::tests::utils::parse;

#[test]
fn nested_anonymous_query() {
    let doc = parse("query { hero { name friends { name } } }");
    let op = only_operation(&doc);

    assert_eq!(op.operation_kind, ast::OperationKind::Query);
    assert!(op.name.is_none());
    assert_eq!(field_names(&op.selection_set), vec!["hero"]);

    let hero = field(&op.selection_set.selections[0]);
    let hero_set = hero.selection_set.as_ref().unwrap();
    assert_eq!(field_names(hero_set), vec!["name", "friends"]);

    let friends = field(&hero_set.selections[1]);
    assert_eq!(
        field_names(friends.selection_set.as_ref().unwrap()),
        vec!["name"],
    );
}

#[test]
fn shorthand_query_has_no_keyword() {
    let doc = parse("{ hero { name } }");
    let op = only_operation(&doc);
    assert_eq!(op.operation_kind, ast::OperationKind::Query);
    assert!(op.variable_definitions.is_empty());
}

#[test]
fn named_mutation_and_subscription() {
    let doc = parse(
        "mutation Rate { rate(stars: 5) }\n\
         subscription Watch { reviews { stars } }",
    );
    let ops: Vec<_> = doc.operations().collect();
    assert_eq!(ops.len(), 2);
    assert_eq!(ops[0].operation_kind, ast::OperationKind::Mutation);
    assert_eq!(ops[0].name_str(), Some("Rate"));
    assert_eq!(ops[1].operation_kind, ast::OperationKind::Subscription);
    assert_eq!(ops[1].name_str(), Some("Watch"));
}

#[test]
fn variable_definitions_with_defaults() {
    let doc = parse(
        "query Hero($episode: Episode = JEDI, $ids: [ID!]!, $limit: Int) {\n\
           hero(episode: $episode) { name }\n\
         }",
    );
    let op = only_operation(&doc);
    let vars = &op.variable_definitions;
    assert_eq!(vars.len(), 3);

    assert_eq!(vars[0].name.as_str(), "episode");
    assert_eq!(vars[0].var_type.to_string(), "Episode");
    assert!(matches!(
        &vars[0].default_value,
        Some(ast::Value::Enum(name)) if name.as_str() == "JEDI",
    ));

    assert_eq!(vars[1].var_type.to_string(), "[ID!]!");
    assert!(!vars[1].var_type.nullable());
    assert_eq!(vars[1].var_type.innermost_name().as_str(), "ID");

    assert!(vars[2].default_value.is_none());
    assert!(vars[2].var_type.nullable());
}

#[test]
fn arguments_accept_literals_and_variables() {
    let doc = parse(
        r#"query($id: String) {
            a: human(id: $id) { name }
            b: search(text: "lu\nke", limit: -3, ratio: 1.5e2, exact: true, after: null,
                      tags: [A, "b"], filter: { kind: DROID, min: 0 }) { name }
        }"#,
    );
    let op = only_operation(&doc);
    let a = field(&op.selection_set.selections[0]);
    assert_eq!(a.response_key(), "a");
    assert_eq!(a.name.as_str(), "human");
    assert!(matches!(
        &a.arguments[0].value,
        ast::Value::Variable(name) if name.as_str() == "id",
    ));

    let b = field(&op.selection_set.selections[1]);
    let values: Vec<_> = b.arguments.iter().map(|arg| &arg.value).collect();
    assert!(matches!(values[0], ast::Value::String { value, .. } if value == "lu\nke"));
    assert!(matches!(values[1], ast::Value::Int { value: -3, .. }));
    assert!(matches!(values[2], ast::Value::Float { value, .. } if *value == 150.0));
    assert!(matches!(values[3], ast::Value::Boolean { value: true, .. }));
    assert!(matches!(values[4], ast::Value::Null { .. }));
    assert!(matches!(values[5], ast::Value::List { values, .. } if values.len() == 2));
    assert!(matches!(values[6], ast::Value::Object { fields, .. } if fields.len() == 2));
    assert!(!values[6].contains_variable());
}

#[test]
fn fragments_and_inline_fragments() {
    let doc = parse(
        "query { hero { ...HeroName ... on Droid { primaryFunction } ... @skip(if: false) { id } } }\n\
         fragment HeroName on Character @keep { name }",
    );
    let op = only_operation(&doc);
    let hero = field(&op.selection_set.selections[0]);
    let selections = &hero.selection_set.as_ref().unwrap().selections;
    assert_eq!(selections.len(), 3);

    match &selections[0] {
        ast::Selection::FragmentSpread(spread) => {
            assert_eq!(spread.name.as_str(), "HeroName");
        },
        other => panic!("expected fragment spread, got {other:?}"),
    }
    match &selections[1] {
        ast::Selection::InlineFragment(inline) => {
            assert_eq!(
                inline.type_condition.as_ref().map(|n| n.as_str()),
                Some("Droid"),
            );
        },
        other => panic!("expected inline fragment, got {other:?}"),
    }
    match &selections[2] {
        ast::Selection::InlineFragment(inline) => {
            assert!(inline.type_condition.is_none());
            assert_eq!(inline.directives[0].name.as_str(), "skip");
        },
        other => panic!("expected inline fragment, got {other:?}"),
    }

    let frag = doc.fragment("HeroName").unwrap();
    assert_eq!(frag.type_condition.as_str(), "Character");
    assert_eq!(frag.directives.len(), 1);
    assert!(doc.fragment("Missing").is_none());
}

#[test]
fn keywords_are_valid_field_names() {
    let doc = parse("{ query fragment on true null }");
    let op = only_operation(&doc);
    assert_eq!(
        field_names(&op.selection_set),
        vec!["query", "fragment", "on", "true", "null"],
    );
}

#[test]
fn spans_cover_source_text() {
    let source = "query {\n  hero(episode: JEDI) { name }\n}";
    let doc = parse(source);
    let op = only_operation(&doc);
    let hero = field(&op.selection_set.selections[0]);

    assert_eq!(hero.span.start_inclusive.display_line(), 2);
    assert_eq!(hero.span.start_inclusive.display_column(), 3);
    assert_eq!(
        hero.source_text(source),
        Some("hero(episode: JEDI) { name }"),
    );
    assert_eq!(op.source_text(source), Some(source));
}

#[test]
fn commas_and_comments_are_ignored() {
    let doc = parse("# leading\n{ a, b,, c # trailing\n }");
    let op = only_operation(&doc);
    assert_eq!(field_names(&op.selection_set), vec!["a", "b", "c"]);
}

#[test]
fn block_strings_strip_indentation() {
    let doc = parse("{ f(text: \"\"\"\n    hello\n      world\n  \"\"\") }");
    let op = only_operation(&doc);
    let f = field(&op.selection_set.selections[0]);
    assert!(matches!(
        &f.arguments[0].value,
        ast::Value::String { value, .. } if value == "hello\n  world",
    ));
}
