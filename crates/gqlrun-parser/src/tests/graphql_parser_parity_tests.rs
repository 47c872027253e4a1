//! Cross-checks document structure and field positions against the
//! `graphql-parser` crate for a handful of representative requests.

use crate::ast;
use crate::tests::utils::parse;
use graphql_parser::query as gp;

/// Flattens a document into `kind name @line:col` lines so that the two
/// parsers' outputs can be compared directly.
fn outline(doc: &ast::Document<'_>) -> Vec<String> {
    let mut lines = vec![];
    for def in &doc.definitions {
        match def {
            ast::Definition::Operation(op) => {
                lines.push(format!(
                    "{} {}",
                    op.operation_kind,
                    op.name_str().unwrap_or("<anonymous>"),
                ));
                outline_selection_set(&op.selection_set, 1, &mut lines);
            },
            ast::Definition::Fragment(frag) => {
                lines.push(format!("fragment {} on {}", frag.name, frag.type_condition));
                outline_selection_set(&frag.selection_set, 1, &mut lines);
            },
        }
    }
    lines
}

fn outline_selection_set(
    selection_set: &ast::SelectionSet<'_>,
    depth: usize,
    lines: &mut Vec<String>,
) {
    let indent = "  ".repeat(depth);
    for selection in &selection_set.selections {
        let pos = &selection.span().start_inclusive;
        let at = format!("@{}:{}", pos.display_line(), pos.display_column());
        match selection {
            ast::Selection::Field(field) => {
                lines.push(format!(
                    "{indent}{} ({} args) {at}",
                    field.response_key(),
                    field.arguments.len(),
                ));
                if let Some(nested) = &field.selection_set {
                    outline_selection_set(nested, depth + 1, lines);
                }
            },
            ast::Selection::FragmentSpread(spread) => {
                lines.push(format!("{indent}...{} {at}", spread.name));
            },
            ast::Selection::InlineFragment(inline) => {
                let cond = inline
                    .type_condition
                    .as_ref()
                    .map(|name| name.as_str())
                    .unwrap_or("*");
                lines.push(format!("{indent}... on {cond} {at}"));
                outline_selection_set(&inline.selection_set, depth + 1, lines);
            },
        }
    }
}

fn gp_outline(doc: &gp::Document<'_, String>) -> Vec<String> {
    let mut lines = vec![];
    for def in &doc.definitions {
        match def {
            gp::Definition::Operation(op) => {
                let (kind, name, selection_set) = match op {
                    gp::OperationDefinition::SelectionSet(ss) => ("query", None, ss),
                    gp::OperationDefinition::Query(q) => ("query", q.name.as_ref(), &q.selection_set),
                    gp::OperationDefinition::Mutation(m) => {
                        ("mutation", m.name.as_ref(), &m.selection_set)
                    },
                    gp::OperationDefinition::Subscription(s) => {
                        ("subscription", s.name.as_ref(), &s.selection_set)
                    },
                };
                lines.push(format!(
                    "{kind} {}",
                    name.map(String::as_str).unwrap_or("<anonymous>"),
                ));
                gp_outline_selection_set(selection_set, 1, &mut lines);
            },
            gp::Definition::Fragment(frag) => {
                let gp::TypeCondition::On(cond) = &frag.type_condition;
                lines.push(format!("fragment {} on {cond}", frag.name));
                gp_outline_selection_set(&frag.selection_set, 1, &mut lines);
            },
        }
    }
    lines
}

fn gp_outline_selection_set(
    selection_set: &gp::SelectionSet<'_, String>,
    depth: usize,
    lines: &mut Vec<String>,
) {
    let indent = "  ".repeat(depth);
    for selection in &selection_set.items {
        match selection {
            gp::Selection::Field(field) => {
                let key = field.alias.as_ref().unwrap_or(&field.name);
                lines.push(format!(
                    "{indent}{key} ({} args) @{}:{}",
                    field.arguments.len(),
                    field.position.line,
                    field.position.column,
                ));
                if !field.selection_set.items.is_empty() {
                    gp_outline_selection_set(&field.selection_set, depth + 1, lines);
                }
            },
            gp::Selection::FragmentSpread(spread) => {
                lines.push(format!(
                    "{indent}...{} @{}:{}",
                    spread.fragment_name,
                    spread.position.line,
                    spread.position.column,
                ));
            },
            gp::Selection::InlineFragment(inline) => {
                let cond = match &inline.type_condition {
                    Some(gp::TypeCondition::On(name)) => name.as_str(),
                    None => "*",
                };
                lines.push(format!(
                    "{indent}... on {cond} @{}:{}",
                    inline.position.line,
                    inline.position.column,
                ));
                gp_outline_selection_set(&inline.selection_set, depth + 1, lines);
            },
        }
    }
}

fn assert_parity(source: &str) {
    let ours = outline(&parse(source));
    let theirs = match graphql_parser::parse_query::<String>(source) {
        Ok(doc) => gp_outline(&doc),
        Err(err) => panic!("graphql-parser rejected the document: {err}"),
    };
    assert_eq!(ours, theirs);
}

#[test]
fn parity_shorthand_query() {
    assert_parity("{ hero { name friends { name } } }");
}

#[test]
fn parity_named_query_with_variables() {
    assert_parity(
        "query HeroNameAndFriends($episode: Episode = JEDI) {\n\
         \x20 hero(episode: $episode) {\n\
         \x20   name\n\
         \x20   friends { name }\n\
         \x20 }\n\
         }\n",
    );
}

#[test]
fn parity_aliases_and_fragments() {
    assert_parity(
        "query {\n\
         \x20 luke: human(id: \"1000\") { ...HumanFields }\n\
         \x20 leia: human(id: \"1003\") { ...HumanFields }\n\
         \x20 hero { ... on Droid { primaryFunction } ... { id } }\n\
         }\n\
         fragment HumanFields on Human { name homePlanet }\n",
    );
}

#[test]
fn parity_multiple_operations() {
    assert_parity(
        "query A { hero { name } }\n\
         mutation B { rateEpisode(episode: JEDI, stars: 5) { stars } }\n",
    );
}
